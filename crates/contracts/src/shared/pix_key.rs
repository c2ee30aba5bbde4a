//! Автоопределение типа ключа Pix.
//!
//! Правила проверяются строго по порядку, первое совпадение выигрывает.
//! Цифровые правила (CNPJ, CPF, телефон) стоят раньше e-mail, поэтому строка
//! с ровно 14 цифрами классифицируется как CNPJ, даже если содержит `@` и `.`.

use serde::{Deserialize, Serialize};

use super::text::digits_only;

pub const CNPJ_DIGITS: usize = 14;
pub const CPF_DIGITS: usize = 11;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 13;

/// Минимальная длина случайного ключа (UUID-подобного), в символах исходной строки
pub const RANDOM_KEY_MIN_LEN: usize = 25;

/// Тип ключа Pix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PixKeyType {
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
    #[serde(rename = "TELEFONE")]
    Phone,
    #[serde(rename = "EMAIL")]
    Email,
    #[serde(rename = "ALEATORIA")]
    Random,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl PixKeyType {
    /// Код, который ожидает backend в поле `tipo_de_chave_pix`
    pub fn code(&self) -> &'static str {
        match self {
            PixKeyType::Cpf => "CPF",
            PixKeyType::Cnpj => "CNPJ",
            PixKeyType::Phone => "TELEFONE",
            PixKeyType::Email => "EMAIL",
            PixKeyType::Random => "ALEATORIA",
            PixKeyType::Unknown => "",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PixKeyType::Cpf => "CPF",
            PixKeyType::Cnpj => "CNPJ",
            PixKeyType::Phone => "Telefone",
            PixKeyType::Email => "E-mail",
            PixKeyType::Random => "Chave aleatória",
            PixKeyType::Unknown => "Não reconhecido",
        }
    }

    /// Типы, которые оператор может выбрать вручную в форме редактирования
    pub fn all_selectable() -> Vec<PixKeyType> {
        vec![
            PixKeyType::Cpf,
            PixKeyType::Cnpj,
            PixKeyType::Phone,
            PixKeyType::Email,
            PixKeyType::Random,
        ]
    }

    /// Парсинг кода. `AUTO` и пустая строка дают `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "CPF" => Some(PixKeyType::Cpf),
            "CNPJ" => Some(PixKeyType::Cnpj),
            "TELEFONE" => Some(PixKeyType::Phone),
            "EMAIL" => Some(PixKeyType::Email),
            "ALEATORIA" => Some(PixKeyType::Random),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PixKeyType::Unknown)
    }
}

impl std::fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Определить тип ключа Pix по введённой строке.
///
/// Функция тотальна: пустая или нераспознанная строка даёт `PixKeyType::Unknown`.
pub fn classify(raw: &str) -> PixKeyType {
    let digits = digits_only(raw).len();

    if digits == CNPJ_DIGITS {
        return PixKeyType::Cnpj;
    }
    if digits == CPF_DIGITS {
        return PixKeyType::Cpf;
    }
    if (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        return PixKeyType::Phone;
    }
    if raw.contains('@') && raw.contains('.') {
        return PixKeyType::Email;
    }
    // Длина в символах, а не в байтах: ключ может содержать не-ASCII
    if raw.chars().count() >= RANDOM_KEY_MIN_LEN {
        return PixKeyType::Random;
    }
    PixKeyType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnpj_by_digit_count() {
        assert_eq!(classify("12.345.678/0001-90"), PixKeyType::Cnpj);
        assert_eq!(classify("12345678000190"), PixKeyType::Cnpj);
    }

    #[test]
    fn test_cpf_by_digit_count() {
        assert_eq!(classify("123.456.789-09"), PixKeyType::Cpf);
        assert_eq!(classify("12345678909"), PixKeyType::Cpf);
    }

    #[test]
    fn test_phone_range() {
        assert_eq!(classify("2133334444"), PixKeyType::Phone);
        assert_eq!(classify("(21) 3333-4444"), PixKeyType::Phone);
        assert_eq!(classify("+55 21 3333-4444"), PixKeyType::Phone);
        assert_eq!(classify("5521999998888"), PixKeyType::Phone);
    }

    #[test]
    fn test_digit_rules_ignore_other_characters() {
        for d in 10..=13 {
            let s: String = "9".repeat(d);
            let expected = if d == 11 { PixKeyType::Cpf } else { PixKeyType::Phone };
            assert_eq!(classify(&format!("x-{s}-y")), expected, "digits = {d}");
        }
    }

    #[test]
    fn test_email() {
        assert_eq!(classify("user@example.com"), PixKeyType::Email);
        assert_eq!(classify("joao.silva@gmail.com.br"), PixKeyType::Email);
    }

    #[test]
    fn test_email_requires_both_at_and_dot() {
        assert_eq!(classify("user@example"), PixKeyType::Unknown);
        assert_eq!(classify("user.example"), PixKeyType::Unknown);
    }

    #[test]
    fn test_digit_rules_win_over_email() {
        // 14 цифр внутри e-mail: правило CNPJ срабатывает раньше
        let raw = format!("a@b.c{}", "1".repeat(14));
        assert_eq!(classify(&raw), PixKeyType::Cnpj);
        assert_eq!(classify("12345678909@mail.com"), PixKeyType::Cpf);
    }

    #[test]
    fn test_email_with_few_digits_is_still_email() {
        // 20 символов "x" не добавляют цифр, цифровые правила не срабатывают
        let raw = format!("a@b.c{}", "x".repeat(20));
        assert_eq!(classify(&raw), PixKeyType::Email);
    }

    #[test]
    fn test_random_key() {
        assert_eq!(
            classify("3f2b9c1e-7a4d-4e8b-9c21-aa00ffee1234"),
            PixKeyType::Random
        );
        assert_eq!(classify(&"k".repeat(25)), PixKeyType::Random);
        assert_eq!(classify(&"k".repeat(24)), PixKeyType::Unknown);
    }

    #[test]
    fn test_random_key_counts_chars_not_bytes() {
        // 24 символа, но больше 25 байт
        assert_eq!(classify(&"ç".repeat(24)), PixKeyType::Unknown);
        assert_eq!(classify(&"ç".repeat(25)), PixKeyType::Random);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(""), PixKeyType::Unknown);
        assert_eq!(classify("abc"), PixKeyType::Unknown);
        assert_eq!(classify("123456789"), PixKeyType::Unknown);
        assert_eq!(classify(&"1".repeat(15)), PixKeyType::Unknown);
    }

    #[test]
    fn test_codes_and_parsing() {
        for t in PixKeyType::all_selectable() {
            assert_eq!(PixKeyType::from_code(t.code()), Some(t));
        }
        assert_eq!(PixKeyType::from_code(" telefone "), Some(PixKeyType::Phone));
        assert_eq!(PixKeyType::from_code("AUTO"), None);
        assert_eq!(PixKeyType::from_code(""), None);
        assert_eq!(PixKeyType::Random.to_string(), "ALEATORIA");
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&PixKeyType::Phone).unwrap();
        assert_eq!(json, "\"TELEFONE\"");
        let parsed: PixKeyType = serde_json::from_str("\"ALEATORIA\"").unwrap();
        assert_eq!(parsed, PixKeyType::Random);
        let unknown: PixKeyType = serde_json::from_str("\"\"").unwrap();
        assert_eq!(unknown, PixKeyType::Unknown);
    }
}
