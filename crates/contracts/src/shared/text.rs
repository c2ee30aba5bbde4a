//! Текстовые утилиты для документов и имён

/// Оставить только ASCII-цифры
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Нормализовать CPF: убрать точки, дефисы, пробелы и прочие не-цифры
pub fn normalize_cpf(cpf: &str) -> String {
    digits_only(cpf)
}

/// Очистить CNPJ. Возвращает пустую строку, если после очистки не 14 цифр
pub fn clean_cnpj(cnpj: &str) -> String {
    let digits = digits_only(cnpj);
    if digits.len() == 14 {
        digits
    } else {
        String::new()
    }
}

/// "JOAO  da silva" -> "Joao Da Silva"
pub fn format_person_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Значение для отображения: пустое или отсутствующее поле превращается в "—"
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("123.456.789-09"), "12345678909");
        assert_eq!(digits_only("(21) 3333-4444"), "2133334444");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("٣٤"), "");
    }

    #[test]
    fn test_clean_cnpj() {
        assert_eq!(clean_cnpj("12.345.678/0001-90"), "12345678000190");
        assert_eq!(clean_cnpj("123"), "");
        assert_eq!(clean_cnpj(""), "");
    }

    #[test]
    fn test_format_person_name() {
        assert_eq!(format_person_name("JOAO  da silva"), "Joao Da Silva");
        assert_eq!(format_person_name("  ana   "), "Ana");
        assert_eq!(format_person_name("SÃO JOÃO"), "São João");
        assert_eq!(format_person_name(""), "");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "—");
        assert_eq!(or_dash(Some("  ")), "—");
        assert_eq!(or_dash(Some("Ipanema")), "Ipanema");
    }
}
