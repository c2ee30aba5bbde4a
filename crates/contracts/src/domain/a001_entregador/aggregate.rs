use serde::{Deserialize, Serialize};

use crate::shared::pix_key::{classify, PixKeyType};
use crate::shared::pracas::directory;
use crate::shared::text::{digits_only, format_person_name};

/// Emissor всегда "Proprio" для правок из админки
pub const DEFAULT_EMISSOR: &str = "Proprio";

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EntregadorStatus {
    #[default]
    Ativo,
    Inativo,
}

impl EntregadorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntregadorStatus::Ativo => "Ativo",
            EntregadorStatus::Inativo => "Inativo",
        }
    }

    pub fn all() -> Vec<EntregadorStatus> {
        vec![EntregadorStatus::Ativo, EntregadorStatus::Inativo]
    }

    /// Парсинг без учёта регистра; неизвестное значение -> None
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ativo" => Some(EntregadorStatus::Ativo),
            "inativo" => Some(EntregadorStatus::Inativo),
            _ => None,
        }
    }
}

// ============================================================================
// Entregador
// ============================================================================

/// Entregador в том виде, в каком его отдаёт `/entregador/{id}/detalhes-json`.
///
/// Backend может вернуть `null` почти в любом поле, поэтому всё кроме id опционально.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Entregador {
    pub id_da_pessoa_entregadora: String,
    #[serde(default)]
    pub recebedor: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub praca: Option<String>,
    #[serde(default)]
    pub subpraca: Option<String>,
    #[serde(default)]
    pub emissor: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub chave_pix: Option<String>,
    #[serde(default)]
    pub tipo_de_chave_pix: Option<String>,
}

impl Entregador {
    /// Имя для отображения ("JOAO SILVA" -> "Joao Silva")
    pub fn display_name(&self) -> String {
        format_person_name(self.recebedor.as_deref().unwrap_or_default())
    }

    pub fn status(&self) -> EntregadorStatus {
        self.status
            .as_deref()
            .and_then(EntregadorStatus::parse)
            .unwrap_or_default()
    }

    /// Тип ключа Pix: сохранённый, а если его нет, определённый по самому ключу
    pub fn pix_key_type(&self) -> PixKeyType {
        self.tipo_de_chave_pix
            .as_deref()
            .and_then(PixKeyType::from_code)
            .unwrap_or_else(|| classify(self.chave_pix.as_deref().unwrap_or_default().trim()))
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса `POST /entregador/{id}/editar`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EntregadorDto {
    /// Идёт в URL, а не в тело запроса
    #[serde(skip)]
    pub id: String,
    pub recebedor: String,
    pub email: String,
    pub cpf: String,
    pub cnpj: String,
    pub praca: String,
    pub subpraca: String,
    pub status: EntregadorStatus,
    pub tipo_de_chave_pix: String,
    pub chave_pix: String,
    pub emissor: String,
}

impl EntregadorDto {
    /// Заполнить форму редактирования из карточки.
    ///
    /// Praça приводится к каноническому названию; если она не из справочника,
    /// поле остаётся пустым. Subpraça сохраняется, только если принадлежит praça.
    pub fn from_entregador(e: &Entregador) -> Self {
        let dir = directory();
        let praca = dir.normalize_zone(e.praca.as_deref().unwrap_or_default());
        let praca = if dir.is_zone(&praca) { praca } else { String::new() };
        let subpraca = e.subpraca.clone().unwrap_or_default();
        let subpraca = if dir.contains_sub_zone(&praca, &subpraca) {
            subpraca
        } else {
            String::new()
        };

        Self {
            id: e.id_da_pessoa_entregadora.clone(),
            recebedor: e.recebedor.clone().unwrap_or_default(),
            email: e.email.clone().unwrap_or_default(),
            cpf: e.cpf.clone().unwrap_or_default(),
            cnpj: e.cnpj.clone().unwrap_or_default(),
            praca,
            subpraca,
            status: e.status(),
            tipo_de_chave_pix: e.tipo_de_chave_pix.clone().unwrap_or_default(),
            chave_pix: e.chave_pix.clone().unwrap_or_default(),
            emissor: DEFAULT_EMISSOR.to_string(),
        }
    }

    /// Сменить praça. Subpraça сбрасывается, если к новой praça не относится
    pub fn set_praca(&mut self, praca: String) {
        if !directory().contains_sub_zone(&praca, &self.subpraca) {
            self.subpraca.clear();
        }
        self.praca = praca;
    }

    pub fn detected_key_type(&self) -> PixKeyType {
        classify(self.chave_pix.trim())
    }

    /// Тип ключа для отправки: выбранный вручную или определённый автоматически
    pub fn effective_key_type(&self) -> String {
        match PixKeyType::from_code(&self.tipo_de_chave_pix) {
            Some(t) => t.code().to_string(),
            None => self.detected_key_type().code().to_string(),
        }
    }

    /// DTO, готовый к отправке
    pub fn prepared(&self) -> Self {
        let mut dto = self.clone();
        dto.recebedor = dto.recebedor.trim().to_string();
        dto.chave_pix = dto.chave_pix.trim().to_string();
        dto.tipo_de_chave_pix = self.effective_key_type();
        dto.emissor = DEFAULT_EMISSOR.to_string();
        dto
    }

    /// Валидация данных.
    ///
    /// Документы проверяются только если оператор их изменил: записи, импортированные
    /// с неполным CPF/CNPJ, можно сохранять без правки этих полей.
    pub fn validate(&self, loaded: &EntregadorDto) -> Result<(), String> {
        if self.recebedor.trim().is_empty() || self.chave_pix.trim().is_empty() {
            return Err("Preencha os campos obrigatórios (Nome e Chave Pix)!".into());
        }

        let cpf_changed = digits_only(&self.cpf) != digits_only(&loaded.cpf);
        if cpf_changed && !self.cpf.trim().is_empty() && digits_only(&self.cpf).len() != 11 {
            return Err("CPF deve conter 11 dígitos".into());
        }
        let cnpj_changed = digits_only(&self.cnpj) != digits_only(&loaded.cnpj);
        if cnpj_changed && !self.cnpj.trim().is_empty() && digits_only(&self.cnpj).len() != 14 {
            return Err("CNPJ deve conter 14 dígitos".into());
        }

        let dir = directory();
        if !self.praca.is_empty() && !dir.is_zone(&self.praca) {
            return Err(format!("Praça desconhecida: {}", self.praca));
        }
        if !self.subpraca.is_empty() && !dir.contains_sub_zone(&self.praca, &self.subpraca) {
            return Err(format!(
                "Sub-praça {} não pertence à praça {}",
                self.subpraca, self.praca
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entregador {
        serde_json::from_str(
            r#"{
                "id_da_pessoa_entregadora": "abc-123",
                "recebedor": "MARIA  DE SOUZA",
                "email": null,
                "cpf": "123.456.789-09",
                "cnpj": null,
                "praca": "barra",
                "subpraca": "Recreio",
                "emissor": "Proprio",
                "status": "Ativo",
                "chave_pix": "maria@example.com",
                "tipo_de_chave_pix": null
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let e: Entregador =
            serde_json::from_str(r#"{"id_da_pessoa_entregadora": "x"}"#).unwrap();
        assert_eq!(e.recebedor, None);
        assert_eq!(e.status(), EntregadorStatus::Ativo);
        assert_eq!(e.pix_key_type(), PixKeyType::Unknown);
    }

    #[test]
    fn test_display_and_key_type() {
        let e = sample();
        assert_eq!(e.display_name(), "Maria De Souza");
        assert_eq!(e.pix_key_type(), PixKeyType::Email);
    }

    #[test]
    fn test_dto_normalizes_praca_and_keeps_matching_subpraca() {
        let dto = EntregadorDto::from_entregador(&sample());
        assert_eq!(dto.id, "abc-123");
        assert_eq!(dto.praca, "Rio Barra");
        assert_eq!(dto.subpraca, "Recreio");
        assert_eq!(dto.emissor, DEFAULT_EMISSOR);
        assert!(dto.validate(&dto).is_ok());
    }

    #[test]
    fn test_dto_drops_unknown_praca_and_foreign_subpraca() {
        let mut e = sample();
        e.praca = Some("Niterói".into());
        let dto = EntregadorDto::from_entregador(&e);
        assert_eq!(dto.praca, "");
        assert_eq!(dto.subpraca, "");

        let mut e = sample();
        e.subpraca = Some("Ipanema".into());
        let dto = EntregadorDto::from_entregador(&e);
        assert_eq!(dto.praca, "Rio Barra");
        assert_eq!(dto.subpraca, "");
    }

    #[test]
    fn test_set_praca_resets_subpraca() {
        let mut dto = EntregadorDto::from_entregador(&sample());
        dto.set_praca("Rio Barra".into());
        assert_eq!(dto.subpraca, "Recreio");
        dto.set_praca("Rio Zona Sul".into());
        assert_eq!(dto.subpraca, "");
    }

    #[test]
    fn test_effective_key_type() {
        let mut dto = EntregadorDto::from_entregador(&sample());
        assert_eq!(dto.effective_key_type(), "EMAIL");
        dto.tipo_de_chave_pix = "AUTO".into();
        assert_eq!(dto.effective_key_type(), "EMAIL");
        dto.tipo_de_chave_pix = "telefone".into();
        assert_eq!(dto.effective_key_type(), "TELEFONE");
        dto.tipo_de_chave_pix = String::new();
        dto.chave_pix = "xyz".into();
        assert_eq!(dto.effective_key_type(), "");
    }

    #[test]
    fn test_validate_required_fields() {
        let loaded = EntregadorDto::from_entregador(&sample());
        let mut dto = loaded.clone();
        dto.chave_pix = "   ".into();
        assert!(dto.validate(&loaded).unwrap_err().contains("Chave Pix"));

        let mut dto = loaded.clone();
        dto.recebedor.clear();
        assert!(dto.validate(&loaded).is_err());
    }

    #[test]
    fn test_validate_documents_and_zones() {
        let loaded = EntregadorDto::from_entregador(&sample());
        let mut dto = loaded.clone();
        dto.cpf = "123".into();
        assert!(dto.validate(&loaded).unwrap_err().contains("CPF"));

        let mut dto = loaded.clone();
        dto.cnpj = "12.345.678/0001-90".into();
        assert!(dto.validate(&loaded).is_ok());

        let mut dto = loaded.clone();
        dto.cnpj = "12.345".into();
        assert!(dto.validate(&loaded).unwrap_err().contains("CNPJ"));

        let mut dto = loaded.clone();
        dto.subpraca = "Ipanema".into();
        assert!(dto.validate(&loaded).unwrap_err().contains("não pertence"));
    }

    #[test]
    fn test_status_only_edit_of_record_with_short_cpf() {
        let mut e = sample();
        e.cpf = Some("1234567890".into());
        e.cnpj = Some("123".into());
        let loaded = EntregadorDto::from_entregador(&e);

        let mut dto = loaded.clone();
        dto.status = EntregadorStatus::Inativo;
        assert_eq!(dto.validate(&loaded), Ok(()));

        // Reformatting the same digits is not a change
        dto.cpf = "123.456.789-0".into();
        assert_eq!(dto.validate(&loaded), Ok(()));

        dto.cpf = "12345".into();
        assert!(dto.validate(&loaded).unwrap_err().contains("CPF"));
    }

    #[test]
    fn test_prepared_payload() {
        let mut dto = EntregadorDto::from_entregador(&sample());
        dto.chave_pix = "  (21) 3333-4444 ".into();
        dto.emissor = "Outro".into();
        let p = dto.prepared();
        assert_eq!(p.chave_pix, "(21) 3333-4444");
        assert_eq!(p.tipo_de_chave_pix, "TELEFONE");
        assert_eq!(p.emissor, "Proprio");

        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["status"], "Ativo");
    }
}
