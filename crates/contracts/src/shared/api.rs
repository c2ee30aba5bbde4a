use serde::{Deserialize, Serialize};

/// Стандартный JSON-ответ backend: `{ success, message, data? }`.
///
/// Часть эндпоинтов вместо `message` отдаёт `error`, поэтому принимаются оба поля.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiResponse<T = serde_json::Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Текст ошибки для пользователя
    pub fn failure_message(&self) -> String {
        if !self.message.trim().is_empty() {
            return self.message.clone();
        }
        match self.error.as_deref() {
            Some(e) if !e.trim().is_empty() => e.to_string(),
            _ => "Erro desconhecido".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let r: ApiResponse =
            serde_json::from_str(r#"{"success": true, "message": "Entregador atualizado com sucesso!"}"#)
                .unwrap();
        assert!(r.success);
        assert!(r.data.is_none());
    }

    #[test]
    fn test_failure_message_fallbacks() {
        let r: ApiResponse = serde_json::from_str(r#"{"success": false, "message": "CPF já cadastrado"}"#).unwrap();
        assert_eq!(r.failure_message(), "CPF já cadastrado");

        let r: ApiResponse = serde_json::from_str(r#"{"error": "Entregador não encontrado"}"#).unwrap();
        assert!(!r.success);
        assert_eq!(r.failure_message(), "Entregador não encontrado");

        let r: ApiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(r.failure_message(), "Erro desconhecido");
    }
}
