use crate::shared::api_utils::{entregador_details_url, entregador_edit_url};
use contracts::domain::a001_entregador::{Entregador, EntregadorDto};
use contracts::shared::api::ApiResponse;
use gloo_net::http::Request;

/// Загрузить entregador по ID
pub async fn fetch_by_id(base: &str, id: &str) -> Result<Entregador, String> {
    let url = entregador_details_url(base, id);
    let resp = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.status() == 404 {
        return Err("Entregador não encontrado".to_string());
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    // Backend может ответить 200 с полем error
    let value: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
    if let Some(err) = value.get("error").and_then(|v| v.as_str()) {
        return Err(err.to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Сохранить изменения.
///
/// Ответ разбирается при любом HTTP-статусе: при ошибке backend отдаёт 400
/// с `{ success: false, message }`. `Err` означает сбой соединения или формата.
pub async fn save_form(base: &str, dto: &EntregadorDto) -> Result<ApiResponse, String> {
    let url = entregador_edit_url(base, &dto.id);
    let resp = Request::post(&url)
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    resp.json::<ApiResponse>().await.map_err(|e| e.to_string())
}
