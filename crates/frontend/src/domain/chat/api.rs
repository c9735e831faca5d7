use contracts::domain::chat::{ChatMessageRequest, ChatMessageResponse, ChatSessionResponse};
use gloo_net::http::Request;

use crate::shared::config::{api_base, API};
use crate::shared::http::{ApiClient, ApiError};
use crate::system::auth::storage;

pub async fn create_session(api: &ApiClient) -> Result<ChatSessionResponse, ApiError> {
    api.post(API.chat.session, &serde_json::json!({})).await
}

pub async fn send_message(
    api: &ApiClient,
    message: &str,
    session_id: &str,
) -> Result<ChatMessageResponse, ApiError> {
    let request = ChatMessageRequest {
        message: message.to_string(),
        session_id: Some(session_id.to_string()),
    };
    api.post(API.chat.message, &request).await
}

/// Borrado de sesión al desmontar el widget. Es best-effort y silencioso:
/// no pasa por el cliente compartido para no disparar notificaciones ni el
/// overlay de carga durante el teardown.
pub async fn delete_session(session_id: &str) -> Result<(), String> {
    let url = format!("{}{}/{}", api_base(), API.chat.session, session_id);
    let mut builder = Request::delete(&url);
    if let Some(token) = storage::get_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let response = builder
        .send()
        .await
        .map_err(|e| format!("fallo de red: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
