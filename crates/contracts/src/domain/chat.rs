use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub context: Option<serde_json::Value>,
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionResponse {
    pub success: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omite_session_id_nulo() {
        let req = ChatMessageRequest {
            message: "hola".into(),
            session_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("sessionId").is_none());

        let req = ChatMessageRequest {
            message: "hola".into(),
            session_id: Some("abc-123".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["sessionId"], "abc-123");
    }

    #[test]
    fn test_respuesta_de_error_sin_session() {
        let json = serde_json::json!({
            "success": false,
            "errorMessage": "asistente no configurado",
            "response": ""
        });
        let resp: ChatMessageResponse = serde_json::from_value(json).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error_message.as_deref(), Some("asistente no configurado"));
        assert!(resp.session_id.is_none());
    }
}
