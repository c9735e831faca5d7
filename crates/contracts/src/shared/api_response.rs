use serde::{Deserialize, Serialize};

/// Envoltorio genérico `{ success, message, data }` que usa el backend en
/// operaciones que no devuelven el recurso directamente (carga de Excel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_ausente_deserializa_como_none() {
        let json = serde_json::json!({ "success": false, "message": "archivo inválido" });
        let resp: ApiResponse<Vec<i32>> = serde_json::from_value(json).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("archivo inválido"));
    }
}
