use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Tipo de token ("Bearer"); el cliente no lo usa pero el backend lo envía.
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleDto {
    pub value: String,
    pub description: String,
}

/// Usuario autenticado tal como se publica en el estado de sesión y se
/// persiste en el storage del navegador.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl User {
    pub fn has_any_role(&self, required: &[String]) -> bool {
        required.iter().any(|r| self.roles.contains(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_con_campos_opcionales_ausentes() {
        let json = serde_json::json!({ "token": "abc.def.ghi" });
        let resp: LoginResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.token, "abc.def.ghi");
        assert!(resp.username.is_none());
        assert!(resp.roles.is_none());
    }

    #[test]
    fn test_token_type_viaja_como_type() {
        let json = serde_json::json!({ "token": "t", "type": "Bearer" });
        let resp: LoginResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.token_type.as_deref(), Some("Bearer"));
    }

    #[test]
    fn test_has_any_role() {
        let user = User {
            id: None,
            username: "ana".into(),
            email: "ana@empresa.com".into(),
            roles: vec!["ROLE_USER".into()],
        };
        assert!(user.has_any_role(&["ROLE_ADMIN".into(), "ROLE_USER".into()]));
        assert!(!user.has_any_role(&["ROLE_ADMIN".into()]));
        assert!(!user.has_any_role(&[]));
    }
}
