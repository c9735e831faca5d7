use contracts::system::auth::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, RoleDto,
};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn login(
    api: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api.post(API.auth.login, &request).await
}

pub async fn register(
    api: &ApiClient,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    api.post(API.auth.register, request).await
}

/// Roles disponibles para el combo del registro.
pub async fn get_roles(api: &ApiClient) -> Result<Vec<RoleDto>, ApiError> {
    api.get(API.auth.roles, &[]).await
}
