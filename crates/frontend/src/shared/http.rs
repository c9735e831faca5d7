//! Cliente HTTP de la aplicación.
//!
//! Toda llamada al backend pasa por aquí: arma la URL completa, adjunta el
//! bearer token salvo en los endpoints públicos, mantiene el contador global
//! de requests en vuelo y traduce los fallos a mensajes para el usuario.
//! Un intento por llamada; sin reintentos ni caché.

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::shared::app_context::{use_app_context, AppContext};
use crate::shared::config::{api_base, messages, PUBLIC_ENDPOINTS};
use crate::shared::notifications::{use_notifier, NotificationService};
use crate::system::auth::context::{use_auth, AuthContext};

/// Fallo de una llamada al API. `status` 0 significa fallo de transporte
/// (o de parseo de la respuesta).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.message)
        }
    }
}

/// ¿El endpoint es público (no lleva `Authorization`)?
pub fn is_public(endpoint: &str) -> bool {
    PUBLIC_ENDPOINTS.iter().any(|p| endpoint.starts_with(p))
}

/// Query string con claves y valores escapados; vacía si no hay parámetros.
pub fn build_query(params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", parts.join("&"))
}

pub fn build_url(base: &str, endpoint: &str, params: &[(&str, String)]) -> String {
    format!("{}{}{}", base, endpoint, build_query(params))
}

/// Traducción de código de estado a mensaje de usuario. Para códigos sin
/// tratamiento específico se prefiere el mensaje que mande el backend.
pub fn map_status(status: u16, backend_message: Option<String>) -> String {
    match status {
        401 => messages::UNAUTHORIZED.to_string(),
        403 => messages::FORBIDDEN.to_string(),
        404 => messages::NOT_FOUND.to_string(),
        500 => messages::SERVER_ERROR.to_string(),
        _ => backend_message.unwrap_or_else(|| format!("Error {}", status)),
    }
}

#[derive(Clone, Copy)]
pub struct ApiClient {
    app: AppContext,
    auth: AuthContext,
    notifier: NotificationService,
}

/// Handle al cliente HTTP; se obtiene dentro de un componente y se puede
/// mover a tareas asíncronas (es `Copy`).
pub fn use_api() -> ApiClient {
    ApiClient {
        app: use_app_context(),
        auth: use_auth(),
        notifier: use_notifier(),
    }
}

impl ApiClient {
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = build_url(&api_base(), endpoint, params);
        let builder = self.with_auth(endpoint, Request::get(&url));
        let result = self.send(builder).await;
        self.parse_json(result).await
    }

    /// GET de un archivo binario (Excel de asistencias).
    pub async fn get_blob(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<u8>, ApiError> {
        let url = build_url(&api_base(), endpoint, params);
        let builder = self.with_auth(endpoint, Request::get(&url));
        let response = self.checked(self.send(builder).await).await?;
        match response.binary().await {
            Ok(bytes) => Ok(bytes),
            Err(e) => Err(self.report(ApiError {
                status: 0,
                message: format!("No se pudo leer el archivo: {}", e),
            })),
        }
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = build_url(&api_base(), endpoint, &[]);
        let builder = self.with_auth(endpoint, Request::post(&url));
        let request = match builder.json(body) {
            Ok(r) => r,
            Err(e) => {
                return Err(self.report(ApiError {
                    status: 0,
                    message: format!("No se pudo serializar el request: {}", e),
                }))
            }
        };
        self.app.begin_request();
        let result = request.send().await;
        self.app.end_request();
        self.parse_json(result).await
    }

    /// POST cuya respuesta es texto plano, no JSON.
    pub async fn post_text<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let url = build_url(&api_base(), endpoint, &[]);
        let builder = self.with_auth(endpoint, Request::post(&url));
        let request = match builder.json(body) {
            Ok(r) => r,
            Err(e) => {
                return Err(self.report(ApiError {
                    status: 0,
                    message: format!("No se pudo serializar el request: {}", e),
                }))
            }
        };
        self.app.begin_request();
        let result = request.send().await;
        self.app.end_request();
        let response = self.checked(result).await?;
        response.text().await.map_err(|e| {
            self.report(ApiError {
                status: 0,
                message: format!("Respuesta inválida del servidor: {}", e),
            })
        })
    }

    /// POST multipart (carga de Excel). El navegador fija el boundary.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: &FormData,
    ) -> Result<T, ApiError> {
        let url = build_url(&api_base(), endpoint, &[]);
        let builder = self.with_auth(endpoint, Request::post(&url));
        let request = match builder.body(form.clone()) {
            Ok(r) => r,
            Err(e) => {
                return Err(self.report(ApiError {
                    status: 0,
                    message: format!("No se pudo armar el formulario: {}", e),
                }))
            }
        };
        self.app.begin_request();
        let result = request.send().await;
        self.app.end_request();
        self.parse_json(result).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = build_url(&api_base(), endpoint, &[]);
        let builder = self.with_auth(endpoint, Request::put(&url));
        let request = match builder.json(body) {
            Ok(r) => r,
            Err(e) => {
                return Err(self.report(ApiError {
                    status: 0,
                    message: format!("No se pudo serializar el request: {}", e),
                }))
            }
        };
        self.app.begin_request();
        let result = request.send().await;
        self.app.end_request();
        self.parse_json(result).await
    }

    /// PATCH sin cuerpo (cambio de estado de catálogos).
    pub async fn patch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = build_url(&api_base(), endpoint, &[]);
        let builder = self.with_auth(endpoint, Request::patch(&url));
        let result = self.send(builder).await;
        self.parse_json(result).await
    }

    /// DELETE que no devuelve cuerpo.
    pub async fn delete_empty(&self, endpoint: &str) -> Result<(), ApiError> {
        let url = build_url(&api_base(), endpoint, &[]);
        let builder = self.with_auth(endpoint, Request::delete(&url));
        let result = self.send(builder).await;
        self.checked(result).await.map(|_| ())
    }

    fn with_auth(&self, endpoint: &str, builder: RequestBuilder) -> RequestBuilder {
        if is_public(endpoint) {
            return builder;
        }
        match self.auth.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, gloo_net::Error> {
        self.app.begin_request();
        let result = builder.send().await;
        self.app.end_request();
        result
    }

    /// Valida transporte y código de estado; deja la respuesta lista para
    /// leer el cuerpo.
    async fn checked(
        &self,
        result: Result<Response, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        match result {
            Ok(response) if response.ok() => Ok(response),
            Ok(response) => {
                let status = response.status();
                let backend_message = response
                    .json::<serde_json::Value>()
                    .await
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
                Err(self.report(ApiError {
                    status,
                    message: map_status(status, backend_message),
                }))
            }
            Err(e) => {
                log::warn!("Fallo de transporte: {}", e);
                Err(self.report(ApiError {
                    status: 0,
                    message: messages::NETWORK_ERROR.to_string(),
                }))
            }
        }
    }

    async fn parse_json<T: DeserializeOwned>(
        &self,
        result: Result<Response, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        let response = self.checked(result).await?;
        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.report(ApiError {
                status: 0,
                message: format!("Respuesta inválida del servidor: {}", e),
            })),
        }
    }

    /// Efectos colaterales de todo fallo: notificación al usuario y, ante
    /// un 401, cierre forzado de sesión (las rutas protegidas redirigen
    /// solas al login).
    fn report(&self, error: ApiError) -> ApiError {
        if error.status == 401 {
            self.auth.clear();
        }
        self.notifier.error(error.message.clone());
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_publicos_no_llevan_token() {
        assert!(is_public("/auth/login"));
        assert!(is_public("/auth/register"));
        assert!(is_public("/auth/roles"));
        assert!(!is_public("/cargos/listar"));
        assert!(!is_public("/planilla-mensual/listarPlanilla"));
    }

    #[test]
    fn test_query_escapa_claves_y_valores() {
        let q = build_query(&[
            ("año", "2024".to_string()),
            ("mes", "3".to_string()),
        ]);
        assert_eq!(q, "?a%C3%B1o=2024&mes=3");
    }

    #[test]
    fn test_query_conserva_valores_vacios() {
        // El backend distingue "sin texto" de "texto vacío"; se envían igual.
        let q = build_query(&[
            ("estado", "TODOS".to_string()),
            ("texto", String::new()),
            ("page", "0".to_string()),
        ]);
        assert_eq!(q, "?estado=TODOS&texto=&page=0");
    }

    #[test]
    fn test_query_vacia_sin_parametros() {
        assert_eq!(build_query(&[]), "");
        assert_eq!(build_url("http://x/api", "/cargos/listar", &[]), "http://x/api/cargos/listar");
    }

    #[test]
    fn test_map_status() {
        assert_eq!(map_status(401, None), messages::UNAUTHORIZED);
        assert_eq!(map_status(403, None), messages::FORBIDDEN);
        assert_eq!(map_status(404, None), messages::NOT_FOUND);
        assert_eq!(map_status(500, Some("otro".into())), messages::SERVER_ERROR);
        assert_eq!(map_status(422, Some("nombre duplicado".into())), "nombre duplicado");
        assert_eq!(map_status(418, None), "Error 418");
    }
}
