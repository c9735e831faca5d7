//! Tabla de endpoints del API y constantes de la aplicación.

use once_cell::sync::Lazy;

pub struct AuthEndpoints {
    pub login: &'static str,
    pub register: &'static str,
    pub roles: &'static str,
}

pub struct CatalogoEndpoints {
    pub listar: &'static str,
    pub obtener_by_id: &'static str,
    pub insertar: &'static str,
    pub actualizar: &'static str,
    pub cambiar_estado: &'static str,
    /// Sólo algunos recursos exponen borrado físico.
    pub eliminar: Option<&'static str>,
}

pub struct AsistenciaEndpoints {
    pub listar: &'static str,
    pub buscar: &'static str,
    pub descargar_excel: &'static str,
    pub cargar_excel: &'static str,
    pub guardar: &'static str,
}

pub struct PlanillaEndpoints {
    pub listar: &'static str,
    pub buscar_boleta: &'static str,
    pub calcular: &'static str,
    pub guardar: &'static str,
}

pub struct ChatEndpoints {
    pub message: &'static str,
    pub session: &'static str,
}

pub struct ApiConfig {
    pub auth: AuthEndpoints,
    pub cargo: CatalogoEndpoints,
    pub genero: CatalogoEndpoints,
    pub estado_civil: CatalogoEndpoints,
    pub sistema_pension: CatalogoEndpoints,
    pub tipo_documento: CatalogoEndpoints,
    pub situacion_trabajador: CatalogoEndpoints,
    pub trabajador: CatalogoEndpoints,
    pub asistencia: AsistenciaEndpoints,
    pub planilla_mensual: PlanillaEndpoints,
    pub chat: ChatEndpoints,
}

pub static API: Lazy<ApiConfig> = Lazy::new(|| ApiConfig {
    auth: AuthEndpoints {
        login: "/auth/login",
        register: "/auth/register",
        roles: "/auth/roles",
    },
    cargo: CatalogoEndpoints {
        listar: "/cargos/listar",
        obtener_by_id: "/cargos/obtenerById",
        insertar: "/cargos/insertar",
        actualizar: "/cargos/actualizar",
        cambiar_estado: "/cargos/cambiarEstado",
        eliminar: Some("/cargos/eliminar"),
    },
    genero: CatalogoEndpoints {
        listar: "/generos/listar",
        obtener_by_id: "/generos/obtenerById",
        insertar: "/generos/insertar",
        actualizar: "/generos/actualizar",
        cambiar_estado: "/generos/cambiarEstado",
        eliminar: Some("/generos/eliminar"),
    },
    estado_civil: CatalogoEndpoints {
        listar: "/estados-civiles/listar",
        obtener_by_id: "/estados-civiles/obtenerById",
        insertar: "/estados-civiles/insertar",
        actualizar: "/estados-civiles/actualizar",
        cambiar_estado: "/estados-civiles/cambiarEstado",
        eliminar: None,
    },
    sistema_pension: CatalogoEndpoints {
        listar: "/sistemas-pension/listar",
        obtener_by_id: "/sistemas-pension/obtenerById",
        insertar: "/sistemas-pension/insertar",
        actualizar: "/sistemas-pension/actualizar",
        cambiar_estado: "/sistemas-pension/cambiarEstado",
        eliminar: None,
    },
    tipo_documento: CatalogoEndpoints {
        listar: "/tipos-documento/listar",
        obtener_by_id: "/tipos-documento/obtenerById",
        insertar: "/tipos-documento/insertar",
        actualizar: "/tipos-documento/actualizar",
        cambiar_estado: "/tipos-documento/cambiarEstado",
        eliminar: None,
    },
    situacion_trabajador: CatalogoEndpoints {
        listar: "/situaciones-trabajador/listar",
        obtener_by_id: "/situaciones-trabajador/obtenerById",
        insertar: "/situaciones-trabajador/insertar",
        actualizar: "/situaciones-trabajador/actualizar",
        cambiar_estado: "/situaciones-trabajador/cambiarEstado",
        eliminar: None,
    },
    trabajador: CatalogoEndpoints {
        listar: "/trabajador/listar",
        obtener_by_id: "/trabajador/obtenerById",
        insertar: "/trabajador/insertar",
        actualizar: "/trabajador/actualizar",
        cambiar_estado: "/trabajador/cambiar-estado",
        eliminar: Some("/trabajador/eliminar"),
    },
    asistencia: AsistenciaEndpoints {
        listar: "/asistencias",
        buscar: "/asistencias/buscar",
        descargar_excel: "/asistencias/descargar-excel",
        cargar_excel: "/asistencias/cargar-excel",
        guardar: "/asistencias/guardar",
    },
    planilla_mensual: PlanillaEndpoints {
        listar: "/planilla-mensual/listarPlanilla",
        buscar_boleta: "/planilla-mensual/buscarBoleta",
        calcular: "/planilla-mensual/calcularPlanilla",
        guardar: "/planilla-mensual/guardarPlanilla",
    },
    chat: ChatEndpoints {
        message: "/chat/message",
        session: "/chat/session",
    },
});

/// Endpoints públicos: nunca llevan el header `Authorization`.
pub const PUBLIC_ENDPOINTS: [&str; 3] = ["/auth/login", "/auth/register", "/auth/roles"];

pub mod storage_keys {
    pub const TOKEN: &str = "auth_token";
    pub const USER: &str = "current_user";
}

pub mod pagination {
    pub const DEFAULT_SIZE: i64 = 10;
    pub const SIZE_OPTIONS: [i64; 4] = [5, 10, 25, 50];
}

pub mod messages {
    pub const LOGIN_SUCCESS: &str = "Login exitoso";
    pub const LOGOUT_SUCCESS: &str = "Sesión cerrada";
    pub const UNAUTHORIZED: &str = "No autorizado. Por favor, inicie sesión nuevamente.";
    pub const FORBIDDEN: &str = "No tiene permisos para realizar esta acción.";
    pub const NOT_FOUND: &str = "Recurso no encontrado.";
    pub const SERVER_ERROR: &str = "Error interno del servidor.";
    pub const NETWORK_ERROR: &str = "Error de conexión";
}

/// Origen del backend derivado de la ubicación actual; en tests (sin
/// `window`) cae al valor de desarrollo.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "http://localhost:8080/api".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080/api", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solo_cargo_genero_y_trabajador_tienen_eliminar() {
        assert!(API.cargo.eliminar.is_some());
        assert!(API.genero.eliminar.is_some());
        assert!(API.trabajador.eliminar.is_some());
        assert!(API.estado_civil.eliminar.is_none());
        assert!(API.sistema_pension.eliminar.is_none());
        assert!(API.tipo_documento.eliminar.is_none());
        assert!(API.situacion_trabajador.eliminar.is_none());
    }

    #[test]
    fn test_endpoints_publicos() {
        assert!(PUBLIC_ENDPOINTS.contains(&API.auth.login));
        assert!(PUBLIC_ENDPOINTS.contains(&API.auth.register));
        assert!(PUBLIC_ENDPOINTS.contains(&API.auth.roles));
        assert!(!PUBLIC_ENDPOINTS.contains(&API.cargo.listar));
    }
}
