use contracts::domain::asistencia::{
    AsistenciaFilter, AsistenciaTrabajadorDto, AsistenciaTrabajadorResponse,
};
use contracts::shared::ApiResponse;
use web_sys::{File, FormData};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

/// Búsqueda por período. El backend recibe el año bajo la clave `año`.
pub async fn buscar(
    api: &ApiClient,
    filtro: AsistenciaFilter,
) -> Result<Vec<AsistenciaTrabajadorResponse>, ApiError> {
    let params = periodo_params(filtro);
    api.get(API.asistencia.buscar, &params).await
}

fn periodo_params(filtro: AsistenciaFilter) -> [(&'static str, String); 2] {
    [
        ("año", filtro.anio.to_string()),
        ("mes", filtro.mes.to_string()),
    ]
}

/// Guardado masivo: todas las filas visibles en un solo POST.
pub async fn guardar(
    api: &ApiClient,
    datos: &[AsistenciaTrabajadorDto],
) -> Result<bool, ApiError> {
    api.post(API.asistencia.guardar, &datos).await
}

pub async fn descargar_excel(
    api: &ApiClient,
    filtro: AsistenciaFilter,
) -> Result<Vec<u8>, ApiError> {
    let params = periodo_params(filtro);
    api.get_blob(API.asistencia.descargar_excel, &params).await
}

/// Sube el archivo como multipart junto con el período; la respuesta trae
/// la grilla completa ya parseada por el backend.
pub async fn cargar_excel(
    api: &ApiClient,
    archivo: &File,
    anio: i32,
    mes: u32,
) -> Result<ApiResponse<Vec<AsistenciaTrabajadorResponse>>, ApiError> {
    let form = FormData::new().map_err(|e| ApiError {
        status: 0,
        message: format!("No se pudo armar el formulario: {:?}", e),
    })?;
    form.append_with_blob("archivo", archivo).map_err(|e| ApiError {
        status: 0,
        message: format!("No se pudo adjuntar el archivo: {:?}", e),
    })?;
    form.append_with_str("año", &anio.to_string())
        .map_err(|e| ApiError {
            status: 0,
            message: format!("No se pudo armar el formulario: {:?}", e),
        })?;
    form.append_with_str("mes", &mes.to_string())
        .map_err(|e| ApiError {
            status: 0,
            message: format!("No se pudo armar el formulario: {:?}", e),
        })?;

    api.post_multipart(API.asistencia.cargar_excel, &form).await
}
