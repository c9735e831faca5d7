use contracts::domain::situacion_trabajador::SituacionTrabajadorDto;
use contracts::shared::{EstadoFilter, PageResponse};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn listar(
    api: &ApiClient,
    estado: EstadoFilter,
    texto: &str,
    page: i64,
    size: i64,
) -> Result<PageResponse<SituacionTrabajadorDto>, ApiError> {
    let params = [
        ("estado", estado.as_param().to_string()),
        ("texto", texto.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(API.situacion_trabajador.listar, &params).await
}

pub async fn obtener_por_id(api: &ApiClient, id: i64) -> Result<SituacionTrabajadorDto, ApiError> {
    api.get(&format!("{}/{}", API.situacion_trabajador.obtener_by_id, id), &[])
        .await
}

pub async fn crear(api: &ApiClient, situacion: &SituacionTrabajadorDto) -> Result<SituacionTrabajadorDto, ApiError> {
    api.post(API.situacion_trabajador.insertar, situacion).await
}

pub async fn actualizar(
    api: &ApiClient,
    id: i64,
    situacion: &SituacionTrabajadorDto,
) -> Result<SituacionTrabajadorDto, ApiError> {
    api.put(&format!("{}/{}", API.situacion_trabajador.actualizar, id), situacion)
        .await
}

pub async fn cambiar_estado(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.patch(&format!("{}/{}", API.situacion_trabajador.cambiar_estado, id))
        .await
}
