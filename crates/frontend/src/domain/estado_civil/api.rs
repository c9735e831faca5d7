use contracts::domain::estado_civil::EstadoCivilDto;
use contracts::shared::{EstadoFilter, PageResponse};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn listar(
    api: &ApiClient,
    estado: EstadoFilter,
    texto: &str,
    page: i64,
    size: i64,
) -> Result<PageResponse<EstadoCivilDto>, ApiError> {
    let params = [
        ("estado", estado.as_param().to_string()),
        ("texto", texto.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(API.estado_civil.listar, &params).await
}

pub async fn obtener_por_id(api: &ApiClient, id: i64) -> Result<EstadoCivilDto, ApiError> {
    api.get(&format!("{}/{}", API.estado_civil.obtener_by_id, id), &[])
        .await
}

pub async fn crear(api: &ApiClient, estado_civil: &EstadoCivilDto) -> Result<EstadoCivilDto, ApiError> {
    api.post(API.estado_civil.insertar, estado_civil).await
}

pub async fn actualizar(
    api: &ApiClient,
    id: i64,
    estado_civil: &EstadoCivilDto,
) -> Result<EstadoCivilDto, ApiError> {
    api.put(&format!("{}/{}", API.estado_civil.actualizar, id), estado_civil)
        .await
}

pub async fn cambiar_estado(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.patch(&format!("{}/{}", API.estado_civil.cambiar_estado, id))
        .await
}
