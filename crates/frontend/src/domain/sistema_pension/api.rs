use contracts::domain::sistema_pension::SistemaPensionDto;
use contracts::shared::{EstadoFilter, PageResponse};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn listar(
    api: &ApiClient,
    estado: EstadoFilter,
    texto: &str,
    page: i64,
    size: i64,
) -> Result<PageResponse<SistemaPensionDto>, ApiError> {
    let params = [
        ("estado", estado.as_param().to_string()),
        ("texto", texto.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(API.sistema_pension.listar, &params).await
}

pub async fn obtener_por_id(api: &ApiClient, id: i64) -> Result<SistemaPensionDto, ApiError> {
    api.get(&format!("{}/{}", API.sistema_pension.obtener_by_id, id), &[])
        .await
}

pub async fn crear(
    api: &ApiClient,
    sistema: &SistemaPensionDto,
) -> Result<SistemaPensionDto, ApiError> {
    api.post(API.sistema_pension.insertar, sistema).await
}

pub async fn actualizar(
    api: &ApiClient,
    id: i64,
    sistema: &SistemaPensionDto,
) -> Result<SistemaPensionDto, ApiError> {
    api.put(&format!("{}/{}", API.sistema_pension.actualizar, id), sistema)
        .await
}

pub async fn cambiar_estado(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.patch(&format!("{}/{}", API.sistema_pension.cambiar_estado, id))
        .await
}
