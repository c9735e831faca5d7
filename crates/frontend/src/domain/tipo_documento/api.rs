use contracts::domain::tipo_documento::TipoDocumentoDto;
use contracts::shared::{EstadoFilter, PageResponse};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn listar(
    api: &ApiClient,
    estado: EstadoFilter,
    texto: &str,
    page: i64,
    size: i64,
) -> Result<PageResponse<TipoDocumentoDto>, ApiError> {
    let params = [
        ("estado", estado.as_param().to_string()),
        ("texto", texto.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(API.tipo_documento.listar, &params).await
}

pub async fn obtener_por_id(api: &ApiClient, id: i64) -> Result<TipoDocumentoDto, ApiError> {
    api.get(&format!("{}/{}", API.tipo_documento.obtener_by_id, id), &[])
        .await
}

pub async fn crear(api: &ApiClient, tipo_documento: &TipoDocumentoDto) -> Result<TipoDocumentoDto, ApiError> {
    api.post(API.tipo_documento.insertar, tipo_documento).await
}

pub async fn actualizar(
    api: &ApiClient,
    id: i64,
    tipo_documento: &TipoDocumentoDto,
) -> Result<TipoDocumentoDto, ApiError> {
    api.put(&format!("{}/{}", API.tipo_documento.actualizar, id), tipo_documento)
        .await
}

pub async fn cambiar_estado(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.patch(&format!("{}/{}", API.tipo_documento.cambiar_estado, id))
        .await
}
