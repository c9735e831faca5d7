use contracts::domain::genero::GeneroDto;
use contracts::shared::{EstadoFilter, PageResponse};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn listar(
    api: &ApiClient,
    estado: EstadoFilter,
    texto: &str,
    page: i64,
    size: i64,
) -> Result<PageResponse<GeneroDto>, ApiError> {
    let params = [
        ("estado", estado.as_param().to_string()),
        ("texto", texto.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(API.genero.listar, &params).await
}

pub async fn obtener_por_id(api: &ApiClient, id: i64) -> Result<GeneroDto, ApiError> {
    api.get(&format!("{}/{}", API.genero.obtener_by_id, id), &[])
        .await
}

pub async fn crear(api: &ApiClient, genero: &GeneroDto) -> Result<GeneroDto, ApiError> {
    api.post(API.genero.insertar, genero).await
}

pub async fn actualizar(
    api: &ApiClient,
    id: i64,
    genero: &GeneroDto,
) -> Result<GeneroDto, ApiError> {
    api.put(&format!("{}/{}", API.genero.actualizar, id), genero)
        .await
}

pub async fn cambiar_estado(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.patch(&format!("{}/{}", API.genero.cambiar_estado, id))
        .await
}

pub async fn eliminar(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let endpoint = API.genero.eliminar.expect("genero expone eliminar");
    api.delete_empty(&format!("{}/{}", endpoint, id)).await
}
