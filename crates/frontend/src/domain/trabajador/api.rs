use contracts::domain::trabajador::{TrabajadorDto, TrabajadorResponse};
use contracts::shared::{EstadoFilter, PageResponse};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn listar(
    api: &ApiClient,
    estado: EstadoFilter,
    texto: &str,
    page: i64,
    size: i64,
) -> Result<PageResponse<TrabajadorResponse>, ApiError> {
    let params = [
        ("estado", estado.as_param().to_string()),
        ("texto", texto.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(API.trabajador.listar, &params).await
}

pub async fn obtener_por_id(api: &ApiClient, id: i64) -> Result<TrabajadorDto, ApiError> {
    api.get(&format!("{}/{}", API.trabajador.obtener_by_id, id), &[])
        .await
}

pub async fn crear(api: &ApiClient, trabajador: &TrabajadorDto) -> Result<TrabajadorDto, ApiError> {
    api.post(API.trabajador.insertar, trabajador).await
}

pub async fn actualizar(
    api: &ApiClient,
    id: i64,
    trabajador: &TrabajadorDto,
) -> Result<TrabajadorDto, ApiError> {
    api.put(&format!("{}/{}", API.trabajador.actualizar, id), trabajador)
        .await
}

pub async fn cambiar_estado(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.patch(&format!("{}/{}", API.trabajador.cambiar_estado, id))
        .await
}

pub async fn eliminar(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let endpoint = API.trabajador.eliminar.expect("trabajador expone eliminar");
    api.delete_empty(&format!("{}/{}", endpoint, id)).await
}
