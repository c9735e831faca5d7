use contracts::domain::cargo::CargoDto;
use contracts::shared::{EstadoFilter, PageResponse};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

pub async fn listar(
    api: &ApiClient,
    estado: EstadoFilter,
    texto: &str,
    page: i64,
    size: i64,
) -> Result<PageResponse<CargoDto>, ApiError> {
    // El backend de cargos espera el parámetro de búsqueda como `Texto`.
    let params = [
        ("estado", estado.as_param().to_string()),
        ("Texto", texto.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(API.cargo.listar, &params).await
}

pub async fn obtener_por_id(api: &ApiClient, id: i64) -> Result<CargoDto, ApiError> {
    api.get(&format!("{}/{}", API.cargo.obtener_by_id, id), &[])
        .await
}

pub async fn crear(api: &ApiClient, cargo: &CargoDto) -> Result<CargoDto, ApiError> {
    api.post(API.cargo.insertar, cargo).await
}

pub async fn actualizar(api: &ApiClient, id: i64, cargo: &CargoDto) -> Result<CargoDto, ApiError> {
    api.put(&format!("{}/{}", API.cargo.actualizar, id), cargo)
        .await
}

pub async fn cambiar_estado(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.patch(&format!("{}/{}", API.cargo.cambiar_estado, id))
        .await
}

pub async fn eliminar(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let endpoint = API.cargo.eliminar.expect("cargo expone eliminar");
    api.delete_empty(&format!("{}/{}", endpoint, id)).await
}
