use contracts::domain::planilla::{
    PlanillaMensualDto, PlanillaMensualResponse, PlanillaPorDocumentoDto,
};

use crate::shared::config::API;
use crate::shared::http::{ApiClient, ApiError};

/// Filas ya persistidas del período. Este endpoint recibe `anio` sin eñe;
/// los otros dos usan `año`. Contrato heredado, se respeta tal cual.
pub async fn listar(
    api: &ApiClient,
    anio: i32,
    mes: u32,
) -> Result<Vec<PlanillaMensualDto>, ApiError> {
    let params = [("anio", anio.to_string()), ("mes", mes.to_string())];
    api.get(API.planilla_mensual.listar, &params).await
}

/// Cálculo de planilla del período. Es una lectura pura: nada queda
/// persistido hasta invocar `guardar`.
pub async fn calcular(
    api: &ApiClient,
    anio: i32,
    mes: u32,
) -> Result<Vec<PlanillaMensualResponse>, ApiError> {
    let params = [("año", anio.to_string()), ("mes", mes.to_string())];
    api.get(API.planilla_mensual.calcular, &params).await
}

/// Persiste el último cálculo completo.
pub async fn guardar(
    api: &ApiClient,
    planillas: &[PlanillaMensualResponse],
) -> Result<String, ApiError> {
    api.post_text(API.planilla_mensual.guardar, &planillas).await
}

/// Boleta de un trabajador para el período, buscada por documento.
pub async fn buscar_boleta(
    api: &ApiClient,
    anio: i32,
    mes: u32,
    documento: &str,
) -> Result<PlanillaPorDocumentoDto, ApiError> {
    let params = [
        ("año", anio.to_string()),
        ("mes", mes.to_string()),
        ("documento", documento.to_string()),
    ];
    api.get(API.planilla_mensual.buscar_boleta, &params).await
}
