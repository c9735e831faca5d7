use serde::{Deserialize, Serialize};

use crate::domain::trabajador::TrabajadorResponse;

/// Fila de planilla calculada por el backend para un período.
/// Todos los montos tienen default 0.0: un registro disperso se sigue
/// mostrando (y la boleta imprime "S/ 0.00" en lo que falte).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanillaMensualResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_planilla: Option<i64>,
    #[serde(default)]
    pub anio: i32,
    #[serde(default)]
    pub mes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trabajador: Option<TrabajadorResponse>,
    // Ingresos
    #[serde(default)]
    pub haber_basico: f64,
    #[serde(default)]
    pub asig_familiar: f64,
    #[serde(default)]
    pub horas_extras25: f64,
    #[serde(default)]
    pub horas_extras35: f64,
    #[serde(default)]
    pub feriado_trab: f64,
    #[serde(default)]
    pub vales_empleado: f64,
    #[serde(default)]
    pub bonificacion_cargo: f64,
    #[serde(default)]
    pub total_ingreso: f64,
    // Descuentos de ley (sistema de pensión)
    #[serde(default)]
    pub aporte: f64,
    #[serde(default)]
    pub comision: f64,
    #[serde(default)]
    pub prima: f64,
    #[serde(default)]
    pub total_descuento: f64,
    // Aportes del empleador
    #[serde(default)]
    pub es_salud: f64,
    #[serde(default)]
    pub seguro_vida_ley: f64,
    // Neto
    #[serde(default)]
    pub total_neto_boleta: f64,
}

impl PlanillaMensualResponse {
    pub fn total_aporte_empleador(&self) -> f64 {
        self.es_salud + self.seguro_vida_ley
    }
}

/// Fila de planilla ya persistida, tal como la devuelve `listarPlanilla`
/// (trabajador aplanado a documento + nombre).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanillaMensualDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_planilla: Option<i64>,
    #[serde(default)]
    pub anio: i32,
    #[serde(default)]
    pub mes: u32,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub nombre_completo: String,
    #[serde(default)]
    pub haber_basico: f64,
    #[serde(default)]
    pub asig_familiar: f64,
    #[serde(default)]
    pub horas_extras25: f64,
    #[serde(default)]
    pub horas_extras35: f64,
    #[serde(default)]
    pub feriado_trab: f64,
    #[serde(default)]
    pub vales_empleado: f64,
    #[serde(default)]
    pub bonificacion_cargo: f64,
    #[serde(default)]
    pub total_ingreso: f64,
    #[serde(default)]
    pub aporte: f64,
    #[serde(default)]
    pub comision: f64,
    #[serde(default)]
    pub prima: f64,
    #[serde(default)]
    pub total_descuento: f64,
    #[serde(default)]
    pub es_salud: f64,
    #[serde(default)]
    pub seguro_vida_ley: f64,
    #[serde(default)]
    pub total_neto_boleta: f64,
}

/// Resultado de `buscarBoleta`: la fila calculada más los desgloses
/// valorizados que sólo usa la boleta impresa.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanillaPorDocumentoDto {
    #[serde(flatten)]
    pub planilla: PlanillaMensualResponse,
    #[serde(default)]
    pub vhoras_extra1: f64,
    #[serde(default)]
    pub vhoras_extra2: f64,
    #[serde(default)]
    pub vasig_familiar: f64,
    #[serde(default)]
    pub vferiado_trab: f64,
    /// Neto en letras, renderizado por el backend ("SON: ...").
    #[serde(default)]
    pub total_neto_boleta_cad: String,
    #[serde(default)]
    pub ndias_trab: i32,
    #[serde(default)]
    pub nhoras_normal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_montos_ausentes_quedan_en_cero() {
        // El backend puede devolver un registro disperso; nada debe fallar.
        let json = serde_json::json!({ "anio": 2024, "mes": 6 });
        let dto: PlanillaPorDocumentoDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.planilla.haber_basico, 0.0);
        assert_eq!(dto.planilla.total_neto_boleta, 0.0);
        assert_eq!(dto.vhoras_extra1, 0.0);
        assert_eq!(dto.total_neto_boleta_cad, "");
        assert_eq!(dto.ndias_trab, 0);
    }

    #[test]
    fn test_boleta_aplana_los_campos_de_planilla() {
        let json = serde_json::json!({
            "anio": 2024,
            "mes": 3,
            "haberBasico": 1800.0,
            "totalIngreso": 2050.5,
            "vasigFamiliar": 102.5,
            "totalNetoBoletaCad": "SON: UN MIL OCHOCIENTOS Y 00/100 SOLES",
            "ndiasTrab": 22,
            "nhorasNormal": 176.0
        });
        let dto: PlanillaPorDocumentoDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.planilla.haber_basico, 1800.0);
        assert_eq!(dto.planilla.total_ingreso, 2050.5);
        assert_eq!(dto.vasig_familiar, 102.5);
        assert_eq!(dto.nhoras_normal, 176.0);
    }

    #[test]
    fn test_total_aporte_empleador() {
        let p = PlanillaMensualResponse {
            es_salud: 162.0,
            seguro_vida_ley: 9.5,
            ..Default::default()
        };
        assert!((p.total_aporte_empleador() - 171.5).abs() < f64::EPSILON);
    }
}
