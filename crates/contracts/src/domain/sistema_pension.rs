use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sistema de pensión (ONP / AFP). Además del nombre lleva las tasas en
/// porcentaje que el cálculo de planilla aplica sobre el ingreso afecto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SistemaPensionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_sistema_pension: Option<i64>,
    pub nombre: String,
    #[serde(default)]
    pub aporte: f64,
    #[serde(default)]
    pub comision: f64,
    #[serde(default)]
    pub prima: f64,
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_creacion: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_ultima_modificacion: Option<NaiveDateTime>,
}

impl SistemaPensionDto {
    pub fn nuevo(nombre: String, aporte: f64, comision: f64, prima: f64, activo: bool) -> Self {
        Self {
            id_sistema_pension: None,
            nombre,
            aporte,
            comision,
            prima,
            activo,
            fec_creacion: None,
            fec_ultima_modificacion: None,
        }
    }

    /// Las tres tasas dentro de [0, 100].
    pub fn tasas_validas(&self) -> bool {
        use crate::shared::validation::tasa_valida;
        tasa_valida(self.aporte) && tasa_valida(self.comision) && tasa_valida(self.prima)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasas_ausentes_quedan_en_cero() {
        let json = serde_json::json!({ "idSistemaPension": 2, "nombre": "ONP", "activo": true });
        let dto: SistemaPensionDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.aporte, 0.0);
        assert_eq!(dto.comision, 0.0);
        assert_eq!(dto.prima, 0.0);
    }

    #[test]
    fn test_tasas_validas() {
        let mut dto = SistemaPensionDto::nuevo("AFP Integra".into(), 10.0, 1.55, 1.84, true);
        assert!(dto.tasas_validas());
        dto.comision = 101.0;
        assert!(!dto.tasas_validas());
        dto.comision = -1.0;
        assert!(!dto.tasas_validas());
    }
}
