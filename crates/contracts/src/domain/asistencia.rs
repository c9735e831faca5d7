use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::validation::{dias_validos, horas_validas};

/// Payload de guardado masivo de asistencias. El backend espera la clave
/// de año con eñe (`"año"`), contrato heredado que se respeta tal cual.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsistenciaTrabajadorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_asistencia: Option<i64>,
    pub id_trabajador: i64,
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: u32,
    pub dias_laborales: i32,
    pub dias_descanso: i32,
    pub dias_inasistencia: i32,
    pub dias_feriados: i32,
    pub horas_extra25: f64,
    pub horas_extra35: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_creacion: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

/// Fila de asistencia tal como llega de la búsqueda por período.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsistenciaTrabajadorResponse {
    #[serde(default)]
    pub id_asistencia: i64,
    pub id_trabajador: i64,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub dias_laborales: i32,
    #[serde(default)]
    pub dias_descanso: i32,
    #[serde(default)]
    pub dias_inasistencia: i32,
    #[serde(default)]
    pub dias_feriados: i32,
    #[serde(default)]
    pub horas_extra25: f64,
    #[serde(default)]
    pub horas_extra35: f64,
}

impl AsistenciaTrabajadorResponse {
    /// Los seis contadores editables dentro de rango (≥ 0).
    pub fn contadores_validos(&self) -> bool {
        dias_validos(self.dias_laborales)
            && dias_validos(self.dias_descanso)
            && dias_validos(self.dias_inasistencia)
            && dias_validos(self.dias_feriados)
            && horas_validas(self.horas_extra25)
            && horas_validas(self.horas_extra35)
    }

    /// Arma el payload de guardado etiquetado con el período del filtro.
    pub fn to_dto(&self, anio: i32, mes: u32) -> AsistenciaTrabajadorDto {
        AsistenciaTrabajadorDto {
            id_asistencia: Some(self.id_asistencia),
            id_trabajador: self.id_trabajador,
            anio,
            mes,
            dias_laborales: self.dias_laborales,
            dias_descanso: self.dias_descanso,
            dias_inasistencia: self.dias_inasistencia,
            dias_feriados: self.dias_feriados,
            horas_extra25: self.horas_extra25,
            horas_extra35: self.horas_extra35,
            fec_creacion: None,
            activo: None,
        }
    }
}

/// Filtro de período de la pantalla de asistencias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsistenciaFilter {
    pub anio: i32,
    pub mes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila() -> AsistenciaTrabajadorResponse {
        AsistenciaTrabajadorResponse {
            id_asistencia: 11,
            id_trabajador: 3,
            documento: "41256387".into(),
            nombre: "Rosa Mendoza".into(),
            dias_laborales: 22,
            dias_descanso: 8,
            dias_inasistencia: 0,
            dias_feriados: 1,
            horas_extra25: 4.5,
            horas_extra35: 0.0,
        }
    }

    #[test]
    fn test_payload_lleva_clave_anio_con_enie() {
        let dto = fila().to_dto(2024, 3);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["año"], 2024);
        assert_eq!(json["mes"], 3);
        assert!(json.get("anio").is_none());
        assert_eq!(json["idTrabajador"], 3);
        assert_eq!(json["horasExtra25"], 4.5);
    }

    #[test]
    fn test_payload_etiqueta_con_periodo_del_filtro() {
        // El período del payload sale del filtro activo, no de la fila.
        let dto = fila().to_dto(2023, 12);
        assert_eq!(dto.anio, 2023);
        assert_eq!(dto.mes, 12);
        assert_eq!(dto.id_asistencia, Some(11));
    }

    #[test]
    fn test_contadores_negativos_invalidan() {
        let mut f = fila();
        assert!(f.contadores_validos());
        f.dias_inasistencia = -1;
        assert!(!f.contadores_validos());
        f.dias_inasistencia = 0;
        f.horas_extra35 = -0.5;
        assert!(!f.contadores_validos());
    }
}
