use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Situación laboral del trabajador (activo, cesado, vacaciones, etc.).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SituacionTrabajadorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_situacion: Option<i64>,
    pub nombre: String,
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_creacion: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_ultima_modificacion: Option<NaiveDateTime>,
}

impl SituacionTrabajadorDto {
    pub fn nuevo(nombre: String, activo: bool) -> Self {
        Self {
            id_situacion: None,
            nombre,
            activo,
            fec_creacion: None,
            fec_ultima_modificacion: None,
        }
    }
}
