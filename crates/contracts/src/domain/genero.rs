use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneroDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_genero: Option<i64>,
    pub nombre: String,
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_creacion: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_ultima_modificacion: Option<NaiveDateTime>,
}

impl GeneroDto {
    pub fn nuevo(nombre: String, activo: bool) -> Self {
        Self {
            id_genero: None,
            nombre,
            activo,
            fec_creacion: None,
            fec_ultima_modificacion: None,
        }
    }
}
