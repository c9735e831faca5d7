use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Registro completo del trabajador tal como lo edita el formulario.
/// Las referencias a catálogos viajan como ids; `TrabajadorResponse` trae
/// los nombres ya resueltos para el listado.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrabajadorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_trabajador: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_tipo_documento: Option<i64>,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub nombres: String,
    #[serde(default)]
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_genero: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_estado_civil: Option<i64>,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub hijos: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cargo: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_nacimiento: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_ingreso: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_situacion: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_sistema_pension: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<String>,
    #[serde(default)]
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_creacion: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_ultima_modificacion: Option<NaiveDateTime>,
}

/// Fila del listado de trabajadores: referencias resueltas a texto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrabajadorResponse {
    pub id_trabajador: i64,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub nombres: String,
    #[serde(default)]
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub hijos: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_nacimiento: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_ingreso: Option<NaiveDate>,
    #[serde(default)]
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_creacion: Option<NaiveDateTime>,
    // Catálogos relacionados, ya resueltos por el backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_documento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_civil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sistema_pension: Option<String>,
}

impl TrabajadorResponse {
    pub fn nombre_completo(&self) -> String {
        let completo = format!(
            "{} {} {}",
            self.nombres, self.apellido_paterno, self.apellido_materno
        );
        completo.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fechas_iso_del_backend() {
        let json = serde_json::json!({
            "idTrabajador": 4,
            "documento": "45879632",
            "nombres": "María",
            "apellidoPaterno": "Quispe",
            "apellidoMaterno": "Rojas",
            "fecIngreso": "2022-11-15",
            "activo": true,
            "cargo": "Asistente"
        });
        let resp: TrabajadorResponse = serde_json::from_value(json).unwrap();
        assert_eq!(
            resp.fec_ingreso,
            NaiveDate::from_ymd_opt(2022, 11, 15)
        );
        assert_eq!(resp.cargo.as_deref(), Some("Asistente"));
    }

    #[test]
    fn test_nombre_completo_sin_dobles_espacios() {
        let resp = TrabajadorResponse {
            id_trabajador: 1,
            documento: "1".into(),
            nombres: "José".into(),
            apellido_paterno: "Paredes".into(),
            apellido_materno: "".into(),
            direccion: String::new(),
            email: String::new(),
            hijos: 0,
            fec_nacimiento: None,
            fec_ingreso: None,
            activo: true,
            fec_creacion: None,
            tipo_documento: None,
            genero: None,
            estado_civil: None,
            cargo: None,
            situacion: None,
            sistema_pension: None,
        };
        assert_eq!(resp.nombre_completo(), "José Paredes");
    }
}
