use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Cargo (puesto de trabajo) del catálogo de referencia.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CargoDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cargo: Option<i64>,
    pub nombre: String,
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_creacion: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_ultima_modificacion: Option<NaiveDateTime>,
}

impl CargoDto {
    pub fn nuevo(nombre: String, activo: bool) -> Self {
        Self {
            id_cargo: None,
            nombre,
            activo,
            fec_creacion: None,
            fec_ultima_modificacion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claves_camel_case_del_backend() {
        let json = serde_json::json!({
            "idCargo": 7,
            "nombre": "Contador",
            "activo": true,
            "fecCreacion": "2024-03-01T08:30:00"
        });
        let dto: CargoDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.id_cargo, Some(7));
        assert_eq!(dto.nombre, "Contador");
        assert!(dto.fec_creacion.is_some());
        assert!(dto.fec_ultima_modificacion.is_none());
    }

    #[test]
    fn test_alta_no_serializa_campos_de_auditoria() {
        let dto = CargoDto::nuevo("Analista".into(), true);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("idCargo").is_none());
        assert!(json.get("fecCreacion").is_none());
        assert_eq!(json["nombre"], "Analista");
    }
}
