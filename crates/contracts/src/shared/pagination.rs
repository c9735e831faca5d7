use serde::{Deserialize, Serialize};

/// Página de resultados tal como la entrega el backend (contrato Spring).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    /// Índice de página, base cero.
    pub number: i64,
    pub first: bool,
    pub last: bool,
}

impl<T> PageResponse<T> {
    /// Página vacía con la que las listas degradan cuando la consulta falla.
    pub fn empty(page: i64, size: i64) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size,
            number: page,
            first: page == 0,
            last: false,
        }
    }
}

/// Filtro de estado que acompaña a toda consulta de listado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoFilter {
    #[serde(rename = "TODOS")]
    Todos,
    #[serde(rename = "ACTIVO")]
    Activo,
    #[serde(rename = "INACTIVO")]
    Inactivo,
}

impl EstadoFilter {
    /// Valor que espera el backend como parámetro `estado`.
    pub fn as_param(&self) -> &'static str {
        match self {
            EstadoFilter::Todos => "TODOS",
            EstadoFilter::Activo => "ACTIVO",
            EstadoFilter::Inactivo => "INACTIVO",
        }
    }

    pub fn from_param(s: &str) -> Self {
        match s {
            "ACTIVO" => EstadoFilter::Activo,
            "INACTIVO" => EstadoFilter::Inactivo,
            _ => EstadoFilter::Todos,
        }
    }
}

impl Default for EstadoFilter {
    fn default() -> Self {
        EstadoFilter::Todos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_keys_son_camel_case() {
        let json = serde_json::json!({
            "content": [{"idCargo": 1, "nombre": "Analista", "activo": true}],
            "totalElements": 1,
            "totalPages": 1,
            "size": 10,
            "number": 0,
            "first": true,
            "last": true
        });

        let page: PageResponse<serde_json::Value> = serde_json::from_value(json).unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content.len(), 1);
        assert!(page.first);
    }

    #[test]
    fn test_pagina_vacia_conserva_page_y_size() {
        let page: PageResponse<i32> = PageResponse::empty(3, 25);
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.number, 3);
        assert_eq!(page.size, 25);
        assert!(!page.first);
    }

    #[test]
    fn test_estado_filter_params() {
        assert_eq!(EstadoFilter::Todos.as_param(), "TODOS");
        assert_eq!(EstadoFilter::Activo.as_param(), "ACTIVO");
        assert_eq!(EstadoFilter::Inactivo.as_param(), "INACTIVO");
        assert_eq!(EstadoFilter::from_param("ACTIVO"), EstadoFilter::Activo);
        assert_eq!(EstadoFilter::from_param("otra cosa"), EstadoFilter::Todos);
    }
}
