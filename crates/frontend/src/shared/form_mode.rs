//! Modo de un formulario, resuelto una sola vez al entrar a la ruta y
//! pasado como prop. Evita re-interpretar la URL dentro del componente.

/// Lee `:id` de la ruta activa y resuelve el modo. Se llama una única vez
/// al construir el componente de ruta.
pub fn mode_from_params(action: &'static str) -> Option<FormMode> {
    use leptos::prelude::GetUntracked;
    let params = leptos_router::hooks::use_params_map();
    let id = params.get_untracked().get("id");
    FormMode::parse(action, id.as_deref())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
    View(i64),
}

impl FormMode {
    /// Resuelve el modo a partir del segmento de acción de la ruta
    /// (`create` | `edit` | `view`) y el parámetro `:id`.
    pub fn parse(action: &str, id: Option<&str>) -> Option<FormMode> {
        match action {
            "create" => Some(FormMode::Create),
            "edit" => id?.parse().ok().map(FormMode::Edit),
            "view" => id?.parse().ok().map(FormMode::View),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) | FormMode::View(id) => Some(*id),
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn is_view(&self) -> bool {
        matches!(self, FormMode::View(_))
    }

    /// Título estándar de la pantalla para una entidad dada.
    pub fn titulo(&self, entidad: &str) -> String {
        match self {
            FormMode::Create => format!("Nuevo {}", entidad),
            FormMode::Edit(_) => format!("Editar {}", entidad),
            FormMode::View(_) => format!("Detalle de {}", entidad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_de_segmentos() {
        assert_eq!(FormMode::parse("create", None), Some(FormMode::Create));
        assert_eq!(FormMode::parse("edit", Some("7")), Some(FormMode::Edit(7)));
        assert_eq!(FormMode::parse("view", Some("12")), Some(FormMode::View(12)));
    }

    #[test]
    fn test_parse_invalido() {
        assert_eq!(FormMode::parse("edit", None), None);
        assert_eq!(FormMode::parse("edit", Some("abc")), None);
        assert_eq!(FormMode::parse("view", Some("")), None);
        assert_eq!(FormMode::parse("otro", Some("1")), None);
    }

    #[test]
    fn test_exactamente_un_modo_activo() {
        let modos = [FormMode::Create, FormMode::Edit(1), FormMode::View(1)];
        for m in modos {
            let activos = [m.is_create(), m.is_edit(), m.is_view()]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(activos, 1);
        }
    }

    #[test]
    fn test_titulos() {
        assert_eq!(FormMode::Create.titulo("Cargo"), "Nuevo Cargo");
        assert_eq!(FormMode::Edit(1).titulo("Cargo"), "Editar Cargo");
        assert_eq!(FormMode::View(1).titulo("Cargo"), "Detalle de Cargo");
    }
}
