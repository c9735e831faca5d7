use leptos::prelude::*;

/// Envoltorio estándar de toda pantalla. Fija `id` y la categoría de página
/// como atributos del nodo raíz para inspección del DOM.
#[component]
pub fn PageFrame(
    /// Identificador `{entidad}--{categoria}`, p. ej. `"cargo--list"`.
    page_id: &'static str,
    /// `"list"` | `"form"` | `"page"`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        "form" => "page page--form",
        _ => "page",
    };

    view! {
        <div id=page_id class=base_class data-page-category=category>
            {children()}
        </div>
    }
}
