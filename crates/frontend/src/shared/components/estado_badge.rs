use leptos::prelude::*;

/// Pastilla Activo/Inactivo usada en todas las tablas de catálogos.
#[component]
pub fn EstadoBadge(activo: bool) -> impl IntoView {
    let (clase, texto) = if activo {
        ("badge badge--success", "Activo")
    } else {
        ("badge badge--warning", "Inactivo")
    };

    view! { <span class=clase>{texto}</span> }
}
