use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::page_frame::PageFrame;
use crate::shared::notifications::use_notifier;

struct MenuItem {
    icon: &'static str,
    titulo: &'static str,
    descripcion: &'static str,
    /// `None` para módulos aún no disponibles.
    ruta: Option<&'static str>,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            icon: "💼",
            titulo: "Cargos",
            descripcion: "Catálogo de puestos de trabajo",
            ruta: Some("/cargo"),
        },
        MenuItem {
            icon: "⏰",
            titulo: "Asistencias",
            descripcion: "Registro mensual de asistencia y horas extra",
            ruta: Some("/asistencia"),
        },
        MenuItem {
            icon: "👷",
            titulo: "Situación del Trabajador",
            descripcion: "Catálogo de situaciones laborales",
            ruta: Some("/situacion-trabajador"),
        },
        MenuItem {
            icon: "👥",
            titulo: "Géneros",
            descripcion: "Catálogo de géneros",
            ruta: Some("/genero"),
        },
        MenuItem {
            icon: "🏦",
            titulo: "Sistemas de Pensión",
            descripcion: "ONP y AFP con sus tasas",
            ruta: Some("/sistema-pension"),
        },
        MenuItem {
            icon: "📄",
            titulo: "Tipos de Documento",
            descripcion: "Catálogo de documentos de identidad",
            ruta: Some("/tipo-documento"),
        },
        MenuItem {
            icon: "💍",
            titulo: "Estados Civiles",
            descripcion: "Catálogo de estados civiles",
            ruta: Some("/estado-civil"),
        },
        MenuItem {
            icon: "👤",
            titulo: "Trabajadores",
            descripcion: "Registro de trabajadores",
            ruta: Some("/trabajador"),
        },
        MenuItem {
            icon: "💰",
            titulo: "Planilla Mensual",
            descripcion: "Cálculo de planilla y boletas de pago",
            ruta: Some("/planilla-mensual"),
        },
        MenuItem {
            icon: "📈",
            titulo: "Reportes",
            descripcion: "Reportes gerenciales",
            ruta: None,
        },
        MenuItem {
            icon: "⚙️",
            titulo: "Configuración",
            descripcion: "Parámetros del sistema",
            ruta: None,
        },
    ]
}

#[component]
pub fn MainMenuPage() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <PageFrame page_id="main-menu--page" category="page">
            <div class="page__header">
                <h1 class="page__title">"Menú principal"</h1>
            </div>
            <div class="menu-grid">
                {menu_items()
                    .into_iter()
                    .map(|item| match item.ruta {
                        Some(ruta) => view! {
                            <A href=ruta>
                                <div class="menu-card">
                                    <span class="menu-card__icon">{item.icon}</span>
                                    <span class="menu-card__title">{item.titulo}</span>
                                    <span class="menu-card__description">{item.descripcion}</span>
                                </div>
                            </A>
                        }
                        .into_any(),
                        None => view! {
                            <div
                                class="menu-card menu-card--disabled"
                                on:click=move |_| notifier.info("Módulo disponible próximamente")
                            >
                                <span class="menu-card__icon">{item.icon}</span>
                                <span class="menu-card__title">{item.titulo}</span>
                                <span class="menu-card__description">{item.descripcion}</span>
                            </div>
                        }
                        .into_any(),
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
