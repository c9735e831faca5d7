use leptos::prelude::*;

/// Contenedor de estado global de la aplicación. Se crea una sola vez en
/// `App` y se inyecta por contexto; su ciclo de vida es el del montaje.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Cantidad de requests HTTP en vuelo; el overlay de carga se muestra
    /// mientras sea mayor a cero.
    pub in_flight: RwSignal<i32>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            in_flight: RwSignal::new(0),
        }
    }

    pub fn begin_request(&self) {
        self.in_flight.update(|n| *n += 1);
    }

    pub fn end_request(&self) {
        self.in_flight.update(|n| *n = (*n - 1).max(0));
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext no provisto en el árbol de componentes")
}

/// Overlay de carga global; bloquea la pantalla mientras haya requests
/// pendientes.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let app = use_app_context();

    view! {
        <Show when=move || app.is_loading()>
            <div class="loading-overlay">
                <div class="loading-overlay__spinner"></div>
            </div>
        </Show>
    }
}
