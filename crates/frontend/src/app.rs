use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::app_context::AppContext;
use crate::shared::notifications::NotificationService;
use crate::system::auth::context::AuthContext;

#[component]
pub fn App() -> impl IntoView {
    // Estado de aplicación con ciclo de vida explícito: se crea aquí y viaja
    // por contexto, nada de singletons a nivel de módulo.
    provide_context(AppContext::new());
    provide_context(NotificationService::new());
    provide_context(AuthContext::restore());

    view! {
        <AppRoutes />
    }
}
