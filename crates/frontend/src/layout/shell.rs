use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_navigate;

use crate::domain::chat::ui::ChatWidget;
use crate::shared::config::messages;
use crate::shared::notifications::use_notifier;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;

/// Marco de las pantallas protegidas: cabecera, contenido ruteado y el
/// widget de chat flotante. Todo dentro del guard de autenticación.
#[component]
pub fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="shell">
                <AppHeader />
                <main class="shell__content">
                    <Outlet />
                </main>
                <ChatWidget />
            </div>
        </RequireAuth>
    }
}

#[component]
fn AppHeader() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let username = move || {
        auth.current_user()
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth.clear();
        notifier.info(messages::LOGOUT_SUCCESS);
        navigate("/auth/login", Default::default());
    };

    view! {
        <header class="shell__header">
            <A href="/main-menu">
                <span class="shell__title">"Sistema de Planillas"</span>
            </A>
            <div class="shell__header-right">
                <span class="shell__user">{username}</span>
                <button class="btn btn--secondary" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </div>
        </header>
    }
}
