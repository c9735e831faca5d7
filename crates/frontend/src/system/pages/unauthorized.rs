use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Acceso denegado"</h1>
                <p>"No tiene permisos para ver esta sección."</p>
                <A href="/main-menu">"Volver al menú principal"</A>
            </div>
        </div>
    }
}
