use contracts::shared::validation::{password_valida, username_valido};
use contracts::system::auth::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::config::messages;
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api_client = use_api();
    let auth = use_auth();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (touched, set_touched) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let username_error = Signal::derive(move || {
        if touched.get() && !username_valido(&username.get()) {
            Some("El usuario debe tener al menos 3 caracteres")
        } else {
            None
        }
    });
    let password_error = Signal::derive(move || {
        if touched.get() && !password_valida(&password.get()) {
            Some("La contraseña debe tener al menos 4 caracteres")
        } else {
            None
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_touched.set(true);

        let username_val = username.get();
        let password_val = password.get();

        // Validación de cliente: con campos inválidos no se envía nada.
        if !username_valido(&username_val) || !password_valida(&password_val) {
            return;
        }
        if is_loading.get() {
            return;
        }

        set_is_loading.set(true);
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(&api_client, username_val.clone(), password_val).await {
                Ok(response) => {
                    let user = User {
                        id: None,
                        username: response.username.clone().unwrap_or(username_val),
                        email: String::new(),
                        roles: response.roles.clone().unwrap_or_default(),
                    };
                    auth.set_session(response.token, user);
                    notifier.success(messages::LOGIN_SUCCESS);
                    set_is_loading.set(false);
                    navigate("/main-menu", Default::default());
                }
                Err(_) => {
                    // El error ya se notificó desde el cliente HTTP; el
                    // estado de sesión queda intacto.
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Sistema de Planillas"</h1>
                <h2>"Iniciar sesión"</h2>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="username">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="usuario"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || {
                            username_error
                                .get()
                                .map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="password-toggle"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                            </button>
                        </div>
                        {move || {
                            password_error
                                .get()
                                .map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <button type="submit" class="btn btn--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>

                <div class="login-footer">
                    <span>"¿No tiene cuenta? "</span>
                    <A href="/auth/register">"Regístrese"</A>
                </div>
            </div>
        </div>
    }
}
