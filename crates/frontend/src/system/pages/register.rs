use contracts::shared::validation::{email_valido, password_valida, username_valido};
use contracts::system::auth::{RegisterRequest, RoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;
use crate::system::auth::api;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (roles, set_roles) = signal(Vec::<RoleDto>::new());
    let (touched, set_touched) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    // Combo de roles poblado desde el backend al montar.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_roles(&api_client).await {
                Ok(lista) => set_roles.set(lista),
                Err(e) => log::warn!("No se pudieron cargar los roles: {}", e),
            }
        });
    });

    let username_error = Signal::derive(move || {
        (touched.get() && !username_valido(&username.get()))
            .then_some("El usuario debe tener al menos 3 caracteres")
    });
    let email_error = Signal::derive(move || {
        (touched.get() && !email_valido(&email.get())).then_some("Ingrese un email válido")
    });
    let password_error = Signal::derive(move || {
        (touched.get() && !password_valida(&password.get()))
            .then_some("La contraseña debe tener al menos 4 caracteres")
    });
    let confirm_error = Signal::derive(move || {
        (touched.get() && password.get() != confirm_password.get())
            .then_some("Las contraseñas no coinciden")
    });
    let role_error =
        Signal::derive(move || (touched.get() && role.get().is_empty()).then_some("Seleccione un rol"));

    let form_valido = move || {
        username_valido(&username.get())
            && email_valido(&email.get())
            && password_valida(&password.get())
            && password.get() == confirm_password.get()
            && !role.get().is_empty()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_touched.set(true);

        if !form_valido() || is_loading.get() {
            return;
        }

        set_is_loading.set(true);
        let request = RegisterRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            role: role.get(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::register(&api_client, &request).await {
                Ok(response) if response.success => {
                    notifier.success("Usuario registrado exitosamente");
                    set_is_loading.set(false);
                    navigate("/auth/login", Default::default());
                }
                Ok(response) => {
                    notifier.error(response.message);
                    set_is_loading.set(false);
                }
                Err(_) => {
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Sistema de Planillas"</h1>
                <h2>"Registro de usuario"</h2>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="reg-username">"Usuario"</label>
                        <input
                            type="text"
                            id="reg-username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || username_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="reg-email">"Email"</label>
                        <input
                            type="email"
                            id="reg-email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || email_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="reg-password">"Contraseña"</label>
                        <input
                            type="password"
                            id="reg-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || password_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="reg-confirm">"Confirmar contraseña"</label>
                        <input
                            type="password"
                            id="reg-confirm"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || confirm_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="reg-role">"Rol"</label>
                        <select
                            id="reg-role"
                            on:change=move |ev| set_role.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        >
                            <option value="">"-- Seleccione --"</option>
                            <For
                                each=move || roles.get()
                                key=|r| r.value.clone()
                                children=move |r| {
                                    view! { <option value=r.value.clone()>{r.description.clone()}</option> }
                                }
                            />
                        </select>
                        {move || role_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <button type="submit" class="btn btn--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Registrando..." } else { "Registrarse" }}
                    </button>
                </form>

                <div class="login-footer">
                    <span>"¿Ya tiene cuenta? "</span>
                    <A href="/auth/login">"Inicie sesión"</A>
                </div>
            </div>
        </div>
    }
}
