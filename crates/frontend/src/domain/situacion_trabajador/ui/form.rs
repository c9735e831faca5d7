use contracts::domain::situacion_trabajador::SituacionTrabajadorDto;
use contracts::shared::validation::nombre_valido;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;

use crate::domain::situacion_trabajador::api;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::form_mode::{mode_from_params, FormMode};
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

#[component]
pub fn SituacionTrabajadorFormCreate() -> impl IntoView {
    view! { <SituacionTrabajadorForm mode=FormMode::Create /> }
}

#[component]
pub fn SituacionTrabajadorFormEdit() -> impl IntoView {
    match mode_from_params("edit") {
        Some(mode) => view! { <SituacionTrabajadorForm mode /> }.into_any(),
        None => view! { <Redirect path="/situacion-trabajador" /> }.into_any(),
    }
}

#[component]
pub fn SituacionTrabajadorFormView() -> impl IntoView {
    match mode_from_params("view") {
        Some(mode) => view! { <SituacionTrabajadorForm mode /> }.into_any(),
        None => view! { <Redirect path="/situacion-trabajador" /> }.into_any(),
    }
}

#[component]
pub fn SituacionTrabajadorForm(mode: FormMode) -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let (nombre, set_nombre) = signal(String::new());
    let (activo, set_activo) = signal(true);
    let (original, set_original) = signal(None::<SituacionTrabajadorDto>);
    let (touched, set_touched) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    let disabled = move || mode.is_view() || is_submitting.get();

    if let Some(id) = mode.id() {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::obtener_por_id(&api_client, id).await {
                    Ok(situacion) => {
                        set_nombre.set(situacion.nombre.clone());
                        set_activo.set(situacion.activo);
                        set_original.set(Some(situacion));
                    }
                    Err(_) => {
                        navigate("/situacion-trabajador", Default::default());
                    }
                }
            });
        });
    }

    let nombre_error = Signal::derive(move || {
        (touched.get() && !nombre_valido(&nombre.get()))
            .then_some("El nombre debe tener al menos 3 caracteres")
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_touched.set(true);

            let nombre_val = nombre.get();
            if !nombre_valido(&nombre_val) || is_submitting.get() {
                return;
            }

            set_is_submitting.set(true);
            let navigate = navigate.clone();

            spawn_local(async move {
                let result = match mode {
                    FormMode::Edit(id) => {
                        let mut situacion = original.get_untracked().unwrap_or_else(|| {
                            SituacionTrabajadorDto::nuevo(nombre_val.clone(), activo.get_untracked())
                        });
                        situacion.nombre = nombre_val;
                        situacion.activo = activo.get_untracked();
                        api::actualizar(&api_client, id, &situacion).await.map(|_| ())
                    }
                    _ => {
                        let situacion = SituacionTrabajadorDto::nuevo(nombre_val, activo.get_untracked());
                        api::crear(&api_client, &situacion).await.map(|_| ())
                    }
                };

                match result {
                    Ok(()) => {
                        let mensaje = if mode.is_edit() {
                            "Situación actualizada exitosamente"
                        } else {
                            "Situación creada exitosamente"
                        };
                        notifier.success(mensaje);
                        navigate("/situacion-trabajador", Default::default());
                    }
                    Err(_) => {
                        set_is_submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <PageFrame page_id="situacion-trabajador--form" category="form">
            <div class="page__header">
                <h1 class="page__title">{mode.titulo("Situación del Trabajador")}</h1>
            </div>

            <div class="page__content">
                <form class="entity-form" on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="situacion-nombre">"Nombre"</label>
                        <input
                            type="text"
                            id="situacion-nombre"
                            prop:value=move || nombre.get()
                            on:input=move |ev| set_nombre.set(event_target_value(&ev))
                            disabled=disabled
                        />
                        {move || {
                            nombre_error
                                .get()
                                .map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <div class="form-group form-group--inline">
                        <label for="situacion-activo">"Activo"</label>
                        <input
                            type="checkbox"
                            id="situacion-activo"
                            prop:checked=move || activo.get()
                            on:change=move |ev| set_activo.set(event_target_checked(&ev))
                            disabled=disabled
                        />
                    </div>

                    <div class="form-actions">
                        <Show when=move || !mode.is_view()>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || is_submitting.get()
                            >
                                {move || {
                                    if is_submitting.get() {
                                        "Guardando..."
                                    } else if mode.is_edit() {
                                        "Actualizar"
                                    } else {
                                        "Crear"
                                    }
                                }}
                            </button>
                        </Show>
                        <Show when=move || mode.is_view()>
                            <A href=format!(
                                "/situacion-trabajador/edit/{}",
                                mode.id().unwrap_or_default()
                            )>
                                <span class="btn btn--primary">"Editar"</span>
                            </A>
                        </Show>
                        <A href="/situacion-trabajador">
                            <span class="btn btn--secondary">"Cancelar"</span>
                        </A>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
