use contracts::domain::tipo_documento::TipoDocumentoDto;
use contracts::shared::validation::nombre_valido;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;

use crate::domain::tipo_documento::api;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::form_mode::{mode_from_params, FormMode};
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

#[component]
pub fn TipoDocumentoFormCreate() -> impl IntoView {
    view! { <TipoDocumentoForm mode=FormMode::Create /> }
}

#[component]
pub fn TipoDocumentoFormEdit() -> impl IntoView {
    match mode_from_params("edit") {
        Some(mode) => view! { <TipoDocumentoForm mode /> }.into_any(),
        None => view! { <Redirect path="/tipo-documento" /> }.into_any(),
    }
}

#[component]
pub fn TipoDocumentoFormView() -> impl IntoView {
    match mode_from_params("view") {
        Some(mode) => view! { <TipoDocumentoForm mode /> }.into_any(),
        None => view! { <Redirect path="/tipo-documento" /> }.into_any(),
    }
}

#[component]
pub fn TipoDocumentoForm(mode: FormMode) -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let (nombre, set_nombre) = signal(String::new());
    let (activo, set_activo) = signal(true);
    let (original, set_original) = signal(None::<TipoDocumentoDto>);
    let (touched, set_touched) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    let disabled = move || mode.is_view() || is_submitting.get();

    if let Some(id) = mode.id() {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::obtener_por_id(&api_client, id).await {
                    Ok(tipo_documento) => {
                        set_nombre.set(tipo_documento.nombre.clone());
                        set_activo.set(tipo_documento.activo);
                        set_original.set(Some(tipo_documento));
                    }
                    Err(_) => {
                        navigate("/tipo-documento", Default::default());
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
                        let mut tipo_documento = original.get_untracked().unwrap_or_else(|| {
                            TipoDocumentoDto::nuevo(nombre_val.clone(), activo.get_untracked())
                        });
                        tipo_documento.nombre = nombre_val;
                        tipo_documento.activo = activo.get_untracked();
                        api::actualizar(&api_client, id, &tipo_documento).await.map(|_| ())
                    }
                    _ => {
                        let tipo_documento = TipoDocumentoDto::nuevo(nombre_val, activo.get_untracked());
                        api::crear(&api_client, &tipo_documento).await.map(|_| ())
                    }
                };

                match result {
                    Ok(()) => {
                        let mensaje = if mode.is_edit() {
                            "Tipo de documento actualizado exitosamente"
                        } else {
                            "Tipo de documento creado exitosamente"
                        };
                        notifier.success(mensaje);
                        navigate("/tipo-documento", Default::default());
                    }
                    Err(_) => {
                        set_is_submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <PageFrame page_id="tipo-documento--form" category="form">
            <div class="page__header">
                <h1 class="page__title">{mode.titulo("Tipo de Documento")}</h1>
            </div>

            <div class="page__content">
                <form class="entity-form" on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="tipo-documento-nombre">"Nombre"</label>
                        <input
                            type="text"
                            id="tipo-documento-nombre"
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
                        <label for="tipo-documento-activo">"Activo"</label>
                        <input
                            type="checkbox"
                            id="tipo-documento-activo"
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
                                "/tipo-documento/edit/{}",
                                mode.id().unwrap_or_default()
                            )>
                                <span class="btn btn--primary">"Editar"</span>
                            </A>
                        </Show>
                        <A href="/tipo-documento">
                            <span class="btn btn--secondary">"Cancelar"</span>
                        </A>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
