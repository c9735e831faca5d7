use contracts::domain::sistema_pension::SistemaPensionDto;
use contracts::shared::validation::{nombre_valido, tasa_valida};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;

use crate::domain::sistema_pension::api;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::form_mode::{mode_from_params, FormMode};
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

#[component]
pub fn SistemaPensionFormCreate() -> impl IntoView {
    view! { <SistemaPensionForm mode=FormMode::Create /> }
}

#[component]
pub fn SistemaPensionFormEdit() -> impl IntoView {
    match mode_from_params("edit") {
        Some(mode) => view! { <SistemaPensionForm mode /> }.into_any(),
        None => view! { <Redirect path="/sistema-pension" /> }.into_any(),
    }
}

#[component]
pub fn SistemaPensionFormView() -> impl IntoView {
    match mode_from_params("view") {
        Some(mode) => view! { <SistemaPensionForm mode /> }.into_any(),
        None => view! { <Redirect path="/sistema-pension" /> }.into_any(),
    }
}

/// Además del nombre, el formulario captura las tres tasas en porcentaje;
/// todas deben quedar dentro de [0, 100].
#[component]
pub fn SistemaPensionForm(mode: FormMode) -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let (nombre, set_nombre) = signal(String::new());
    let (aporte, set_aporte) = signal(0.0_f64);
    let (comision, set_comision) = signal(0.0_f64);
    let (prima, set_prima) = signal(0.0_f64);
    let (activo, set_activo) = signal(true);
    let (original, set_original) = signal(None::<SistemaPensionDto>);
    let (touched, set_touched) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    let disabled = move || mode.is_view() || is_submitting.get();

    if let Some(id) = mode.id() {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::obtener_por_id(&api_client, id).await {
                    Ok(sistema) => {
                        set_nombre.set(sistema.nombre.clone());
                        set_aporte.set(sistema.aporte);
                        set_comision.set(sistema.comision);
                        set_prima.set(sistema.prima);
                        set_activo.set(sistema.activo);
                        set_original.set(Some(sistema));
                    }
                    Err(_) => {
                        navigate("/sistema-pension", Default::default());
                    }
                }
            });
        });
    }

    let nombre_error = Signal::derive(move || {
        (touched.get() && !nombre_valido(&nombre.get()))
            .then_some("El nombre debe tener al menos 3 caracteres")
    });
    let aporte_error = Signal::derive(move || {
        (touched.get() && !tasa_valida(aporte.get())).then_some("El aporte debe estar entre 0 y 100")
    });
    let comision_error = Signal::derive(move || {
        (touched.get() && !tasa_valida(comision.get()))
            .then_some("La comisión debe estar entre 0 y 100")
    });
    let prima_error = Signal::derive(move || {
        (touched.get() && !tasa_valida(prima.get())).then_some("La prima debe estar entre 0 y 100")
    });

    let form_valido = move || {
        nombre_valido(&nombre.get())
            && tasa_valida(aporte.get())
            && tasa_valida(comision.get())
            && tasa_valida(prima.get())
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_touched.set(true);

            if !form_valido() || is_submitting.get() {
                return;
            }

            set_is_submitting.set(true);
            let navigate = navigate.clone();

            spawn_local(async move {
                let result = match mode {
                    FormMode::Edit(id) => {
                        let mut sistema = original.get_untracked().unwrap_or_else(|| {
                            SistemaPensionDto::nuevo(
                                nombre.get_untracked(),
                                aporte.get_untracked(),
                                comision.get_untracked(),
                                prima.get_untracked(),
                                activo.get_untracked(),
                            )
                        });
                        sistema.nombre = nombre.get_untracked();
                        sistema.aporte = aporte.get_untracked();
                        sistema.comision = comision.get_untracked();
                        sistema.prima = prima.get_untracked();
                        sistema.activo = activo.get_untracked();
                        api::actualizar(&api_client, id, &sistema).await.map(|_| ())
                    }
                    _ => {
                        let sistema = SistemaPensionDto::nuevo(
                            nombre.get_untracked(),
                            aporte.get_untracked(),
                            comision.get_untracked(),
                            prima.get_untracked(),
                            activo.get_untracked(),
                        );
                        api::crear(&api_client, &sistema).await.map(|_| ())
                    }
                };

                match result {
                    Ok(()) => {
                        let mensaje = if mode.is_edit() {
                            "Sistema de pensión actualizado exitosamente"
                        } else {
                            "Sistema de pensión creado exitosamente"
                        };
                        notifier.success(mensaje);
                        navigate("/sistema-pension", Default::default());
                    }
                    Err(_) => {
                        set_is_submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <PageFrame page_id="sistema-pension--form" category="form">
            <div class="page__header">
                <h1 class="page__title">{mode.titulo("Sistema de Pensión")}</h1>
            </div>

            <div class="page__content">
                <form class="entity-form" on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="sp-nombre">"Nombre"</label>
                        <input
                            type="text"
                            id="sp-nombre"
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

                    <div class="form-group">
                        <label for="sp-aporte">"Aporte (%)"</label>
                        <input
                            type="number"
                            id="sp-aporte"
                            step="0.01"
                            prop:value=move || aporte.get().to_string()
                            on:input=move |ev| {
                                set_aporte.set(event_target_value(&ev).parse().unwrap_or(0.0))
                            }
                            disabled=disabled
                        />
                        {move || {
                            aporte_error
                                .get()
                                .map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="sp-comision">"Comisión (%)"</label>
                        <input
                            type="number"
                            id="sp-comision"
                            step="0.01"
                            prop:value=move || comision.get().to_string()
                            on:input=move |ev| {
                                set_comision.set(event_target_value(&ev).parse().unwrap_or(0.0))
                            }
                            disabled=disabled
                        />
                        {move || {
                            comision_error
                                .get()
                                .map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="sp-prima">"Prima de seguro (%)"</label>
                        <input
                            type="number"
                            id="sp-prima"
                            step="0.01"
                            prop:value=move || prima.get().to_string()
                            on:input=move |ev| {
                                set_prima.set(event_target_value(&ev).parse().unwrap_or(0.0))
                            }
                            disabled=disabled
                        />
                        {move || {
                            prima_error
                                .get()
                                .map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <div class="form-group form-group--inline">
                        <label for="sp-activo">"Activo"</label>
                        <input
                            type="checkbox"
                            id="sp-activo"
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
                                "/sistema-pension/edit/{}",
                                mode.id().unwrap_or_default()
                            )>
                                <span class="btn btn--primary">"Editar"</span>
                            </A>
                        </Show>
                        <A href="/sistema-pension">
                            <span class="btn btn--secondary">"Cancelar"</span>
                        </A>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
