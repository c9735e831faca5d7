use chrono::NaiveDate;
use contracts::domain::cargo::CargoDto;
use contracts::domain::estado_civil::EstadoCivilDto;
use contracts::domain::genero::GeneroDto;
use contracts::domain::sistema_pension::SistemaPensionDto;
use contracts::domain::situacion_trabajador::SituacionTrabajadorDto;
use contracts::domain::tipo_documento::TipoDocumentoDto;
use contracts::domain::trabajador::TrabajadorDto;
use contracts::shared::validation::email_valido;
use contracts::shared::EstadoFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;

use crate::domain::trabajador::api;
use crate::domain::{
    cargo, estado_civil, genero, sistema_pension, situacion_trabajador, tipo_documento,
};
use crate::shared::components::page_frame::PageFrame;
use crate::shared::form_mode::{mode_from_params, FormMode};
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

#[component]
pub fn TrabajadorFormCreate() -> impl IntoView {
    view! { <TrabajadorForm mode=FormMode::Create /> }
}

#[component]
pub fn TrabajadorFormEdit() -> impl IntoView {
    match mode_from_params("edit") {
        Some(mode) => view! { <TrabajadorForm mode /> }.into_any(),
        None => view! { <Redirect path="/trabajador" /> }.into_any(),
    }
}

#[component]
pub fn TrabajadorFormView() -> impl IntoView {
    match mode_from_params("view") {
        Some(mode) => view! { <TrabajadorForm mode /> }.into_any(),
        None => view! { <Redirect path="/trabajador" /> }.into_any(),
    }
}

fn min_len(valor: &str, minimo: usize) -> bool {
    valor.trim().chars().count() >= minimo
}

/// Tamaño de página holgado para traer los catálogos completos de una vez.
const REFERENCIAS_PAGE_SIZE: i64 = 100;

#[component]
pub fn TrabajadorForm(mode: FormMode) -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let form = RwSignal::new(TrabajadorDto {
        activo: true,
        ..Default::default()
    });
    let (touched, set_touched) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (is_loading, set_is_loading) = signal(true);
    let (has_error, set_has_error) = signal(false);

    // Catálogos de referencia para los selects (sólo ítems activos).
    let tipos_documento = RwSignal::new(Vec::<TipoDocumentoDto>::new());
    let generos = RwSignal::new(Vec::<GeneroDto>::new());
    let estados_civiles = RwSignal::new(Vec::<EstadoCivilDto>::new());
    let cargos = RwSignal::new(Vec::<CargoDto>::new());
    let situaciones = RwSignal::new(Vec::<SituacionTrabajadorDto>::new());
    let sistemas_pension = RwSignal::new(Vec::<SistemaPensionDto>::new());

    // Los seis catálogos se piden en paralelo y se espera a que terminen
    // todos; si cualquiera falla, el formulario entero queda en error con
    // opción de reintento.
    let load_referencias = move || {
        spawn_local(async move {
            set_is_loading.set(true);
            set_has_error.set(false);

            let (td, ge, ec, ca, si, sp) = futures::join!(
                tipo_documento::api::listar(
                    &api_client,
                    EstadoFilter::Activo,
                    "",
                    0,
                    REFERENCIAS_PAGE_SIZE
                ),
                genero::api::listar(&api_client, EstadoFilter::Activo, "", 0, REFERENCIAS_PAGE_SIZE),
                estado_civil::api::listar(
                    &api_client,
                    EstadoFilter::Activo,
                    "",
                    0,
                    REFERENCIAS_PAGE_SIZE
                ),
                cargo::api::listar(&api_client, EstadoFilter::Activo, "", 0, REFERENCIAS_PAGE_SIZE),
                situacion_trabajador::api::listar(
                    &api_client,
                    EstadoFilter::Activo,
                    "",
                    0,
                    REFERENCIAS_PAGE_SIZE
                ),
                sistema_pension::api::listar(
                    &api_client,
                    EstadoFilter::Activo,
                    "",
                    0,
                    REFERENCIAS_PAGE_SIZE
                ),
            );

            match (td, ge, ec, ca, si, sp) {
                (Ok(td), Ok(ge), Ok(ec), Ok(ca), Ok(si), Ok(sp)) => {
                    tipos_documento.set(td.content);
                    generos.set(ge.content);
                    estados_civiles.set(ec.content);
                    cargos.set(ca.content);
                    situaciones.set(si.content);
                    sistemas_pension.set(sp.content);
                }
                _ => {
                    notifier.error("Error al cargar los datos del formulario");
                    set_has_error.set(true);
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| load_referencias());

    if let Some(id) = mode.id() {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::obtener_por_id(&api_client, id).await {
                    Ok(trabajador) => {
                        form.set(trabajador);
                    }
                    Err(_) => {
                        navigate("/trabajador", Default::default());
                    }
                }
            });
        });
    }

    let disabled = move || mode.is_view() || is_submitting.get() || is_loading.get();

    let form_valido = move || {
        form.with(|f| {
            f.id_tipo_documento.is_some()
                && min_len(&f.documento, 8)
                && min_len(&f.nombres, 2)
                && min_len(&f.apellido_paterno, 2)
                && (f.apellido_materno.trim().is_empty() || min_len(&f.apellido_materno, 2))
                && f.id_genero.is_some()
                && f.id_estado_civil.is_some()
                && min_len(&f.direccion, 10)
                && email_valido(&f.email)
                && f.hijos >= 0
                && f.id_cargo.is_some()
                && f.fec_nacimiento.is_some()
                && f.fec_ingreso.is_some()
                && f.id_situacion.is_some()
                && f.id_sistema_pension.is_some()
        })
    };

    let error_si = move |cond: bool, mensaje: &'static str| {
        (touched.get() && cond).then_some(mensaje)
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
                let datos = form.get_untracked();
                let result = match mode {
                    FormMode::Edit(id) => {
                        let mut trabajador = datos;
                        trabajador.id_trabajador = trabajador.id_trabajador.or(Some(id));
                        api::actualizar(&api_client, id, &trabajador).await.map(|_| ())
                    }
                    _ => api::crear(&api_client, &datos).await.map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        let mensaje = if mode.is_edit() {
                            "Trabajador actualizado exitosamente"
                        } else {
                            "Trabajador creado exitosamente"
                        };
                        notifier.success(mensaje);
                        navigate("/trabajador", Default::default());
                    }
                    Err(_) => {
                        set_is_submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <PageFrame page_id="trabajador--form" category="form">
            <div class="page__header">
                <h1 class="page__title">{mode.titulo("Trabajador")}</h1>
            </div>

            <div class="page__content">
                <Show when=move || has_error.get()>
                    <div class="alert alert--error">
                        "No se pudieron cargar los catálogos de referencia."
                        <button class="btn btn--small" on:click=move |_| load_referencias()>
                            "Reintentar"
                        </button>
                    </div>
                </Show>

                <form class="entity-form entity-form--wide" on:submit=on_submit novalidate>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="t-tipo-documento">"Tipo de documento"</label>
                            <select
                                id="t-tipo-documento"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| f.id_tipo_documento = v);
                                }
                                disabled=disabled
                            >
                                <option
                                    value=""
                                    selected=move || form.with(|f| f.id_tipo_documento.is_none())
                                >
                                    "-- Seleccione --"
                                </option>
                                <For
                                    each=move || tipos_documento.get()
                                    key=|d| d.id_tipo_documento.unwrap_or_default()
                                    children=move |d| {
                                        let id = d.id_tipo_documento.unwrap_or_default();
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || {
                                                    form.with(|f| f.id_tipo_documento == Some(id))
                                                }
                                            >
                                                {d.nombre.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            {move || {
                                error_si(
                                        form.with(|f| f.id_tipo_documento.is_none()),
                                        "Seleccione el tipo de documento",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-documento">"Número de documento"</label>
                            <input
                                type="text"
                                id="t-documento"
                                prop:value=move || form.with(|f| f.documento.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.documento = v);
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| !min_len(&f.documento, 8)),
                                        "El documento debe tener al menos 8 caracteres",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="t-nombres">"Nombres"</label>
                            <input
                                type="text"
                                id="t-nombres"
                                prop:value=move || form.with(|f| f.nombres.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.nombres = v);
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| !min_len(&f.nombres, 2)),
                                        "Ingrese los nombres",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-apellido-paterno">"Apellido paterno"</label>
                            <input
                                type="text"
                                id="t-apellido-paterno"
                                prop:value=move || form.with(|f| f.apellido_paterno.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.apellido_paterno = v);
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| !min_len(&f.apellido_paterno, 2)),
                                        "Ingrese el apellido paterno",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-apellido-materno">"Apellido materno"</label>
                            <input
                                type="text"
                                id="t-apellido-materno"
                                prop:value=move || form.with(|f| f.apellido_materno.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.apellido_materno = v);
                                }
                                disabled=disabled
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="t-genero">"Género"</label>
                            <select
                                id="t-genero"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| f.id_genero = v);
                                }
                                disabled=disabled
                            >
                                <option value="" selected=move || form.with(|f| f.id_genero.is_none())>
                                    "-- Seleccione --"
                                </option>
                                <For
                                    each=move || generos.get()
                                    key=|g| g.id_genero.unwrap_or_default()
                                    children=move |g| {
                                        let id = g.id_genero.unwrap_or_default();
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || form.with(|f| f.id_genero == Some(id))
                                            >
                                                {g.nombre.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            {move || {
                                error_si(form.with(|f| f.id_genero.is_none()), "Seleccione el género")
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-estado-civil">"Estado civil"</label>
                            <select
                                id="t-estado-civil"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| f.id_estado_civil = v);
                                }
                                disabled=disabled
                            >
                                <option
                                    value=""
                                    selected=move || form.with(|f| f.id_estado_civil.is_none())
                                >
                                    "-- Seleccione --"
                                </option>
                                <For
                                    each=move || estados_civiles.get()
                                    key=|e| e.id_estado_civil.unwrap_or_default()
                                    children=move |e| {
                                        let id = e.id_estado_civil.unwrap_or_default();
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || {
                                                    form.with(|f| f.id_estado_civil == Some(id))
                                                }
                                            >
                                                {e.nombre.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            {move || {
                                error_si(
                                        form.with(|f| f.id_estado_civil.is_none()),
                                        "Seleccione el estado civil",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-hijos">"Hijos"</label>
                            <input
                                type="number"
                                id="t-hijos"
                                min="0"
                                prop:value=move || form.with(|f| f.hijos.to_string())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev).parse().unwrap_or(0);
                                    form.update(|f| f.hijos = v);
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| f.hijos < 0),
                                        "La cantidad de hijos no puede ser negativa",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group form-group--grow">
                            <label for="t-direccion">"Dirección"</label>
                            <input
                                type="text"
                                id="t-direccion"
                                prop:value=move || form.with(|f| f.direccion.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.direccion = v);
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| !min_len(&f.direccion, 10)),
                                        "La dirección debe tener al menos 10 caracteres",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-email">"Email"</label>
                            <input
                                type="email"
                                id="t-email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.email = v);
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| !email_valido(&f.email)),
                                        "Ingrese un email válido",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="t-fec-nacimiento">"Fecha de nacimiento"</label>
                            <input
                                type="date"
                                id="t-fec-nacimiento"
                                prop:value=move || {
                                    form.with(|f| {
                                        f.fec_nacimiento
                                            .map(|d| d.format("%Y-%m-%d").to_string())
                                            .unwrap_or_default()
                                    })
                                }
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| {
                                        f.fec_nacimiento =
                                            NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok();
                                    });
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| f.fec_nacimiento.is_none()),
                                        "Ingrese la fecha de nacimiento",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-fec-ingreso">"Fecha de ingreso"</label>
                            <input
                                type="date"
                                id="t-fec-ingreso"
                                prop:value=move || {
                                    form.with(|f| {
                                        f.fec_ingreso
                                            .map(|d| d.format("%Y-%m-%d").to_string())
                                            .unwrap_or_default()
                                    })
                                }
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| {
                                        f.fec_ingreso =
                                            NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok();
                                    });
                                }
                                disabled=disabled
                            />
                            {move || {
                                error_si(
                                        form.with(|f| f.fec_ingreso.is_none()),
                                        "Ingrese la fecha de ingreso",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="t-cargo">"Cargo"</label>
                            <select
                                id="t-cargo"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| f.id_cargo = v);
                                }
                                disabled=disabled
                            >
                                <option value="" selected=move || form.with(|f| f.id_cargo.is_none())>
                                    "-- Seleccione --"
                                </option>
                                <For
                                    each=move || cargos.get()
                                    key=|c| c.id_cargo.unwrap_or_default()
                                    children=move |c| {
                                        let id = c.id_cargo.unwrap_or_default();
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || form.with(|f| f.id_cargo == Some(id))
                                            >
                                                {c.nombre.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            {move || {
                                error_si(form.with(|f| f.id_cargo.is_none()), "Seleccione el cargo")
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-situacion">"Situación"</label>
                            <select
                                id="t-situacion"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| f.id_situacion = v);
                                }
                                disabled=disabled
                            >
                                <option
                                    value=""
                                    selected=move || form.with(|f| f.id_situacion.is_none())
                                >
                                    "-- Seleccione --"
                                </option>
                                <For
                                    each=move || situaciones.get()
                                    key=|s| s.id_situacion.unwrap_or_default()
                                    children=move |s| {
                                        let id = s.id_situacion.unwrap_or_default();
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || form.with(|f| f.id_situacion == Some(id))
                                            >
                                                {s.nombre.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            {move || {
                                error_si(
                                        form.with(|f| f.id_situacion.is_none()),
                                        "Seleccione la situación",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="t-sistema-pension">"Sistema de pensión"</label>
                            <select
                                id="t-sistema-pension"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| f.id_sistema_pension = v);
                                }
                                disabled=disabled
                            >
                                <option
                                    value=""
                                    selected=move || form.with(|f| f.id_sistema_pension.is_none())
                                >
                                    "-- Seleccione --"
                                </option>
                                <For
                                    each=move || sistemas_pension.get()
                                    key=|s| s.id_sistema_pension.unwrap_or_default()
                                    children=move |s| {
                                        let id = s.id_sistema_pension.unwrap_or_default();
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || {
                                                    form.with(|f| f.id_sistema_pension == Some(id))
                                                }
                                            >
                                                {s.nombre.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            {move || {
                                error_si(
                                        form.with(|f| f.id_sistema_pension.is_none()),
                                        "Seleccione el sistema de pensión",
                                    )
                                    .map(|e| view! { <span class="field-error">{e}</span> })
                            }}
                        </div>
                    </div>

                    <div class="form-group form-group--inline">
                        <label for="t-activo">"Activo"</label>
                        <input
                            type="checkbox"
                            id="t-activo"
                            prop:checked=move || form.with(|f| f.activo)
                            on:change=move |ev| {
                                let v = event_target_checked(&ev);
                                form.update(|f| f.activo = v);
                            }
                            disabled=disabled
                        />
                    </div>

                    <div class="form-actions">
                        <Show when=move || !mode.is_view()>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || is_submitting.get() || is_loading.get()
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
                                "/trabajador/edit/{}",
                                mode.id().unwrap_or_default()
                            )>
                                <span class="btn btn--primary">"Editar"</span>
                            </A>
                        </Show>
                        <A href="/trabajador">
                            <span class="btn btn--secondary">"Cancelar"</span>
                        </A>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
