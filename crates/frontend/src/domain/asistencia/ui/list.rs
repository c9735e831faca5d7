use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use contracts::domain::asistencia::AsistenciaFilter;

use crate::domain::asistencia::api;
use crate::domain::asistencia::state::AsistenciaGrid;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::download::download_bytes;
use crate::shared::formatters::nombre_mes;
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Pantalla de asistencias: búsqueda por período, edición en línea con
/// revertir-al-cancelar, guardado masivo y carga/descarga de Excel.
#[component]
pub fn AsistenciaList() -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();

    let hoy = js_sys::Date::new_0();
    let (anio, set_anio) = signal(hoy.get_full_year() as i32);
    let (mes, set_mes) = signal(hoy.get_month() + 1);

    let grid = RwSignal::new(AsistenciaGrid::default());
    let (loading, set_loading) = signal(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let anios: Vec<i32> = {
        let actual = hoy.get_full_year() as i32;
        (actual - 5..actual + 5).collect()
    };

    // Un clic en "Buscar" emite exactamente una consulta con año y mes.
    let buscar = move || {
        spawn_local(async move {
            set_loading.set(true);
            let filtro = AsistenciaFilter {
                anio: anio.get_untracked(),
                mes: mes.get_untracked(),
            };
            match api::buscar(&api_client, filtro).await {
                Ok(filas) => {
                    grid.update(|g| g.replace(filas));
                    notifier.success("Búsqueda completada");
                }
                Err(_) => {
                    grid.update(|g| g.replace(Vec::new()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| buscar());

    let habilitar_edicion = move |id: i64| {
        grid.update(|g| g.begin_edit(id));
    };

    let cancelar_edicion = move |id: i64| {
        grid.update(|g| g.cancel_edit(id));
    };

    let guardar_fila = move |id: i64| {
        let ok = {
            let mut resultado = false;
            grid.update(|g| resultado = g.commit_edit(id));
            resultado
        };
        if ok {
            notifier.success("Cambios guardados localmente");
        } else {
            notifier.error("Por favor, ingresa valores válidos");
        }
    };

    // Guardado masivo: manda todas las filas visibles etiquetadas con el
    // período del filtro y recarga para asegurar consistencia.
    let guardar_cambios = move || {
        if grid.with_untracked(|g| g.any_editing()) {
            notifier.warning("Termine o cancele las filas en edición antes de guardar");
            return;
        }
        spawn_local(async move {
            set_loading.set(true);
            let payload = grid.with_untracked(|g| {
                g.to_save_payload(anio.get_untracked(), mes.get_untracked())
            });
            match api::guardar(&api_client, &payload).await {
                Ok(_) => {
                    notifier.success("Cambios guardados exitosamente");
                    buscar();
                }
                Err(_) => {
                    set_loading.set(false);
                }
            }
        });
    };

    let descargar_excel = move || {
        spawn_local(async move {
            let filtro = AsistenciaFilter {
                anio: anio.get_untracked(),
                mes: mes.get_untracked(),
            };
            match api::descargar_excel(&api_client, filtro).await {
                Ok(bytes) => {
                    let nombre = format!("asistencias_{}_{}.xlsx", filtro.anio, filtro.mes);
                    match download_bytes(&bytes, XLSX_MIME, &nombre) {
                        Ok(()) => notifier.success("Archivo descargado exitosamente"),
                        Err(e) => {
                            log::warn!("Fallo de descarga: {}", e);
                            notifier.error("Error al descargar el archivo");
                        }
                    }
                }
                Err(_) => {}
            }
        });
    };

    // La carga de Excel reemplaza la grilla completa con lo que el backend
    // haya parseado del archivo.
    let on_file_selected = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(i) => i,
            None => return,
        };
        let archivo = match input.files().and_then(|f| f.get(0)) {
            Some(f) => f,
            None => return,
        };

        spawn_local(async move {
            set_loading.set(true);
            let (anio_val, mes_val) = (anio.get_untracked(), mes.get_untracked());
            match api::cargar_excel(&api_client, &archivo, anio_val, mes_val).await {
                Ok(respuesta) => {
                    grid.update(|g| g.replace(respuesta.data.unwrap_or_default()));
                    notifier.success("Archivo cargado exitosamente");
                }
                Err(_) => {}
            }
            if let Some(input) = file_input_ref.get_untracked() {
                input.set_value("");
            }
            set_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="asistencia--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Asistencias"</h1>
                    <Show when=move || grid.with(|g| g.has_unsaved_changes)>
                        <span class="badge badge--warning">"Cambios sin guardar"</span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| descargar_excel()
                        disabled=move || loading.get()
                    >
                        "Descargar Excel"
                    </button>
                    <label class="btn btn--secondary" for="asistencia-archivo">
                        "Cargar Excel"
                    </label>
                    <input
                        type="file"
                        id="asistencia-archivo"
                        accept=".xlsx,.xls"
                        style="display: none;"
                        node_ref=file_input_ref
                        on:change=on_file_selected
                    />
                    <button
                        class="btn btn--primary"
                        on:click=move |_| guardar_cambios()
                        disabled=move || loading.get() || grid.with(|g| g.rows.is_empty())
                    >
                        "Guardar cambios"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel__left">
                        <label>"Año:"</label>
                        <select on:change=move |ev| {
                            set_anio.set(event_target_value(&ev).parse().unwrap_or(2024))
                        }>
                            {anios
                                .iter()
                                .map(|&a| {
                                    view! {
                                        <option value=a.to_string() selected=move || anio.get() == a>
                                            {a.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>

                        <label>"Mes:"</label>
                        <select on:change=move |ev| {
                            set_mes.set(event_target_value(&ev).parse().unwrap_or(1))
                        }>
                            {(1u32..=12)
                                .map(|m| {
                                    view! {
                                        <option value=m.to_string() selected=move || mes.get() == m>
                                            {nombre_mes(m)}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>

                        <button
                            class="btn btn--primary"
                            on:click=move |_| buscar()
                            disabled=move || loading.get()
                        >
                            {move || if loading.get() { "Buscando..." } else { "Buscar" }}
                        </button>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Documento"</TableHeaderCell>
                                <TableHeaderCell>"Trabajador"</TableHeaderCell>
                                <TableHeaderCell>"Días lab."</TableHeaderCell>
                                <TableHeaderCell>"Días desc."</TableHeaderCell>
                                <TableHeaderCell>"Inasist."</TableHeaderCell>
                                <TableHeaderCell>"Feriados"</TableHeaderCell>
                                <TableHeaderCell>"H.E. 25%"</TableHeaderCell>
                                <TableHeaderCell>"H.E. 35%"</TableHeaderCell>
                                <TableHeaderCell>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || {
                                    grid.with(|g| {
                                        g.rows
                                            .iter()
                                            .map(|r| (r.clone(), g.is_editing(r.id_asistencia)))
                                            .collect::<Vec<_>>()
                                    })
                                }
                                // La clave incluye el estado de edición: entrar o
                                // salir de edición re-renderiza la fila.
                                key=|(r, editing)| format!("{}:{}", r.id_asistencia, editing)
                                children=move |(row, editing)| {
                                    let id = row.id_asistencia;
                                    if editing {
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{row.documento.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.nombre.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        type="number"
                                                        class="cell-input"
                                                        min="0"
                                                        value=row.dias_laborales.to_string()
                                                        on:input=move |ev| {
                                                            let v = event_target_value(&ev).parse().unwrap_or(-1);
                                                            grid.update(|g| {
                                                                g.update_row(id, |r| r.dias_laborales = v)
                                                            });
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        type="number"
                                                        class="cell-input"
                                                        min="0"
                                                        value=row.dias_descanso.to_string()
                                                        on:input=move |ev| {
                                                            let v = event_target_value(&ev).parse().unwrap_or(-1);
                                                            grid.update(|g| {
                                                                g.update_row(id, |r| r.dias_descanso = v)
                                                            });
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        type="number"
                                                        class="cell-input"
                                                        min="0"
                                                        value=row.dias_inasistencia.to_string()
                                                        on:input=move |ev| {
                                                            let v = event_target_value(&ev).parse().unwrap_or(-1);
                                                            grid.update(|g| {
                                                                g.update_row(id, |r| r.dias_inasistencia = v)
                                                            });
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        type="number"
                                                        class="cell-input"
                                                        min="0"
                                                        value=row.dias_feriados.to_string()
                                                        on:input=move |ev| {
                                                            let v = event_target_value(&ev).parse().unwrap_or(-1);
                                                            grid.update(|g| {
                                                                g.update_row(id, |r| r.dias_feriados = v)
                                                            });
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        type="number"
                                                        class="cell-input"
                                                        min="0"
                                                        step="0.5"
                                                        value=row.horas_extra25.to_string()
                                                        on:input=move |ev| {
                                                            let v = event_target_value(&ev).parse().unwrap_or(-1.0);
                                                            grid.update(|g| {
                                                                g.update_row(id, |r| r.horas_extra25 = v)
                                                            });
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        type="number"
                                                        class="cell-input"
                                                        min="0"
                                                        step="0.5"
                                                        value=row.horas_extra35.to_string()
                                                        on:input=move |ev| {
                                                            let v = event_target_value(&ev).parse().unwrap_or(-1.0);
                                                            grid.update(|g| {
                                                                g.update_row(id, |r| r.horas_extra35 = v)
                                                            });
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="table__actions">
                                                            <button
                                                                class="btn btn--small btn--primary"
                                                                on:click=move |_| guardar_fila(id)
                                                            >
                                                                "Guardar"
                                                            </button>
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| cancelar_edicion(id)
                                                            >
                                                                "Cancelar"
                                                            </button>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{row.documento.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.nombre.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.dias_laborales}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.dias_descanso}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.dias_inasistencia}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.dias_feriados}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("{:.1}", row.horas_extra25)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("{:.1}", row.horas_extra35)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| habilitar_edicion(id)
                                                        >
                                                            "Editar"
                                                        </button>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                            .into_any()
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || {
                        !loading.get() && grid.with(|g| g.rows.is_empty())
                    }>
                        <div class="table-empty">"Sin asistencias para el período seleccionado"</div>
                    </Show>
                </div>

                <div class="page__footer">
                    <A href="/main-menu">
                        <span class="btn btn--secondary">"Volver al menú"</span>
                    </A>
                </div>
            </div>
        </PageFrame>
    }
}
