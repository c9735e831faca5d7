use contracts::domain::planilla::{PlanillaMensualDto, PlanillaMensualResponse};
use contracts::domain::trabajador::TrabajadorResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::planilla_mensual::api;
use crate::domain::planilla_mensual::ui::boleta::BoletaModal;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::formatters::{format_money, nombre_mes};
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

/// Fila de la tabla, normalizada desde la planilla persistida o desde una
/// recién calculada.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanillaRow {
    pub documento: String,
    pub nombre: String,
    pub total_ingreso: f64,
    pub total_descuento: f64,
    pub total_neto: f64,
    pub trabajador: Option<TrabajadorResponse>,
}

impl From<&PlanillaMensualDto> for PlanillaRow {
    fn from(dto: &PlanillaMensualDto) -> Self {
        Self {
            documento: dto.documento.clone(),
            nombre: dto.nombre_completo.clone(),
            total_ingreso: dto.total_ingreso,
            total_descuento: dto.total_descuento,
            total_neto: dto.total_neto_boleta,
            trabajador: None,
        }
    }
}

impl From<&PlanillaMensualResponse> for PlanillaRow {
    fn from(resp: &PlanillaMensualResponse) -> Self {
        let (documento, nombre) = resp
            .trabajador
            .as_ref()
            .map(|t| (t.documento.clone(), t.nombre_completo()))
            .unwrap_or_default();
        Self {
            documento,
            nombre,
            total_ingreso: resp.total_ingreso,
            total_descuento: resp.total_descuento,
            total_neto: resp.total_neto_boleta,
            trabajador: resp.trabajador.clone(),
        }
    }
}

#[derive(Clone)]
struct BoletaSeleccionada {
    documento: String,
    trabajador: Option<TrabajadorResponse>,
}

/// Pantalla de planilla mensual: listar lo persistido, calcular (lectura
/// pura) y guardar el último cálculo. Cada acción es un disparo explícito
/// del usuario.
#[component]
pub fn PlanillaMensualList() -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();

    let hoy = js_sys::Date::new_0();
    let (anio, set_anio) = signal(hoy.get_full_year() as i32);
    let (mes, set_mes) = signal(hoy.get_month() + 1);

    let rows = RwSignal::new(Vec::<PlanillaRow>::new());
    let calculadas = RwSignal::new(Vec::<PlanillaMensualResponse>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (boleta, set_boleta) = signal(None::<BoletaSeleccionada>);

    let anios: Vec<i32> = {
        let actual = hoy.get_full_year() as i32;
        (actual - 5..actual + 5).collect()
    };

    let listar = move || {
        spawn_local(async move {
            set_is_loading.set(true);
            set_error.set(None);
            match api::listar(&api_client, anio.get_untracked(), mes.get_untracked()).await {
                Ok(planillas) => {
                    rows.set(planillas.iter().map(PlanillaRow::from).collect());
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_is_loading.set(false);
        });
    };

    // El cálculo no persiste nada: sólo llena la tabla y deja el resultado
    // listo para un guardado explícito.
    let calcular = move || {
        spawn_local(async move {
            set_is_loading.set(true);
            set_error.set(None);
            match api::calcular(&api_client, anio.get_untracked(), mes.get_untracked()).await {
                Ok(resultado) => {
                    rows.set(resultado.iter().map(PlanillaRow::from).collect());
                    calculadas.set(resultado);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_is_loading.set(false);
        });
    };

    let guardar = move || {
        if calculadas.with_untracked(|c| c.is_empty()) {
            set_error.set(Some("No hay planillas calculadas para guardar.".into()));
            return;
        }
        spawn_local(async move {
            set_is_loading.set(true);
            set_error.set(None);
            let pendientes = calculadas.get_untracked();
            match api::guardar(&api_client, &pendientes).await {
                Ok(_) => {
                    notifier.success("Planillas guardadas correctamente");
                    calculadas.set(Vec::new());
                    listar();
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="planilla-mensual--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Planilla Mensual"</h1>
                    <span class="badge badge--primary">
                        {move || {
                            format!("{} {}", nombre_mes(mes.get()), anio.get())
                        }}
                    </span>
                </div>
                <div class="page__header-right">
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| listar()
                        disabled=move || is_loading.get()
                    >
                        "Listar"
                    </button>
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| calcular()
                        disabled=move || is_loading.get()
                    >
                        "Calcular"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| guardar()
                        disabled=move || {
                            is_loading.get() || calculadas.with(|c| c.is_empty())
                        }
                    >
                        "Guardar"
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
                    </div>
                </div>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                }}

                <Show when=move || is_loading.get()>
                    <div class="table-loading">"Procesando..."</div>
                </Show>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Documento"</TableHeaderCell>
                                <TableHeaderCell>"Trabajador"</TableHeaderCell>
                                <TableHeaderCell>"Total Ingresos"</TableHeaderCell>
                                <TableHeaderCell>"Total Descuentos"</TableHeaderCell>
                                <TableHeaderCell>"Neto a Pagar"</TableHeaderCell>
                                <TableHeaderCell>"Boleta"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| r.documento.clone()
                                children=move |row| {
                                    let documento = row.documento.clone();
                                    let trabajador = row.trabajador.clone();
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
                                                <TableCellLayout>
                                                    {format_money(row.total_ingreso)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_money(row.total_descuento)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_money(row.total_neto)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            set_boleta
                                                                .set(
                                                                    Some(BoletaSeleccionada {
                                                                        documento: documento.clone(),
                                                                        trabajador: trabajador.clone(),
                                                                    }),
                                                                )
                                                        }
                                                    >
                                                        "Ver boleta"
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || {
                        !is_loading.get() && rows.with(|r| r.is_empty())
                    }>
                        <div class="table-empty">
                            "Sin planillas para el período. Use Listar o Calcular."
                        </div>
                    </Show>
                </div>

                {move || {
                    boleta
                        .get()
                        .map(|seleccion| {
                            view! {
                                <BoletaModal
                                    anio=anio.get_untracked()
                                    mes=mes.get_untracked()
                                    documento=seleccion.documento
                                    trabajador=seleccion.trabajador
                                    on_close=Callback::new(move |_| set_boleta.set(None))
                                />
                            }
                        })
                }}

                <div class="page__footer">
                    <A href="/main-menu">
                        <span class="btn btn--secondary">"Volver al menú"</span>
                    </A>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fila_desde_dto_persistido() {
        let dto = PlanillaMensualDto {
            documento: "45879632".into(),
            nombre_completo: "María Quispe Rojas".into(),
            total_ingreso: 2050.5,
            total_descuento: 234.0,
            total_neto_boleta: 1816.5,
            ..Default::default()
        };
        let row = PlanillaRow::from(&dto);
        assert_eq!(row.documento, "45879632");
        assert_eq!(row.nombre, "María Quispe Rojas");
        assert_eq!(row.total_neto, 1816.5);
        assert!(row.trabajador.is_none());
    }

    #[test]
    fn test_fila_desde_calculo_sin_trabajador() {
        let resp = PlanillaMensualResponse {
            total_ingreso: 100.0,
            ..Default::default()
        };
        let row = PlanillaRow::from(&resp);
        assert_eq!(row.documento, "");
        assert_eq!(row.nombre, "");
        assert_eq!(row.total_ingreso, 100.0);
    }
}
