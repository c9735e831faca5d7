use contracts::domain::planilla::PlanillaPorDocumentoDto;
use contracts::domain::trabajador::TrabajadorResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::planilla_mensual::api;
use crate::domain::planilla_mensual::boleta_html::{generar_html_boleta, BoletaDatos};
use crate::shared::download::open_html_in_new_window;
use crate::shared::formatters::{format_money, nombre_mes};
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

/// Modal de boleta: busca la planilla del trabajador por documento y
/// permite abrir la versión imprimible en una ventana nueva.
#[component]
pub fn BoletaModal(
    anio: i32,
    mes: u32,
    documento: String,
    trabajador: Option<TrabajadorResponse>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();

    let (boleta_data, set_boleta_data) = signal(None::<PlanillaPorDocumentoDto>);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let documento_stored = StoredValue::new(documento);
    let trabajador_stored = StoredValue::new(trabajador);

    let cargar = move || {
        let documento = documento_stored.get_value();
        if documento.is_empty() {
            set_error.set(Some("No se ha proporcionado un documento válido.".into()));
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::buscar_boleta(&api_client, anio, mes, &documento).await {
                Ok(data) => set_boleta_data.set(Some(data)),
                Err(e) => {
                    set_error.set(Some(format!("Error al cargar la boleta: {}", e.message)))
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| cargar());

    let imprimir = move |_| {
        let Some(boleta) = boleta_data.get_untracked() else {
            return;
        };
        let documento = documento_stored.get_value();
        let trabajador = trabajador_stored.get_value();
        let datos = BoletaDatos {
            anio,
            mes,
            documento: &documento,
            boleta: &boleta,
            trabajador: trabajador.as_ref(),
        };
        let html = generar_html_boleta(&datos);
        if let Err(e) = open_html_in_new_window(&html) {
            log::warn!("No se pudo abrir la boleta: {}", e);
            notifier.error("No se pudo abrir la ventana de impresión");
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>
                        {format!("Boleta de Pago {}/{}", nombre_mes(mes), anio)}
                    </h2>
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                <div class="modal__body">
                    <Show when=move || is_loading.get()>
                        <div class="modal__loading">"Cargando boleta..."</div>
                    </Show>

                    {move || {
                        error
                            .get()
                            .map(|e| {
                                view! {
                                    <div class="alert alert--error">
                                        {e}
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| cargar()
                                        >
                                            "Reintentar"
                                        </button>
                                    </div>
                                }
                            })
                    }}

                    {move || {
                        boleta_data
                            .get()
                            .map(|b| {
                                view! {
                                    <div class="boleta-resumen">
                                        <p>
                                            <strong>"Trabajador: "</strong>
                                            {documento_stored.get_value()}
                                        </p>
                                        <p>
                                            <strong>"Días trabajados: "</strong>
                                            {b.ndias_trab}
                                            <strong>" | Horas: "</strong>
                                            {b.nhoras_normal}
                                        </p>
                                        <p>
                                            <strong>"Total Ingresos: "</strong>
                                            {format_money(b.planilla.total_ingreso)}
                                        </p>
                                        <p>
                                            <strong>"Total Descuentos: "</strong>
                                            {format_money(b.planilla.total_descuento)}
                                        </p>
                                        <p>
                                            <strong>"Neto a Pagar: "</strong>
                                            {format_money(b.planilla.total_neto_boleta)}
                                        </p>
                                        <p class="boleta-resumen__letras">
                                            {b.total_neto_boleta_cad.clone()}
                                        </p>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="modal__footer">
                    <button
                        class="btn btn--primary"
                        on:click=imprimir
                        disabled=move || boleta_data.get().is_none()
                    >
                        "Imprimir"
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
