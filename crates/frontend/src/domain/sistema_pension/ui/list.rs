use contracts::domain::sistema_pension::SistemaPensionDto;
use contracts::shared::{EstadoFilter, PageResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::sistema_pension::api;
use crate::shared::components::estado_badge::EstadoBadge;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::pagination;
use crate::shared::http::use_api;
use crate::shared::notifications::use_notifier;

#[derive(Clone, Debug)]
struct SistemaPensionListState {
    estado: EstadoFilter,
    texto: String,
    page: i64,
    size: i64,
    rows: Vec<SistemaPensionDto>,
    total_elements: i64,
    total_pages: i64,
}

impl Default for SistemaPensionListState {
    fn default() -> Self {
        Self {
            estado: EstadoFilter::Todos,
            texto: String::new(),
            page: 0,
            size: pagination::DEFAULT_SIZE,
            rows: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

#[component]
pub fn SistemaPensionList() -> impl IntoView {
    let api_client = use_api();
    let notifier = use_notifier();
    let state = RwSignal::new(SistemaPensionListState::default());
    let (loading, set_loading) = signal(false);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            let (estado, texto, page, size) =
                state.with_untracked(|s| (s.estado, s.texto.clone(), s.page, s.size));
            let data = api::listar(&api_client, estado, &texto, page, size)
                .await
                .unwrap_or_else(|_| PageResponse::empty(page, size));
            state.update(|s| {
                s.rows = data.content;
                s.total_elements = data.total_elements;
                s.total_pages = data.total_pages;
            });
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let on_estado_change = move |ev: leptos::ev::Event| {
        let estado = EstadoFilter::from_param(&event_target_value(&ev));
        state.update(|s| {
            s.estado = estado;
            s.page = 0;
        });
        load();
    };

    let on_texto_change = move |ev: leptos::ev::Event| {
        let texto = event_target_value(&ev);
        state.update(|s| {
            s.texto = texto;
            s.page = 0;
        });
        load();
    };

    let go_to_page = move |page: i64| {
        state.update(|s| s.page = page);
        load();
    };

    let change_page_size = move |size: i64| {
        state.update(|s| {
            s.size = size;
            s.page = 0;
        });
        load();
    };

    let toggle_estado = move |id: i64| {
        spawn_local(async move {
            if api::cambiar_estado(&api_client, id).await.is_ok() {
                notifier.success("Estado cambiado exitosamente");
                load();
            }
        });
    };

    view! {
        <PageFrame page_id="sistema-pension--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sistemas de Pensión"</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.total_elements.to_string())}
                    </span>
                </div>
                <div class="page__header-right">
                    <A href="/sistema-pension/create">
                        <span class="btn btn--primary">"Nuevo Sistema de Pensión"</span>
                    </A>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel__left">
                        <label>"Estado:"</label>
                        <select on:change=on_estado_change>
                            <option value="TODOS">"Todos"</option>
                            <option value="ACTIVO">"Activo"</option>
                            <option value="INACTIVO">"Inactivo"</option>
                        </select>

                        <label>"Buscar:"</label>
                        <input
                            type="text"
                            placeholder="Nombre del sistema..."
                            prop:value=move || state.with(|s| s.texto.clone())
                            on:input=on_texto_change
                        />
                    </div>
                    <div class="filter-panel__right">
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_elements=Signal::derive(move || state.with(|s| s.total_elements))
                            page_size=Signal::derive(move || state.with(|s| s.size))
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    </div>
                </div>

                <Show when=move || loading.get()>
                    <div class="table-loading">"Cargando..."</div>
                </Show>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Aporte %"</TableHeaderCell>
                                <TableHeaderCell>"Comisión %"</TableHeaderCell>
                                <TableHeaderCell>"Prima %"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows.clone())
                                key=|s| s.id_sistema_pension.unwrap_or_default()
                                children=move |sistema| {
                                    let id = sistema.id_sistema_pension.unwrap_or_default();
                                    let activo = sistema.activo;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {sistema.nombre.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("{:.2}", sistema.aporte)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("{:.2}", sistema.comision)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("{:.2}", sistema.prima)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <EstadoBadge activo=activo />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__actions">
                                                        <A href=format!("/sistema-pension/view/{}", id)>
                                                            <span class="btn btn--small">"Ver"</span>
                                                        </A>
                                                        <A href=format!("/sistema-pension/edit/{}", id)>
                                                            <span class="btn btn--small">"Editar"</span>
                                                        </A>
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| toggle_estado(id)
                                                        >
                                                            {if activo { "Desactivar" } else { "Activar" }}
                                                        </button>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || {
                        !loading.get() && state.with(|s| s.rows.is_empty())
                    }>
                        <div class="table-empty">"No se encontraron sistemas de pensión"</div>
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
