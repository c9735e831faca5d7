//! Widget de chat flotante.
//!
//! La sesión vive lo que vive el panel: se crea al abrirlo (con una espera
//! acotada) y se elimina best-effort al cerrarlo. Si la creación falla o
//! vence el plazo, el montaje queda degradado de forma permanente a una
//! respuesta estática de "no configurado". Los mensajes existen sólo en
//! memoria.

use std::sync::{Arc, Mutex};

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::chat::api;
use crate::shared::http::use_api;

const BOOTSTRAP_TIMEOUT_MS: u32 = 5_000;

const MENSAJE_BIENVENIDA: &str = "¡Hola! Soy tu asistente virtual. Puedo ayudarte con consultas \
     sobre planillas, beneficios y asistencias. ¿En qué puedo ayudarte?";
const MENSAJE_NO_CONFIGURADO: &str = "⚠️ El asistente virtual no está configurado correctamente. \
     Por favor verifica las credenciales en el backend.";
const MENSAJE_NO_DISPONIBLE: &str = "El asistente virtual no está disponible.";
const MENSAJE_ERROR_ENVIO: &str = "Error al comunicarse con el asistente.";

#[derive(Clone, Debug, PartialEq)]
struct ChatMessage {
    id: usize,
    text: String,
    is_user: bool,
    hora: String,
}

fn hora_actual() -> String {
    let ahora = js_sys::Date::new_0();
    format!("{:02}:{:02}", ahora.get_hours(), ahora.get_minutes())
}

/// Botón flotante que monta y desmonta el panel. Cada apertura es un
/// montaje nuevo, con su propia sesión.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let (abierto, set_abierto) = signal(false);

    view! {
        <div class="chat-widget">
            <Show when=move || abierto.get()>
                <ChatPanel on_close=Callback::new(move |_| set_abierto.set(false)) />
            </Show>
            <button
                class="chat-widget__toggle"
                title="Asistente virtual"
                on:click=move |_| set_abierto.update(|v| *v = !*v)
            >
                {move || if abierto.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}

#[component]
fn ChatPanel(on_close: Callback<()>) -> impl IntoView {
    let api_client = use_api();

    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let draft = RwSignal::new(String::new());
    let (is_initializing, set_is_initializing) = signal(true);
    let (is_configured, set_is_configured) = signal(false);
    let (is_sending, set_is_sending) = signal(false);
    let (session_id, set_session_id) = signal(None::<String>);

    let next_id = StoredValue::new(0usize);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // El teardown no puede leer señales ya descartadas; la sesión también
    // se guarda en un Arc compartido con on_cleanup.
    let session_for_cleanup: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

    let push_message = move |text: String, is_user: bool| {
        let id = next_id.get_value();
        next_id.set_value(id + 1);
        messages.update(|list| {
            list.push(ChatMessage {
                id,
                text,
                is_user,
                hora: hora_actual(),
            })
        });
    };

    // Autoscroll al fondo en cada mensaje nuevo.
    Effect::new(move |_| {
        let _ = messages.with(|m| m.len());
        if let Some(container) = messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // Bootstrap de sesión con espera acotada.
    {
        let session_for_cleanup = Arc::clone(&session_for_cleanup);
        Effect::new(move |_| {
            let session_for_cleanup = Arc::clone(&session_for_cleanup);
            spawn_local(async move {
                let creacion = Box::pin(api::create_session(&api_client));
                let plazo = Box::pin(TimeoutFuture::new(BOOTSTRAP_TIMEOUT_MS));

                match select(creacion, plazo).await {
                    Either::Left((Ok(respuesta), _)) => match respuesta.session_id {
                        Some(sid) if respuesta.success => {
                            if let Ok(mut guardado) = session_for_cleanup.lock() {
                                *guardado = Some(sid.clone());
                            }
                            set_session_id.set(Some(sid));
                            set_is_configured.set(true);
                            push_message(MENSAJE_BIENVENIDA.to_string(), false);
                        }
                        _ => {
                            push_message(MENSAJE_NO_CONFIGURADO.to_string(), false);
                        }
                    },
                    Either::Left((Err(e), _)) => {
                        log::warn!("No se pudo crear la sesión de chat: {}", e);
                        push_message(MENSAJE_NO_CONFIGURADO.to_string(), false);
                    }
                    Either::Right(_) => {
                        log::warn!("La creación de la sesión de chat excedió el plazo");
                        push_message(MENSAJE_NO_CONFIGURADO.to_string(), false);
                    }
                }
                set_is_initializing.set(false);
            });
        });
    }

    // Teardown: borrado best-effort de la sesión; errores sólo al log.
    {
        let session_for_cleanup = Arc::clone(&session_for_cleanup);
        on_cleanup(move || {
            let pendiente = session_for_cleanup.lock().ok().and_then(|mut s| s.take());
            if let Some(sid) = pendiente {
                spawn_local(async move {
                    if let Err(e) = api::delete_session(&sid).await {
                        log::warn!("No se pudo eliminar la sesión de chat: {}", e);
                    }
                });
            }
        });
    }

    let enviar = move || {
        let texto = draft.get_untracked().trim().to_string();
        if texto.is_empty() || is_sending.get_untracked() {
            return;
        }
        draft.set(String::new());

        // El mensaje del usuario se muestra de inmediato.
        push_message(texto.clone(), true);

        let sid = session_id.get_untracked();
        if !is_configured.get_untracked() || sid.is_none() {
            push_message(MENSAJE_NO_DISPONIBLE.to_string(), false);
            return;
        }
        let sid = sid.unwrap_or_default();

        set_is_sending.set(true);
        spawn_local(async move {
            match api::send_message(&api_client, &texto, &sid).await {
                Ok(respuesta) if respuesta.success => {
                    push_message(respuesta.response, false);
                }
                Ok(respuesta) => {
                    // El backend respondió pero se declaró mal configurado.
                    set_is_configured.set(false);
                    push_message(
                        respuesta
                            .error_message
                            .unwrap_or_else(|| "Error al procesar el mensaje".to_string()),
                        false,
                    );
                }
                Err(_) => {
                    push_message(MENSAJE_ERROR_ENVIO.to_string(), false);
                }
            }
            set_is_sending.set(false);
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            enviar();
        }
    };

    let limpiar = move |_| {
        messages.set(Vec::new());
        if is_configured.get_untracked() && session_id.get_untracked().is_some() {
            push_message(MENSAJE_BIENVENIDA.to_string(), false);
        } else {
            push_message(MENSAJE_NO_CONFIGURADO.to_string(), false);
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <span>"Asistente virtual"</span>
                <div>
                    <button class="chat-panel__action" on:click=limpiar title="Limpiar">
                        "⟳"
                    </button>
                    <button
                        class="chat-panel__action"
                        on:click=move |_| on_close.run(())
                        title="Cerrar"
                    >
                        "×"
                    </button>
                </div>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                <Show when=move || is_initializing.get()>
                    <div class="chat-message chat-message--bot">"Conectando..."</div>
                </Show>
                <For
                    each=move || messages.get()
                    key=|m| m.id
                    children=move |m| {
                        let clase = if m.is_user {
                            "chat-message chat-message--user"
                        } else {
                            "chat-message chat-message--bot"
                        };
                        view! {
                            <div class=clase>
                                <span class="chat-message__text">{m.text.clone()}</span>
                                <span class="chat-message__hora">{m.hora.clone()}</span>
                            </div>
                        }
                    }
                />
                <Show when=move || is_sending.get()>
                    <div class="chat-message chat-message--bot">"Escribiendo..."</div>
                </Show>
            </div>

            <div class="chat-panel__input">
                <textarea
                    placeholder="Escriba su consulta..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || is_initializing.get()
                ></textarea>
                <button
                    class="btn btn--primary"
                    on:click=move |_| enviar()
                    disabled=move || is_initializing.get() || is_sending.get()
                >
                    "Enviar"
                </button>
            </div>
        </div>
    }
}
