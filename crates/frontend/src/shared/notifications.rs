//! Servicio de notificaciones (toasts) con autodescarte por duración.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast toast--success",
            Severity::Error => "toast toast--error",
            Severity::Warning => "toast toast--warning",
            Severity::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    notifications: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn list(&self) -> RwSignal<Vec<Notification>> {
        self.notifications
    }

    /// Publica un toast; con `duration_ms > 0` se autodescarta al vencer.
    pub fn show(&self, message: impl Into<String>, severity: Severity, duration_ms: u32) {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            duration_ms,
        };
        let id = notification.id;
        self.notifications.update(|list| list.push(notification));

        if duration_ms > 0 {
            let notifications = self.notifications;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                notifications.update(|list| list.retain(|n| n.id != id));
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success, 5000);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error, 7000);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, Severity::Warning, 6000);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info, 5000);
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| list.retain(|n| n.id != id));
    }

    pub fn clear(&self) {
        self.notifications.update(|list| list.clear());
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> NotificationService {
    use_context::<NotificationService>()
        .expect("NotificationService no provisto en el árbol de componentes")
}

/// Contenedor fijo que dibuja los toasts activos.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();
    let list = notifier.list();

    view! {
        <div class="toast-container">
            <For
                each=move || list.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.severity.css_class()>
                            <span class="toast__message">{n.message.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| notifier.remove(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
