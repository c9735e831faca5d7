use contracts::system::auth::User;
use leptos::prelude::*;

use super::storage;

/// Estado de sesión publicado a toda la aplicación.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    /// Reconstruye la sesión desde el storage del navegador al arrancar.
    /// Sin token persistido la aplicación arranca desautenticada.
    pub fn restore() -> Self {
        let state = match (storage::get_token(), storage::get_user()) {
            (Some(token), Some(user)) => AuthState {
                token: Some(token),
                user: Some(user),
            },
            _ => AuthState::default(),
        };
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.token.is_some())
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Persiste y publica una sesión nueva (post-login).
    pub fn set_session(&self, token: String, user: User) {
        storage::save_token(&token);
        storage::save_user(&user);
        self.state.set(AuthState {
            token: Some(token),
            user: Some(user),
        });
    }

    /// Limpia storage y estado; las rutas protegidas reaccionan solas.
    pub fn clear(&self) {
        storage::clear_session();
        self.state.set(AuthState::default());
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext no provisto en el árbol de componentes")
}
