//! Persistencia de la sesión en `localStorage`: el token como string plano
//! y el usuario serializado a JSON. Tolerante a storage no disponible.

use contracts::system::auth::User;
use web_sys::window;

use crate::shared::config::storage_keys;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(storage_keys::TOKEN, token);
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(storage_keys::TOKEN).ok()?
}

pub fn save_user(user: &User) {
    if let Some(storage) = get_local_storage() {
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(storage_keys::USER, &json);
            }
            Err(e) => log::warn!("No se pudo serializar el usuario: {}", e),
        }
    }
}

pub fn get_user() -> Option<User> {
    let json = get_local_storage()?.get_item(storage_keys::USER).ok()??;
    serde_json::from_str(&json).ok()
}

/// Borra token y usuario; se invoca en logout y ante un 401.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(storage_keys::TOKEN);
        let _ = storage.remove_item(storage_keys::USER);
    }
}
