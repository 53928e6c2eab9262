use contracts::system::auth::Session;
use web_sys::window;

const SESSION_KEY: &str = "icastar_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the persisted session. Unreadable data counts as signed out.
pub fn load_session() -> Option<Session> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("discarding unreadable session data: {}", e);
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
