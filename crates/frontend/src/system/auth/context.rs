use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage;

/// Reads the persisted session once and provides it to the component tree.
/// Views below take the session from context instead of storage.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = RwSignal::new(storage::load_session().unwrap_or_default());

    if let Some(user) = session.with_untracked(|s| s.user.clone()) {
        log::info!("session restored for {} ({})", user.email, user.role.display_name());
    } else {
        log::debug!("no stored session; browsing anonymously");
    }

    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("SessionProvider not found in component tree")
}

/// Drop the session locally
pub fn clear_session() {
    storage::clear_session();
    use_session().set(Session::default());
}
