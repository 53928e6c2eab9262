use crate::domain::a001_artist_profile::ui::details::{ArtistProfilePage, ProfileTab};
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

/// Query of the profile page: `?profile=<id>&tab=<key>`
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ProfileQuery {
    pub profile: Option<String>,
    pub tab: Option<String>,
}

impl ProfileQuery {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn initial_tab(&self) -> ProfileTab {
        self.tab
            .as_deref()
            .map(ProfileTab::from_key)
            .unwrap_or_default()
    }
}

fn current_query() -> ProfileQuery {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    ProfileQuery::parse(&search)
}

/// Opens the requested profile, or the signed-in artist's own one
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let query = current_query();
    let initial_tab = query.initial_tab();
    let requested = query.profile.filter(|id| !id.trim().is_empty());

    view! {
        {move || {
            let profile_id = requested.clone().or_else(|| {
                session.with(|s| s.own_profile_id().map(str::to_string))
            });
            match profile_id {
                Some(id) => view! {
                    <ArtistProfilePage id=id initial_tab=initial_tab />
                }.into_any(),
                None => view! {
                    <div class="empty-state">
                        <h3>"No profile selected"</h3>
                        <p>"Open an artist profile link or sign in as an artist."</p>
                    </div>
                }.into_any(),
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_query() {
        let query = ProfileQuery::parse("?profile=6f1c1d7e&tab=role");
        assert_eq!(query.profile.as_deref(), Some("6f1c1d7e"));
        assert_eq!(query.initial_tab(), ProfileTab::RoleDetails);
    }

    #[test]
    fn test_parse_empty_query() {
        let query = ProfileQuery::parse("");
        assert_eq!(query, ProfileQuery::default());
        assert_eq!(query.initial_tab(), ProfileTab::General);
    }

    #[test]
    fn test_unknown_tab_falls_back_to_general() {
        assert_eq!(ProfileQuery::parse("tab=billing").initial_tab(), ProfileTab::General);
    }
}
