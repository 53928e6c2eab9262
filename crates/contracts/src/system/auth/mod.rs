//! Session context threaded explicitly through the view layer.
//!
//! The UI reads persisted session data once and hands a [`Session`] down;
//! nothing below that point looks the role up from ambient storage.

use crate::domain::a001_artist_profile::aggregate::{ArtistProfile, ArtistProfileId};
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Artist,
    Recruiter,
    CastingDirector,
    Admin,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Artist => "Artist",
            UserRole::Recruiter => "Recruiter",
            UserRole::CastingDirector => "Casting Director",
            UserRole::Admin => "Administrator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    /// Profile owned by this user, set for artists only
    #[serde(default)]
    pub artist_profile_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            access_token: Some(access_token.into()),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Profile to open when no explicit one is requested
    pub fn own_profile_id(&self) -> Option<&str> {
        self.user.as_ref()?.artist_profile_id.as_deref()
    }

    /// Artists edit their own profile; admins edit any profile. Requires
    /// a token.
    pub fn can_edit_profile(&self, profile: &ArtistProfile) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let Some(user) = self.user.as_ref() else {
            return false;
        };
        match user.role {
            UserRole::Admin => true,
            UserRole::Artist => user
                .artist_profile_id
                .as_deref()
                .and_then(|own| ArtistProfileId::from_string(own).ok())
                .is_some_and(|own| own == profile.id),
            UserRole::Recruiter | UserRole::CastingDirector => false,
        }
    }

    pub fn bearer_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}
