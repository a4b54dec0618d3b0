//! Session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session is a plain
//! struct held in an `RwSignal` provided from `App`; it mirrors the token
//! and matric number into persisted storage via the `storage` module so a
//! reload can resume where the tab left off.
//!
//! LIFECYCLE
//! =========
//! Initialized from persisted storage at mount (token and matric number
//! only; the remaining fields stay empty until a fresh login), fully
//! populated by [`Session::login`], and fully cleared by
//! [`Session::logout`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage;

/// Access role carried by a session.
///
/// Serialized as the strings the auth service uses: `"student"`, `"admin"`,
/// and `""` for no role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Student account.
    Student,
    /// Administrator account.
    Admin,
    /// No role assigned; the state before login and after logout.
    #[default]
    #[serde(rename = "")]
    None,
}

impl Role {
    /// The wire string for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
            Self::None => "",
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            "" => Ok(Self::None),
            other => Err(SessionError::UnknownRole(other.to_owned())),
        }
    }
}

/// Validation failures raised by session-store mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A role string did not match any known role.
    #[error("unknown role {0:?}; expected \"student\", \"admin\", or \"\"")]
    UnknownRole(String),
    /// Login fields claimed a signed-in state without a usable token.
    #[error("login fields are marked signed-in but carry no session token")]
    MissingToken,
}

/// Complete field record accepted by [`Session::login`].
///
/// Callers build this from the auth service's payload; [`Session::login`]
/// rejects inconsistent records instead of populating partial state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub matric_no: String,
    pub name: String,
    pub description: String,
    pub role: Role,
    pub is_logged_in: bool,
    pub session_token: Option<String>,
}

impl LoginFields {
    fn validate(&self) -> Result<(), SessionError> {
        let has_token = self
            .session_token
            .as_deref()
            .is_some_and(|token| !token.is_empty());
        if self.is_logged_in && !has_token {
            return Err(SessionError::MissingToken);
        }
        Ok(())
    }
}

/// The in-memory session for the current tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// University registration (matric) number.
    pub matric_no: String,
    /// Display name; empty until login.
    pub name: String,
    /// Account description from the auth service; empty until login.
    pub description: String,
    /// Access role the guard's role rule compares against.
    pub role: Role,
    /// Whether a login action has populated this session in this tab.
    pub is_logged_in: bool,
    /// Session token mirrored from persisted storage.
    pub session_token: Option<String>,
}

impl Session {
    /// Build the startup session: token and matric number from persisted
    /// storage, everything else empty.
    #[must_use]
    pub fn from_storage() -> Self {
        let mut session = Self::default();
        session.refresh_from_storage();
        session
    }

    /// Re-read the session token and matric number from persisted storage.
    ///
    /// The remaining fields (name, description, role, signed-in flag) are
    /// left untouched; persisted storage does not carry them.
    pub fn refresh_from_storage(&mut self) {
        self.session_token = storage::get(storage::KEY_SESSION_TOKEN);
        self.matric_no = storage::get(storage::KEY_MATRIC_NO).unwrap_or_default();
        log::info!("session token refreshed from persisted storage");
    }

    /// Replace the whole session with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingToken`] for a record marked signed-in
    /// without a non-empty token; the session is left unchanged on error.
    pub fn login(&mut self, fields: LoginFields) -> Result<(), SessionError> {
        fields.validate()?;
        self.matric_no = fields.matric_no;
        self.name = fields.name;
        self.description = fields.description;
        self.role = fields.role;
        self.is_logged_in = fields.is_logged_in;
        self.session_token = fields.session_token;
        Ok(())
    }

    /// Clear the session: remove the persisted token (and the admin flag if
    /// present) and reset every in-memory field to its default.
    ///
    /// The persisted matric number is kept; the login form prefills from
    /// it on the next visit.
    pub fn logout(&mut self) {
        storage::remove(storage::KEY_SESSION_TOKEN);
        if storage::get(storage::KEY_IS_ADMIN).is_some() {
            storage::remove(storage::KEY_IS_ADMIN);
        }
        *self = Self::default();
    }
}
