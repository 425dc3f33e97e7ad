//! [`User`] definitions.

pub mod session;

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr};
use secrecy::{zeroize::Zeroize, CloneableSecret};
use serde::{Deserialize, Serialize};

pub use self::session::Session;

/// Platform user, as reported by the login endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Username`] of this [`User`].
    pub username: Username,

    /// [`Role`] of this [`User`].
    pub role: Role,
}

/// ID of a [`User`].
///
/// Opaque and server-assigned; the client never mints one.
#[derive(
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    PartialEq,
    Serialize,
)]
pub struct Id(String);

/// Name of a [`User`], displayed in greetings.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Username(String);

define_kind! {
    #[doc = "Role of a `User`, driving UI gating."]
    enum Role {
        #[doc = "Administrator with access to the admin dashboard."]
        #[text = "Administrator"]
        Admin,

        #[doc = "Regular field user."]
        #[text = "Standard"]
        Standard,
    }
}

/// Email address a [`User`] logs in with.
///
/// Only presence is checked client-side; the server owns format
/// validation ([`login`] calls are never pre-validated beyond that).
///
/// [`login`]: crate::command::Login
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is non-empty.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        (!address.is_empty()).then_some(Self(address))
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("empty `Email`")
    }
}

/// Password of a [`User`].
#[derive(AsRef, Clone, Debug, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`] if the given `password` is non-empty.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        (!password.is_empty()).then_some(Self(password))
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("empty `Password`")
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod spec {
    use super::{Email, Password, Role, User};

    #[test]
    fn role_is_snake_case_on_the_wire() {
        assert_eq!(serde_json::json!(Role::Admin), serde_json::json!("admin"));
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("standard".parse::<Role>().unwrap(), Role::Standard);
        assert!("ADMIN".parse::<Role>().is_err());
    }

    #[test]
    fn user_deserializes_from_login_payload() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "a3f1",
            "username": "Admin",
            "role": "admin",
        }))
        .unwrap();

        assert_eq!(user.username.to_string(), "Admin");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn credentials_require_presence_only() {
        assert!(Email::new("").is_none());
        assert!(Password::new("").is_none());

        // Format is server-owned: anything non-empty passes.
        assert!(Email::new("not-an-email").is_some());
        assert!(Email::new("admin@test.de").is_some());
        assert!(Password::new("admin123").is_some());
    }
}
