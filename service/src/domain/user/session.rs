//! [`Session`] definitions.

use derive_more::{AsRef, Display, From, FromStr};
use serde::{Deserialize, Serialize};

use super::User;

/// User session, as returned by the login endpoint.
///
/// [`User`] and [`Token`] live and die together: there is no way to
/// hold one without the other, so a partial session cannot exist.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Session {
    /// [`User`] this [`Session`] belongs to.
    pub user: User,

    /// Bearer [`Token`] of this [`Session`].
    pub token: Token,
}

/// Access token of a [`Session`].
///
/// Opaque to the client: never decoded, never refreshed, only echoed
/// back as a `Authorization: Bearer` header.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, From, FromStr, Serialize,
)]
#[as_ref(str, String)]
pub struct Token(String);
