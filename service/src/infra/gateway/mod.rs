//! [`Gateway`]-related implementations.

pub mod http;

use derive_more::{Display, Error as StdError, From};
use secrecy::SecretBox;

use crate::domain::user::{self, session};

pub use self::http::Http;

/// Remote API operation.
///
/// Every implementation is a single request/response cycle: no retries,
/// no per-call timeout overrides. Each retry is a manual repeat of the
/// same operation.
pub use common::Handler as Gateway;

/// Bearer credential attached to an outgoing API call, when present.
///
/// When [`None`], the call is sent unauthenticated; the server is
/// expected to reject it, the client does not pre-validate.
pub type Auth = Option<session::Token>;

/// Payload of an API call together with its bearer credential.
#[derive(Clone, Debug)]
pub struct Authorized<T> {
    /// Bearer credential of the call.
    pub auth: Auth,

    /// Payload of the call.
    pub payload: T,
}

/// Credentials of the login endpoint.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// [`Email`] to authenticate with.
    ///
    /// [`Email`]: user::Email
    pub email: user::Email,

    /// [`Password`] to authenticate with.
    ///
    /// [`Password`]: user::Password
    pub password: SecretBox<user::Password>,
}

/// [`Gateway`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// The call never completed: connection, timeout or decoding
    /// failure.
    #[display("transport failure: {_0}")]
    Transport(reqwest::Error),

    /// Server answered with a non-success status.
    #[display(
        "rejected with `{status}` status: {}",
        detail.as_deref().unwrap_or("no detail")
    )]
    #[from(ignore)]
    Rejected {
        /// HTTP status of the response.
        status: reqwest::StatusCode,

        /// Server-provided reason, if any.
        #[error(not(source))]
        detail: Option<String>,
    },
}
