//! [`Command`] for establishing a [`Session`].

use common::operations::Perform;
use derive_more::{Display, Error, From};
use secrecy::SecretBox;
use tracerr::Traced;

use crate::{
    domain::{user, Session},
    infra::{
        gateway::{self, Credentials},
        Gateway,
    },
    Service,
};

use super::Command;

/// [`Command`] for establishing a [`Session`] via the login endpoint.
///
/// On success the returned [`Session`] is also placed into the session
/// store, atomically replacing whatever was there. On failure the store
/// is left untouched.
#[derive(Debug)]
pub struct Login {
    /// [`Email`] to authenticate with.
    ///
    /// [`Email`]: user::Email
    pub email: user::Email,

    /// [`Password`] to authenticate with.
    ///
    /// [`Password`]: user::Password
    pub password: SecretBox<user::Password>,
}

impl<Gw> Command<Login> for Service<Gw>
where
    Gw: Gateway<
        Perform<Credentials>,
        Ok = Session,
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        Login { email, password }: Login,
    ) -> Result<Self::Ok, Self::Err> {
        let session = self
            .gateway()
            .execute(Perform(Credentials { email, password }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;

        self.session().set(session.clone()).await;

        Ok(session)
    }
}

/// Error of [`Login`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),
}
