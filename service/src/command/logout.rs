//! [`Command`] for dropping the current [`Session`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Session;
use crate::Service;

use super::Command;

/// [`Command`] dropping the current [`Session`] and every cached list.
///
/// Purely local and always succeeds: the server is not notified, so a
/// logout works even when the API is unreachable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logout;

impl<Gw> Command<Logout> for Service<Gw> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: Logout) -> Result<Self::Ok, Self::Err> {
        self.session().clear().await;
        self.cache().clear().await;

        Ok(())
    }
}
