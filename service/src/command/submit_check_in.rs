//! [`Command`] for submitting a [`CheckIn`].

use common::operations::Insert;
use tracerr::Traced;

use crate::{
    domain::{checkin, CheckIn},
    infra::{
        gateway::{self, Authorized},
        Gateway,
    },
    Service,
};

use super::{Command, RefreshResources};

/// [`Command`] reporting the current duty [`Status`] of the logged-in
/// user.
///
/// The message and the timestamp are derived client-side: the message
/// is the human-readable text of the [`Status`], and the timestamp is
/// taken at execution time. Both resource lists are re-fetched after a
/// successful submission, so the new entry appears without a manual
/// refresh; a failed submission leaves the caches untouched.
///
/// [`Status`]: checkin::Status
#[derive(Clone, Copy, Debug)]
pub struct SubmitCheckIn {
    /// [`Status`] to report.
    ///
    /// [`Status`]: checkin::Status
    pub status: checkin::Status,
}

impl<Gw> Command<SubmitCheckIn> for Service<Gw>
where
    Gw: Gateway<
        Insert<Authorized<checkin::Draft>>,
        Ok = CheckIn,
        Err = Traced<gateway::Error>,
    >,
    Self: Command<RefreshResources, Ok = (), Err = Traced<gateway::Error>>,
{
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        SubmitCheckIn { status }: SubmitCheckIn,
    ) -> Result<Self::Ok, Self::Err> {
        let auth = self.session().token().await;
        _ = self
            .gateway()
            .execute(Insert(Authorized {
                auth,
                payload: checkin::Draft::now(status),
            }))
            .await
            .map_err(tracerr::wrap!())?;

        self.execute(RefreshResources)
            .await
            .map_err(tracerr::wrap!())
    }
}
