//! [`Command`] for submitting a [`VacationRequest`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{vacation, VacationRequest},
    infra::{
        gateway::{self, Authorized},
        Gateway,
    },
    Service,
};

use super::{Command, RefreshResources};

/// [`Command`] submitting a vacation-request [`Draft`].
///
/// The [`Draft`] is validated for presence of every field before any
/// network traffic happens; a [`Draft`] failing validation never
/// reaches the server. After a successful submission both resource
/// lists are re-fetched, and the server-created [`VacationRequest`]
/// (with its assigned ID and `pending` status) is returned.
///
/// [`Draft`]: vacation::Draft
#[derive(Clone, Debug)]
pub struct SubmitVacationRequest {
    /// [`Draft`] to submit.
    ///
    /// [`Draft`]: vacation::Draft
    pub draft: vacation::Draft,
}

impl<Gw> Command<SubmitVacationRequest> for Service<Gw>
where
    Gw: Gateway<
        Insert<Authorized<vacation::Draft>>,
        Ok = VacationRequest,
        Err = Traced<gateway::Error>,
    >,
    Self: Command<RefreshResources, Ok = (), Err = Traced<gateway::Error>>,
{
    type Ok = VacationRequest;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        SubmitVacationRequest { draft }: SubmitVacationRequest,
    ) -> Result<Self::Ok, Self::Err> {
        draft
            .validate()
            .map_err(tracerr::from_and_wrap!(=> ExecutionError))?;

        let auth = self.session().token().await;
        let created = self
            .gateway()
            .execute(Insert(Authorized {
                auth,
                payload: draft,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;

        self.execute(RefreshResources)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;

        Ok(created)
    }
}

/// Error of [`SubmitVacationRequest`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Draft`] is missing required fields.
    ///
    /// [`Draft`]: vacation::Draft
    #[display("invalid `Draft`: {_0}")]
    Validation(vacation::InvalidDraft),

    /// [`Gateway`] error.
    #[display("`Gateway` operation failed: {_0}")]
    Gateway(gateway::Error),
}
