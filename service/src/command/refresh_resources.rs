//! [`Command`] for refreshing every cached resource list.

use tracerr::Traced;

use crate::{
    domain::{CheckIn, VacationRequest},
    infra::gateway,
    query::{checkins, vacations, Fallback},
    Query, Service,
};

use super::Command;

/// [`Command`] re-fetching both resource lists and replacing the cache
/// slots with the results.
///
/// The two fetches run concurrently and degrade independently: a
/// failing one empties only its own slot and never blocks the other.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefreshResources;

impl<Gw> Command<RefreshResources> for Service<Gw>
where
    Self: Query<
            checkins::List,
            Ok = Vec<CheckIn>,
            Err = Traced<gateway::Error>,
        > + Query<
            vacations::List,
            Ok = Vec<VacationRequest>,
            Err = Traced<gateway::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<gateway::Error>;

    async fn execute(&self, _: RefreshResources) -> Result<Self::Ok, Self::Err> {
        let (checkins, vacations) = futures::join!(
            self.execute(checkins::List {
                fallback: Fallback::EmptyList,
            }),
            self.execute(vacations::List {
                fallback: Fallback::EmptyList,
            }),
        );
        _ = checkins.map_err(tracerr::wrap!())?;
        _ = vacations.map_err(tracerr::wrap!())?;

        Ok(())
    }
}
