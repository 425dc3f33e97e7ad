//! [`Query`] collection related to [`CheckIn`]s.

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::CheckIn,
    infra::{gateway, Gateway},
    Service,
};

use super::{Fallback, Query};

/// [`Query`] fetching the list of [`CheckIn`]s and replacing the cache
/// slot with the result, wholesale.
#[derive(Clone, Copy, Debug)]
pub struct List {
    /// Policy applied if the fetch fails.
    pub fallback: Fallback,
}

impl<Gw> Query<List> for Service<Gw>
where
    Gw: Gateway<
        Select<By<Vec<CheckIn>, gateway::Auth>>,
        Ok = Vec<CheckIn>,
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = Vec<CheckIn>;
    type Err = Traced<gateway::Error>;

    async fn execute(
        &self,
        List { fallback }: List,
    ) -> Result<Self::Ok, Self::Err> {
        let auth = self.session().token().await;
        let list = match self.gateway().execute(Select(By::new(auth))).await {
            Ok(list) => list,
            Err(e) if fallback == Fallback::EmptyList => {
                log::warn!(
                    "failed to fetch check-ins, \
                     degrading to an empty list: {e}",
                );
                Vec::new()
            }
            Err(e) => return Err(e).map_err(tracerr::wrap!()),
        };
        self.cache().replace_checkins(list.clone()).await;
        Ok(list)
    }
}
