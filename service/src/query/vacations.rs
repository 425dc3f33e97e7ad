//! [`Query`] collection related to [`VacationRequest`]s.

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::VacationRequest,
    infra::{gateway, Gateway},
    Service,
};

use super::{Fallback, Query};

/// [`Query`] fetching the list of [`VacationRequest`]s and replacing
/// the cache slot with the result, wholesale.
#[derive(Clone, Copy, Debug)]
pub struct List {
    /// Policy applied if the fetch fails.
    pub fallback: Fallback,
}

impl<Gw> Query<List> for Service<Gw>
where
    Gw: Gateway<
        Select<By<Vec<VacationRequest>, gateway::Auth>>,
        Ok = Vec<VacationRequest>,
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = Vec<VacationRequest>;
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
                    "failed to fetch vacation requests, \
                     degrading to an empty list: {e}",
                );
                Vec::new()
            }
            Err(e) => return Err(e).map_err(tracerr::wrap!()),
        };
        self.cache().replace_vacations(list.clone()).await;
        Ok(list)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        query::Fallback,
        testing::{self, Mock},
        Query as _, Service,
    };

    use super::List;

    #[tokio::test]
    async fn http_500_degrades_to_the_empty_state() {
        let mock = Mock::default();
        mock.fail_vacations(testing::rejected(500));
        let service = Service::new(mock);

        // The screen renders "no vacation requests", not an error.
        let list = service
            .execute(List {
                fallback: Fallback::EmptyList,
            })
            .await
            .unwrap();
        assert!(list.is_empty());
        assert!(service.cache().vacations().await.is_empty());
    }

    #[tokio::test]
    async fn success_replaces_the_cache_slot() {
        let mock = Mock::default();
        mock.respond_vacations(vec![testing::vacation(
            "7",
            "2024-01-01",
            "2024-01-10",
        )]);
        let service = Service::new(mock);

        let list = service
            .execute(List {
                fallback: Fallback::Propagate,
            })
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(service.cache().vacations().await.len(), 1);
    }
}
