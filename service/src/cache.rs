//! In-memory [`Resources`] cache definitions.

use tokio::sync::RwLock;

use crate::domain::{CheckIn, VacationRequest};

/// Client-held copy of server list data.
///
/// Each slot is replaced wholesale on refresh: entries are never merged
/// or patched locally, and the server-assigned order is preserved. The
/// two slots are disjoint, so independent refreshes cannot race each
/// other into an inconsistent state.
#[derive(Debug, Default)]
pub struct Resources {
    /// Last successfully fetched list of [`CheckIn`]s.
    checkins: RwLock<Vec<CheckIn>>,

    /// Last successfully fetched list of [`VacationRequest`]s.
    vacations: RwLock<Vec<VacationRequest>>,
}

impl Resources {
    /// Replaces the cached [`CheckIn`] list wholesale.
    pub async fn replace_checkins(&self, list: Vec<CheckIn>) {
        *self.checkins.write().await = list;
    }

    /// Replaces the cached [`VacationRequest`] list wholesale.
    pub async fn replace_vacations(&self, list: Vec<VacationRequest>) {
        *self.vacations.write().await = list;
    }

    /// Returns a snapshot of the cached [`CheckIn`] list.
    pub async fn checkins(&self) -> Vec<CheckIn> {
        self.checkins.read().await.clone()
    }

    /// Returns at most `limit` first entries of the cached [`CheckIn`]
    /// list.
    ///
    /// Truncation is display-only: the slot keeps the full fetched
    /// sequence.
    pub async fn recent_checkins(&self, limit: usize) -> Vec<CheckIn> {
        self.checkins
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Returns a snapshot of the cached [`VacationRequest`] list.
    pub async fn vacations(&self) -> Vec<VacationRequest> {
        self.vacations.read().await.clone()
    }

    /// Drops every cached list.
    pub async fn clear(&self) {
        *self.checkins.write().await = Vec::new();
        *self.vacations.write().await = Vec::new();
    }
}

#[cfg(test)]
mod spec {
    use crate::{domain::checkin::Status, testing};

    use super::Resources;

    #[tokio::test]
    async fn replaces_wholesale_and_keeps_order() {
        let cache = Resources::default();
        cache
            .replace_checkins(vec![
                testing::checkin("1", Status::Ok),
                testing::checkin("2", Status::Emergency),
            ])
            .await;

        // A refresh never merges: the old list is gone entirely.
        cache
            .replace_checkins(vec![testing::checkin("3", Status::Pending)])
            .await;

        let ids = cache
            .checkins()
            .await
            .into_iter()
            .map(|c| c.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["3"]);
    }

    #[tokio::test]
    async fn truncation_is_display_only() {
        let cache = Resources::default();
        cache
            .replace_checkins(
                (0..7)
                    .map(|i| testing::checkin(&i.to_string(), Status::Ok))
                    .collect(),
            )
            .await;

        assert_eq!(cache.recent_checkins(5).await.len(), 5);
        assert_eq!(cache.checkins().await.len(), 7);
    }
}
