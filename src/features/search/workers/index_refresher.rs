use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;

use crate::core::error::Result;
use crate::features::search::services::{IndexLoader, SharedKeywordIndex};

/// Background worker that rebuilds the keyword index on an interval.
///
/// A failed rebuild only logs; the previous snapshot stays in service until a
/// later cycle succeeds.
pub struct IndexRefresher {
    loader: IndexLoader,
    index: Arc<SharedKeywordIndex>,
    refresh_interval_secs: u64,
}

impl IndexRefresher {
    pub fn new(
        loader: IndexLoader,
        index: Arc<SharedKeywordIndex>,
        refresh_interval_secs: u64,
    ) -> Self {
        Self {
            loader,
            index,
            refresh_interval_secs,
        }
    }

    /// Run the refresher in a background loop
    pub async fn run(&self) {
        tracing::info!(
            "Starting keyword index refresher (every {}s)",
            self.refresh_interval_secs
        );

        let mut interval = interval(Duration::from_secs(self.refresh_interval_secs));
        // the initial build happens during startup; skip the immediate tick
        interval.tick().await;

        loop {
            interval.tick().await;

            if let Err(e) = self.refresh().await {
                tracing::error!(
                    "Keyword index refresh failed, keeping previous snapshot: {:?}",
                    e
                );
            }
        }
    }

    async fn refresh(&self) -> Result<()> {
        let index = self.loader.load().await?;
        tracing::info!(
            "Keyword index rebuilt: {} categories, {} keywords",
            index.category_count(),
            index.keyword_count()
        );
        self.index.store(index);
        Ok(())
    }
}
