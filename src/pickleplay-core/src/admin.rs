use std::{collections::HashMap, time::Duration};

use serde::Deserialize;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, instrument};

use crate::{
    AdminCourt, AdminCourtsFilter, CoreResult, CourtDraft, CourtId, CourtServicePort,
    CourtStatistics, CourtStatus, RequestId, RequestSequence, domain::require_reason,
    error::error::InvalidTransitionSnafu,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AdminSettings {
    #[serde(with = "humantime_serde")]
    pub cache_ttl: Duration,
    #[serde(with = "humantime_serde")]
    pub search_debounce: Duration,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5 * 60),
            search_debounce: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminLoad {
    Loaded {
        courts: Vec<AdminCourt>,
        /// Served from the cache without calling the court service.
        cached: bool,
    },
    /// A newer request was issued before this one completed.
    Stale,
}

#[derive(Debug)]
struct CacheEntry {
    courts: Vec<AdminCourt>,
    fetched_at: Instant,
}

/// Cached listings keyed by filter. `generation` is bumped on every invalidation so a
/// fetch that started before a mutation is never written back.
#[derive(Debug, Default)]
struct Cache {
    entries: HashMap<String, CacheEntry>,
    generation: u64,
}

/// Court moderation on top of the external court service.
///
/// Listings are cached per filter for `cache_ttl` and only the result of the latest
/// request is handed back, older ones resolve to [`AdminLoad::Stale`].
/// Every mutation invalidates the whole cache.
#[derive(Debug)]
pub struct CourtAdmin<P> {
    port: P,
    settings: AdminSettings,
    cache: Mutex<Cache>,
    sequence: RequestSequence,
}

impl<P: CourtServicePort> CourtAdmin<P> {
    pub fn new(port: P, settings: AdminSettings) -> Self {
        Self {
            port,
            settings,
            cache: Default::default(),
            sequence: RequestSequence::new(),
        }
    }

    #[instrument(skip(self))]
    pub async fn courts(&self, filters: &AdminCourtsFilter) -> AdminLoad {
        let id = self.sequence.begin();
        self.load(id, filters).await
    }

    /// Debounced variant of [`CourtAdmin::courts`] for search-as-you-type.
    #[instrument(skip(self))]
    pub async fn search(&self, filters: &AdminCourtsFilter) -> AdminLoad {
        let id = self.sequence.begin();
        tokio::time::sleep(self.settings.search_debounce).await;

        if !self.sequence.is_latest(id) {
            return AdminLoad::Stale;
        }
        self.load(id, filters).await
    }

    pub async fn statistics(&self) -> CoreResult<CourtStatistics> {
        self.port.get_statistics().await
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: &CourtId, approver_id: &str) -> CoreResult<()> {
        self.check_transition(id, CourtStatus::Approved).await?;
        self.port.approve_court(id, approver_id).await?;
        self.invalidate().await;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: &CourtId, reason: &str) -> CoreResult<()> {
        let reason = require_reason(reason, CourtStatus::Rejected)?;
        self.check_transition(id, CourtStatus::Rejected).await?;
        self.port.reject_court(id, reason).await?;
        self.invalidate().await;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn suspend(&self, id: &CourtId, reason: &str) -> CoreResult<()> {
        let reason = require_reason(reason, CourtStatus::Suspended)?;
        self.check_transition(id, CourtStatus::Suspended).await?;
        self.port.suspend_court(id, reason).await?;
        self.invalidate().await;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &CourtId) -> CoreResult<()> {
        self.port.delete_court(id).await?;
        self.invalidate().await;
        Ok(())
    }

    #[instrument(skip_all, fields(name = %draft.name))]
    pub async fn create(&self, draft: &CourtDraft) -> CoreResult<AdminCourt> {
        draft.validate()?;
        let court = self.port.create_court(draft).await?;
        self.invalidate().await;
        Ok(court)
    }

    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        cache.entries.clear();
        cache.generation += 1;
    }

    async fn load(&self, id: RequestId, filters: &AdminCourtsFilter) -> AdminLoad {
        let key = filters.cache_key();

        let generation = match self.cached(&key).await {
            Ok(courts) => return self.finish(id, courts, true),
            Err(generation) => generation,
        };

        let courts = match self.port.get_courts(filters).await {
            Ok(courts) => {
                let mut cache = self.cache.lock().await;
                if cache.generation == generation {
                    cache.entries.insert(
                        key,
                        CacheEntry {
                            courts: courts.clone(),
                            fetched_at: Instant::now(),
                        },
                    );
                }
                courts
            }
            Err(e) => {
                error!("failed to fetch courts: {e:?}");
                vec![]
            }
        };

        self.finish(id, courts, false)
    }

    fn finish(&self, id: RequestId, courts: Vec<AdminCourt>, cached: bool) -> AdminLoad {
        self.sequence
            .finish(id, AdminLoad::Loaded { courts, cached })
            .unwrap_or(AdminLoad::Stale)
    }

    /// Returns the live entry for `key`, or the current cache generation on a miss.
    async fn cached(&self, key: &str) -> Result<Vec<AdminCourt>, u64> {
        let mut cache = self.cache.lock().await;
        if let Some(entry) = cache.entries.get(key) {
            if entry.fetched_at.elapsed() < self.settings.cache_ttl {
                return Ok(entry.courts.clone());
            }
            cache.entries.remove(key);
        }
        Err(cache.generation)
    }

    /// Courts that are not in any cached listing are left for the service to judge.
    async fn check_transition(&self, id: &CourtId, to: CourtStatus) -> CoreResult<()> {
        let cache = self.cache.lock().await;
        let from = cache
            .entries
            .values()
            .flat_map(|e| &e.courts)
            .find(|c| c.id() == id)
            .map(|c| c.status);

        match from {
            Some(from) if !from.can_transition_to(to) => InvalidTransitionSnafu {
                id: id.clone(),
                from,
                to,
            }
            .fail(),
            _ => Ok(()),
        }
    }
}
