//! Roadmap providers.
//!
//! The provider trait is the seam where a real backend call would sit.
//! [`SimulatedProvider`] stands in for it with a fixed delay and a static
//! curriculum lookup.

use async_trait::async_trait;
use skillpath_core::{Milestone, RequestId, SkillLevel};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::curriculum::milestones_for;

/// Simulated generation latency.
pub const GENERATION_DELAY: Duration = Duration::from_secs(2);

/// Roadmap generation failure.
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    /// A newer generation request started while this one was in flight;
    /// its result has been discarded so it cannot overwrite newer state.
    #[error("generation request {request} superseded by a newer request")]
    Superseded {
        /// The discarded request
        request: RequestId,
    },
}

/// Produces an ordered milestone sequence for a (skill, level) pair.
#[async_trait]
pub trait RoadmapProvider: Send + Sync {
    /// Generate a roadmap. `level` is part of the call contract but the
    /// current providers do not vary output by it.
    async fn generate(
        &self,
        skill: &str,
        level: SkillLevel,
    ) -> Result<Vec<Milestone>, RoadmapError>;
}

/// Provider that simulates backend generation with a fixed suspension.
///
/// Each call takes a fresh request id and records it as the latest. When
/// the delay elapses, a call whose id is no longer the latest returns
/// [`RoadmapError::Superseded`] instead of its stale roadmap.
pub struct SimulatedProvider {
    delay: Duration,
    latest: Mutex<Option<RequestId>>,
}

impl SimulatedProvider {
    /// Provider with the standard 2-second delay.
    pub fn new() -> Self {
        Self::with_delay(GENERATION_DELAY)
    }

    /// Provider with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            latest: Mutex::new(None),
        }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoadmapProvider for SimulatedProvider {
    async fn generate(
        &self,
        skill: &str,
        level: SkillLevel,
    ) -> Result<Vec<Milestone>, RoadmapError> {
        let request = RequestId::new();
        *self.latest.lock().await = Some(request);
        debug!(%request, skill, "generating roadmap");

        tokio::time::sleep(self.delay).await;

        if *self.latest.lock().await != Some(request) {
            debug!(%request, "discarding superseded roadmap");
            return Err(RoadmapError::Superseded { request });
        }

        let milestones = milestones_for(skill, level);
        info!(skill, milestones = milestones.len(), "roadmap generated");
        Ok(milestones)
    }
}
