use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{AnalysisError, Result};

/// Teams with an analysis currently outstanding.
///
/// A second request for the same team is rejected with
/// [`AnalysisError::Busy`] until the first guard is dropped.
#[derive(Debug, Clone, Default)]
pub struct InFlightAnalyses {
    active: Arc<Mutex<HashSet<i64>>>,
}

impl InFlightAnalyses {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<i64>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn try_acquire(&self, team_id: i64) -> Result<InFlightGuard> {
        if !self.lock().insert(team_id) {
            tracing::warn!("Rejected analysis for team {}: one is already running", team_id);
            return Err(AnalysisError::Busy(team_id));
        }

        Ok(InFlightGuard {
            owner: self.clone(),
            team_id,
        })
    }

    pub fn is_active(&self, team_id: i64) -> bool {
        self.lock().contains(&team_id)
    }
}

/// Releases the team's slot when dropped, whether the analysis succeeded or not.
#[derive(Debug)]
pub struct InFlightGuard {
    owner: InFlightAnalyses,
    team_id: i64,
}

impl InFlightGuard {
    pub fn team_id(&self) -> i64 {
        self.team_id
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.owner.lock().remove(&self.team_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_busy() {
        let in_flight = InFlightAnalyses::new();

        let guard = in_flight.try_acquire(7).unwrap();
        assert_eq!(guard.team_id(), 7);
        assert!(in_flight.is_active(7));
        assert_eq!(in_flight.try_acquire(7).unwrap_err(), AnalysisError::Busy(7));
    }

    #[test]
    fn test_drop_releases_slot() {
        let in_flight = InFlightAnalyses::new();

        drop(in_flight.try_acquire(7).unwrap());

        assert!(!in_flight.is_active(7));
        assert!(in_flight.try_acquire(7).is_ok());
    }

    #[test]
    fn test_teams_are_independent() {
        let in_flight = InFlightAnalyses::new();

        let _first = in_flight.try_acquire(1).unwrap();
        let _second = in_flight.try_acquire(2).unwrap();

        assert!(in_flight.is_active(1));
        assert!(in_flight.is_active(2));
    }

    #[test]
    fn test_clones_share_state() {
        let in_flight = InFlightAnalyses::new();
        let shared = in_flight.clone();

        let _guard = in_flight.try_acquire(3).unwrap();
        assert!(shared.try_acquire(3).is_err());
    }
}
