use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::HackathonStatus;

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct HackathonFilter {
    /// One of `upcoming`, `ongoing`, `past` (case-insensitive)
    pub status: Option<String>,
}

impl HackathonFilter {
    pub fn status(&self) -> Result<Option<HackathonStatus>, String> {
        self.status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        let filter = HackathonFilter {
            status: Some("ONGOING".to_string()),
        };
        assert_eq!(filter.status(), Ok(Some(HackathonStatus::Ongoing)));

        assert_eq!(HackathonFilter::default().status(), Ok(None));

        let bad = HackathonFilter {
            status: Some("someday".to_string()),
        };
        assert!(bad.status().is_err());
    }
}
