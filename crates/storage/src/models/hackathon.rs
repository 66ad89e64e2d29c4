use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum HackathonStatus {
    Upcoming,
    Ongoing,
    Past,
}

impl HackathonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "Ongoing",
            Self::Past => "Past",
        }
    }

    pub fn all() -> &'static [HackathonStatus] {
        &[Self::Upcoming, Self::Ongoing, Self::Past]
    }
}

impl FromStr for HackathonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "ongoing" => Ok(Self::Ongoing),
            "past" => Ok(Self::Past),
            _ => Err(format!(
                "Unknown hackathon status: '{}'. Expected one of: upcoming, ongoing, past",
                s
            )),
        }
    }
}

impl fmt::Display for HackathonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: i64,
    pub title: String,
    pub organizer: String,
    pub theme: String,
    pub image: String,
    pub description: String,
    pub registration_start: NaiveDate,
    pub registration_end: NaiveDate,
    pub event_start: NaiveDate,
    pub event_end: NaiveDate,
    pub status: HackathonStatus,
    pub register_link: String,
    /// Target skill set for gap analysis. Treated as a set, duplicates tolerated.
    pub required_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("upcoming".parse::<HackathonStatus>().unwrap(), HackathonStatus::Upcoming);
        assert_eq!("Ongoing".parse::<HackathonStatus>().unwrap(), HackathonStatus::Ongoing);
        assert_eq!(" PAST ".parse::<HackathonStatus>().unwrap(), HackathonStatus::Past);
        assert!("cancelled".parse::<HackathonStatus>().is_err());
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in HackathonStatus::all() {
            assert_eq!(status.to_string().parse::<HackathonStatus>().unwrap(), *status);
        }
    }
}
