use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

const DEFAULT_NAME: &str = "New Hacker";
const DEFAULT_COLLEGE: &str = "Code University";
const DEFAULT_EMAIL: &str = "hacker@code.edu";
const DEFAULT_SKILLS: &str = "React,Node.js";
const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/150?u=new-hacker";

/// Request payload for the signup form. Blank fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub college: Option<String>,
    pub email: Option<String>,
    /// Comma-separated skill list, e.g. `"React, Node.js"`.
    pub skills: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl SignupRequest {
    /// Converts using the current time in milliseconds as the user id.
    pub fn into_new_user(self) -> User {
        self.into_user(chrono::Utc::now().timestamp_millis())
    }

    pub fn into_user(self, id: i64) -> User {
        let skills = or_default(self.skills, DEFAULT_SKILLS);

        User {
            id,
            name: or_default(self.name, DEFAULT_NAME),
            college: or_default(self.college, DEFAULT_COLLEGE),
            email: or_default(self.email, DEFAULT_EMAIL),
            avatar_url: DEFAULT_AVATAR.to_string(),
            skills: parse_skills(&skills),
            github: self.github.filter(|s| !s.trim().is_empty()),
            linkedin: self.linkedin.filter(|s| !s.trim().is_empty()),
        }
    }
}
