use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use super::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub members: Vec<User>,
    pub team_code: String,
    /// Teams are formed for exactly one hackathon.
    pub hackathon_id: i64,
}

impl Team {
    /// Every member skill, flattened in member order. Duplicates are kept.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .flat_map(|member| member.skills.iter().map(String::as_str))
    }

    /// Union of member skills in first-seen order, duplicates removed by exact match.
    pub fn combined_skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.all_skills().filter(|skill| seen.insert(*skill)).collect()
    }

    pub fn covers(&self, skill: &str) -> bool {
        self.all_skills().any(|s| s == skill)
    }

    pub fn has_member(&self, user_id: i64) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }
}
