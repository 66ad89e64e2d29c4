use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A signed-up student. Teams hold full copies of their members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub college: String,
    pub email: String,
    pub avatar_url: String,
    /// Case-sensitive skill tags, in the order the user listed them.
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}
