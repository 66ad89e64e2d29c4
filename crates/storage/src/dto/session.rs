use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Theme, User};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user: Option<User>,
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThemeResponse {
    pub theme: Theme,
}
