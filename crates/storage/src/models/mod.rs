mod analysis;
mod hackathon;
mod team;
mod team_code;
mod theme;
mod user;

pub use analysis::TeamAnalysis;
pub use hackathon::{Hackathon, HackathonStatus};
pub use team::Team;
pub use team_code::TeamCode;
pub use theme::Theme;
pub use user::User;
