pub mod hackathon;
pub mod session;
pub mod signup;
pub mod team;
