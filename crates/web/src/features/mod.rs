pub mod hackathons;
pub mod session;
pub mod teams;
