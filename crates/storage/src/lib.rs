pub mod catalog;
pub mod dto;
pub mod error;
pub mod models;
pub mod profile;
pub mod store;

pub use catalog::HackathonCatalog;
pub use error::{Result, StorageError};
pub use profile::Profile;
pub use store::{JsonStore, StoreKey};
