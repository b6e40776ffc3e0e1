pub mod profile;
pub mod store;
