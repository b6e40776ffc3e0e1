pub mod connection_manager;
pub mod pending_slot;
pub mod provider;
