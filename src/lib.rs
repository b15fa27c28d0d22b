pub mod config;
pub mod console;
pub mod error;
pub mod interaction;
pub mod persistence;
pub mod record;
pub mod record_store;
