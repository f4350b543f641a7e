pub mod entry;
pub mod metrics;
pub mod profile;
