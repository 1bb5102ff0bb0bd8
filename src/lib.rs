pub mod catalog;
pub mod config;
pub mod display;
pub mod identity;
pub mod page;
pub mod registration;
pub mod status;
pub mod tracing;
