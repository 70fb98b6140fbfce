pub mod platform;
pub mod provider;
