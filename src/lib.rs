// This file makes the crate a library and declares modules for use
// by the binary (main.rs) and integration tests.

pub mod client;
pub mod fetch;
pub mod logging;
pub mod settings;

pub use client::{create_client, create_client_with, ApiClient, DEFAULT_BASE_URL};
pub use settings::ClientSettings;
