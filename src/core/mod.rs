pub mod cleanup;
pub mod fetcher;
pub mod installer;
pub mod launcher;
pub mod library;
pub mod server_api;
pub mod sync;
