pub mod error;
pub mod mod_map;
pub mod paths;
pub mod server;
