pub mod api;
pub mod config;
pub mod state;
pub mod store;
