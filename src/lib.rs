pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod permissions;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
