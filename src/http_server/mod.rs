//! # HTTP Server
//!
//! Router, configuration, and route handlers for the yetibook web surface.

pub mod config;
pub mod graphql_routes;
pub mod server;
pub mod yeti_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
