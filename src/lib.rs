//! yetibook - a minimal yeti directory
//!
//! Yetis sign up through a conventional HTML form; everyone else reads the
//! directory through a single GraphQL query field.

pub mod graphql;
pub mod http_server;
pub mod model;
pub mod store;
