//! draftboard - a minimal, self-hostable project tracker backend
//!
//! HTTP API for user registration/login and client project records, backed
//! by a document store.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod store;
