//! carlot - an in-memory car catalog served over HTTP
//!
//! - [`catalog`]: records, store, id allocation and the locked service
//! - [`http_server`]: axum routes over the catalog
//! - [`observability`]: structured logging and counters
//! - [`cli`]: command line entry point and config file

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
