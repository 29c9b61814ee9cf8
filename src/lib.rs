//! Create, list, get, update and delete kittens stored in DynamoDB.
//!
//! The operations in [`handlers`] are transport neutral and are served both
//! over HTTP by the `kitten-store` binary and as Lambda functions by the
//! `kitten-lambda` binary.

pub mod api_doc;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
