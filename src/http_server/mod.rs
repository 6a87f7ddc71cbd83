//! # HTTP Server Module
//!
//! Thin axum adapter over the string service. Handlers translate
//! requests into service calls and core errors into status codes.
//!
//! # Endpoints
//!
//! - `GET /` - Welcome document
//! - `GET /health` - Health check
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings` - List with structured filters
//! - `GET /strings/filter-by-natural-language` - Natural-language search
//! - `GET /strings/:value` - Fetch by value
//! - `DELETE /strings/:value` - Delete by value

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod request_log;
pub mod response;
pub mod server;
pub mod string_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{RestError, RestResult};
pub use server::HttpServer;
pub use string_routes::StringsState;
