//! Triangle Finder Web
//!
//! HTTP front end for [`triangles_grid`].
//!
//! # Architecture
//!
//! - **API**: JSON endpoints under `/api/trianglefinder`
//! - **UI**: server-rendered HTML page with both lookup forms and a grid preview
//! - **Params**: query-string binding that reports bad input per field
//! - **Config**: environment-driven listen address and CORS policy
//!
//! # Example
//!
//! ```no_run
//! use triangles_web::{WebConfig, WebServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WebConfig::from_env()?;
//!     WebServer::new(config).serve().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
mod params;
pub mod server;
pub mod ui;
pub mod view;

pub use config::WebConfig;
pub use error::{Error, Result};
pub use server::{build_router, AppState, WebServer};
