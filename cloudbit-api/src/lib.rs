//! High-level API for cloudBit event notifications
//!
//! This crate lists, creates and deletes subscriptions to events generated by
//! cloudBit "publisher" devices. It uses the private `http-client` crate for
//! the underlying REST calls.
//!
//! ```rust,no_run
//! use cloudbit_api::{ClientConfig, EventRef, NotificationManager};
//!
//! let manager = NotificationManager::new(ClientConfig::new("token", "https://example.com/hook"));
//! manager.subscribe_to_notifications("00e04c0379bb", Some("00e04c0379cc"), &[EventRef::new("ignite")])?;
//! manager.delete_subscription("00e04c0379bb", Some("00e04c0379cc"))?;
//! # Ok::<(), cloudbit_api::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mappings;
pub mod subscription;
pub mod transport;

pub use client::NotificationManager;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, Result};
pub use http_client::{HttpError, HttpMethod, HttpRequest};
pub use mappings::EventMappings;
pub use subscription::{EventRef, Subscription};
pub use transport::Transport;
