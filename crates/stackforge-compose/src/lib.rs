//! # stackforge-compose
//!
//! The compose synthesis engine: an in-memory model of services, ports,
//! volumes, networks, and dependency edges, plus the validation and
//! resolution passes that turn it into a plain serializable document.
//!
//! Handles:
//! - **Spec**: Declarative service descriptions accepted everywhere.
//! - **Service**: The mutable service entity and its dependency references.
//! - **Builder**: Registration, validation, and document synthesis.
//! - **Document**: The plain serializable output model.
//! - **Graph**: Startup-order resolution over dependency edges.
//!
//! The engine performs no I/O. Encoding the synthesized document and
//! writing it to disk are the caller's concern.

pub mod builder;
pub mod document;
pub mod graph;
pub mod network;
pub mod port;
pub mod service;
pub mod spec;
pub mod volume;

pub use builder::ComposeBuilder;
pub use document::ComposeDocument;
pub use service::{Service, ServiceId, ServiceRef};
pub use spec::ServiceSpec;
