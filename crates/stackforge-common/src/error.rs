//! Error types for the stackforge workspace.
//!
//! Every failure in the synthesis core is a [`ConfigurationError`]: a fault
//! in the declared configuration, detected synchronously at declaration or
//! synthesis time. The core performs no I/O, so no variant wraps an I/O or
//! encoding error; those belong to the calling layer.

use thiserror::Error;

/// A fault in the declared compose configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A service spec supplied both or neither of the `image`/`build` keys.
    #[error("service \"{service}\" requires exactly one of `image` or `build`")]
    ImageSource {
        /// Name of the offending service.
        service: String,
    },

    /// A service was registered under a name that is already taken.
    #[error("duplicate service name: \"{name}\"")]
    DuplicateService {
        /// The colliding service name.
        name: String,
    },

    /// Synthesis was requested on a document with no services.
    #[error("at least one service is required")]
    EmptyDocument,

    /// A dependency reference points at a service that is not declared.
    #[error("service \"{dependent}\" depends on undeclared service \"{target}\"")]
    UnknownDependency {
        /// The service declaring the dependency.
        dependent: String,
        /// The missing dependency target.
        target: String,
    },

    /// A service lists itself among its own dependencies.
    #[error("service \"{service}\" cannot depend on itself")]
    SelfDependency {
        /// The self-referencing service.
        service: String,
    },

    /// The dependency edges form a cycle, so no startup order exists.
    #[error("dependency cycle involving service \"{service}\"")]
    DependencyCycle {
        /// A service on the detected cycle.
        service: String,
    },

    /// A service, volume, or network key is not a valid compose name.
    #[error("invalid {kind} name \"{name}\": {reason}")]
    InvalidName {
        /// Kind of the named entity (service, volume, network).
        kind: &'static str,
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
