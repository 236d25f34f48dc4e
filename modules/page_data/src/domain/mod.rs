//! Domain layer - access service, error handling and tree validation

pub mod error_handler;
pub mod outcome;
pub mod service;
pub mod validation;

pub use error_handler::{handle_error, ErrorReporter, TracingReporter};
pub use outcome::Outcome;
pub use service::AccessService;
pub use validation::validate_component_tree;
