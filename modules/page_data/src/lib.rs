//! Page Data Module
//!
//! Typed page-building components (windows, navbars, footers, forms, ...)
//! and a stateless HTTP access service that fetches and persists them.

// Public exports
pub mod contract;
pub use contract::{
    client::HttpTransport,
    error::{AccessError, ComponentError},
    Component, ComponentBase, ComponentKind, CoreComponent, ParentComponent,
};

pub use config::Config;
pub use domain::{
    handle_error, validate_component_tree, AccessService, ErrorReporter, Outcome,
    TracingReporter,
};
pub use infra::http::ReqwestTransport;

pub mod module;
pub use module::build_access_service;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
