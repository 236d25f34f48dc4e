//! HTTP transport backed by reqwest

pub mod transport;

pub use transport::ReqwestTransport;
