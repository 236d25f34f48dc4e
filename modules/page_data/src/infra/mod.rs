//! Infrastructure layer - network transport

pub mod http;
