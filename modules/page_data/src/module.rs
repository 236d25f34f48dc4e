//! Module wiring: config -> transport -> access service

use crate::config::Config;
use crate::domain::AccessService;
use crate::infra::http::ReqwestTransport;
use anyhow::Result;
use std::sync::Arc;

/// Build the access service from configuration
///
/// Call once at startup and pass the service (it is cheap to clone) to
/// whoever needs page data.
pub fn build_access_service(cfg: &Config) -> Result<AccessService> {
    let transport = Arc::new(ReqwestTransport::from_config(cfg)?);
    let service = AccessService::new(transport);

    tracing::info!(
        base_url = cfg.base_url.as_deref().unwrap_or("<none>"),
        "Page data access service initialized"
    );
    Ok(service)
}
