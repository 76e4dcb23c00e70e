use crate::{GatewayError, GatewayResult, RouteTable};

use pm_config::GatewayConfig;

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;

#[derive(Clone)]
pub struct GatewayState {
    pub client: reqwest::Client,
    pub routes: Arc<RouteTable>,
    pub request_timeout: Duration,
}

impl GatewayState {
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        // Redirects are relayed to the browser, not followed here
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()
            .map_err(|source| GatewayError::Client {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            routes: Arc::new(RouteTable::from_config(config)),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }
}
