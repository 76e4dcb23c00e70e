//! API gateway in front of the project service.
//!
//! Requests are matched against a prefix route table and forwarded to the
//! owning upstream. The gateway owns CORS for the browser front end and
//! answers `/gateway/health` itself.

pub mod cors;
pub mod error;
pub mod headers;
pub mod health;
pub mod proxy;
pub mod route_table;
pub mod routes;
pub mod state;


pub use error::{GatewayError, Result as GatewayResult};
pub use route_table::{Route, RouteTable};
pub use routes::build_router;
pub use state::GatewayState;

/// Largest request body the gateway buffers before forwarding
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
