//! HTTP front door for the hello-otel services.
//!
//! Two routes (`/`, `/healthz`) behind two router constructors, one per
//! deployable variant: [`router`] opens the request span inside the root
//! handler, [`traced_router`] wraps every route in span middleware instead.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::{router, traced_router};
pub use server::{ServerError, serve, shutdown_signal};
pub use state::AppState;
