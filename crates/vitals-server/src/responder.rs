//! Listener lifecycle for one health responder.
//!
//! A responder is either not yet bound, or listening. [`Responder::bind`] is
//! the one transition between the two; [`Responder::run`] then serves until the
//! process is terminated.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use vitals_core::{Clock, Error, ServiceProfile};

use crate::app_state::AppState;
use crate::router::create_router;

/// A bound, listening health responder.
pub struct Responder {
    listener: TcpListener,
    local_addr: SocketAddr,
    state: AppState,
}

impl Responder {
    /// Bind the profile's `host:port`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the address cannot be bound (in use, no
    /// permission, unresolvable host).
    pub async fn bind(profile: ServiceProfile, clock: Arc<dyn Clock>) -> Result<Self, Error> {
        let addr = profile.addr();
        let bind_err = |source: std::io::Error| Error::Bind {
            addr: addr.clone(),
            source,
        };

        let listener = TcpListener::bind(&addr).await.map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        tracing::info!(service = %profile.name, %local_addr, "health responder listening");

        Ok(Self {
            listener,
            local_addr,
            state: AppState::new(profile, clock),
        })
    }

    /// Address actually bound; differs from the profile when port 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn profile(&self) -> &ServiceProfile {
        &self.state.profile
    }

    /// The profile with the port actually bound, for announcing the address.
    pub fn bound_profile(&self) -> ServiceProfile {
        self.profile().clone().with_port(self.local_addr.port())
    }

    /// Serve requests until the process is terminated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serve`] if the accept loop fails.
    pub async fn run(self) -> Result<(), Error> {
        let app = create_router(self.state);
        axum::serve(self.listener, app).await.map_err(Error::Serve)
    }
}
