//! HTTP server wrapper with explicit start/stop

use super::routes;
use super::state::AppState;
use crate::utils::error::{ExporterError, Result};
use actix_web::dev::ServerHandle;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing::{info, warn};

struct Running {
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
    addrs: Vec<SocketAddr>,
}

/// The metrics HTTP endpoint
pub struct ExpositionServer {
    address: String,
    state: AppState,
    running: Option<Running>,
}

impl ExpositionServer {
    pub fn new(address: impl Into<String>, state: AppState) -> Self {
        Self {
            address: address.into(),
            state,
            running: None,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "vspc-exporter")))
            .configure(routes::configure_routes)
    }

    /// Bind and serve in the background.
    ///
    /// A bind failure is returned as [`ExporterError::ExpositionStartup`].
    pub fn start(&mut self) -> Result<()> {
        if self.running.is_some() {
            return Err(ExporterError::lifecycle("Exposition server is already running"));
        }

        let state = web::Data::new(self.state.clone());
        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(1)
            .disable_signals()
            .bind(&self.address)
            .map_err(|e| ExporterError::exposition_startup(&self.address, e))?;
        let addrs = server.addrs();
        let server = server.run();

        let handle = server.handle();
        let task = tokio::spawn(server);
        info!("Serving prometheus metrics on: http://{}/metrics", self.address);

        self.running = Some(Running {
            handle,
            task,
            addrs,
        });
        Ok(())
    }

    /// Addresses actually bound, empty when not running
    pub fn local_addrs(&self) -> Vec<SocketAddr> {
        self.running
            .as_ref()
            .map(|running| running.addrs.clone())
            .unwrap_or_default()
    }

    /// Stop gracefully and wait for the server task. No-op when not running.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(running) = self.running.take() else {
            return Ok(());
        };

        running.handle.stop(true).await;
        match running.task.await {
            Ok(Ok(())) => {
                info!("HTTP server stopped");
                Ok(())
            }
            Ok(Err(e)) => Err(ExporterError::server(format!("Server error: {}", e))),
            Err(e) => {
                warn!("HTTP server task did not finish cleanly: {}", e);
                Err(ExporterError::server(format!("Server task failed: {}", e)))
            }
        }
    }
}
