use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use smartlink_config::{ConfigError, GatewayConfig};

use crate::{handlers, middleware as app_middleware, state::AppState};

pub struct SmartlinkServer {
    addr: SocketAddr,
    app: Router,
}

pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        // Launch parameters
        .route("/auth-params", get(handlers::auth_params))
        // OAuth code exchange and session lifecycle
        .route("/token-exchange", post(handlers::token_exchange))
        .route("/session", post(handlers::create_session))
        .route("/clear-cookies", post(handlers::clear_session))
        // Authenticated FHIR projection
        .route("/fhir/{resource}", get(handlers::search_resource))
        .with_state(state)
        // Middleware stack (order: request id -> cors/trace -> body limit)
        .layer(middleware::from_fn(app_middleware::request_id))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    use tracing::field::Empty;
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    let req_id = req
                        .extensions()
                        .get::<axum::http::HeaderValue>()
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    tracing::info_span!(
                        "http.request",
                        http.method = %method,
                        http.target = %uri,
                        http.status_code = Empty,
                        request_id = %req_id
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record(
                            "http.status_code",
                            tracing::field::display(res.status().as_u16()),
                        );
                        tracing::info!(
                            http.status = %res.status().as_u16(),
                            elapsed_ms = %latency.as_millis(),
                            "request handled"
                        );
                    },
                ),
        )
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: GatewayConfig,
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = GatewayConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: GatewayConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    /// Builds the server. Fails when the session secret cannot be turned
    /// into an encryption key.
    pub fn build(self) -> Result<SmartlinkServer, ConfigError> {
        let state = AppState::from_config(self.config)?;
        let app = build_app(state);

        Ok(SmartlinkServer {
            addr: self.addr,
            app,
        })
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SmartlinkServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
