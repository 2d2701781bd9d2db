//! Salvo-backed server runner.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use oracle_app::{
    auth::LdapAuth,
    server::{ServeError, ServeOptions, ServerRunner},
};
use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use crate::{healthcheck, shutdown, state::State};

/// Production server runner for the oracle API.
///
/// Blocks for the lifetime of the service; the authentication state must be
/// fully configured before this is invoked.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SalvoRunner;

#[async_trait]
impl ServerRunner for SalvoRunner {
    async fn run(&self, auth: LdapAuth, options: ServeOptions) -> Result<(), ServeError> {
        let addr = options.socket_addr();

        info!(
            debug = options.debug,
            reload = options.reload,
            "Starting server on {addr}"
        );

        if options.reload {
            // Restart-on-change is owned by the deployment's watcher process.
            info!("reload mode requested");
        }

        let acceptor = TcpListener::new(addr.clone())
            .try_bind()
            .await
            .map_err(|source| ServeError::Bind {
                addr,
                source: io::Error::other(source),
            })?;

        let router = build_router(State::from_auth(auth));

        let server = Server::new(acceptor);
        let handle = server.handle();

        // Listen for shutdown signal
        tokio::spawn(async move {
            if let Err(error) = shutdown::listen(handle).await {
                error!("failed to listen for shutdown signal: {error}");
            }
        });

        // Start serving requests
        server.serve(router).await;

        Ok(())
    }
}

fn build_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler));

    let doc = OpenApi::new("Oracle API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

#[cfg(test)]
mod tests {
    use oracle_app::auth::{LdapAuth, LdapSettings};
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::healthcheck::HealthResponse;

    use super::*;

    #[tokio::test]
    async fn test_router_serves_the_healthcheck() -> TestResult {
        let auth = LdapAuth::configure(LdapSettings::default())?;
        let router = build_router(State::from_auth(auth));

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn test_router_exposes_the_openapi_document() -> TestResult {
        let auth = LdapAuth::configure(LdapSettings::default())?;
        let router = build_router(State::from_auth(auth));

        let mut response = TestClient::get("http://example.com/api-doc/openapi.json")
            .send(&Service::new(router))
            .await;

        assert_eq!(response.status_code, Some(StatusCode::OK));

        let doc: serde_json::Value = response.take_json().await?;

        assert_eq!(
            doc.get("info").and_then(|info| info.get("title")),
            Some(&serde_json::Value::from("Oracle API"))
        );

        Ok(())
    }
}
