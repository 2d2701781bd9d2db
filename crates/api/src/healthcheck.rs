//! Oracle API Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::state::State;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Active authentication backend (`ldap` or `none`)
    pub auth: String,
}

/// Healthcheck handler
///
/// Returns service health status and the active authentication backend
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Json<HealthResponse> {
    let auth = depot.obtain::<Arc<State>>().map_or("none", |state| {
        if state.auth.is_configured() {
            "ldap"
        } else {
            "none"
        }
    });

    Json(HealthResponse {
        status: "ok".to_string(),
        auth: auth.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use oracle_app::auth::{LdapAuth, LdapSettings};
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::state::State;

    use super::*;

    fn service(auth: LdapAuth) -> Service {
        let router = Router::new()
            .hoop(inject(State::from_auth(auth)))
            .push(Router::with_path("healthcheck").get(handler));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_healthcheck_reports_the_ldap_backend() -> TestResult {
        let auth = LdapAuth::configure(LdapSettings {
            url: Some("ldap://directory.example.org".to_string()),
            ..LdapSettings::default()
        })?;

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&service(auth))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");
        assert_eq!(response.auth, "ldap");

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_without_a_directory_reports_none() -> TestResult {
        let auth = LdapAuth::configure(LdapSettings::default())?;

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&service(auth))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");
        assert_eq!(response.auth, "none");

        Ok(())
    }
}
