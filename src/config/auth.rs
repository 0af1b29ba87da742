//! Authentication provider settings.

use serde::{Deserialize, Serialize};
use url::Url;

/// Suffix appended to the tenant domain prefix.
const TENANT_DOMAIN_SUFFIX: &str = "auth0.com";

/// Auth0 tenant configuration for the kiosk client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Tenant domain prefix (e.g., "websecure.us" for websecure.us.auth0.com).
    pub domain_prefix: String,
    /// Audience the tenant issues access tokens for.
    pub audience: String,
    /// Client identifier of the kiosk application registration. Treated as
    /// a deployment secret: never logged.
    pub client_id: String,
    /// Redirect target after a completed login.
    pub callback_url: String,
}

impl AuthConfig {
    /// Full tenant hostname.
    pub fn tenant_domain(&self) -> String {
        format!("{}.{}", self.domain_prefix, TENANT_DOMAIN_SUFFIX)
    }

    /// Implicit-flow authorization URL the client opens to start a login.
    pub fn authorize_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("https://{}/authorize", self.tenant_domain()))?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);
        Ok(url)
    }
}
