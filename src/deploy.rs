//! Deployer API interactions.
//!
//! URL construction and the single authenticated POST that hands a
//! configuration payload to the deployer.

use crate::{Error, Result};
use url::Url;

/// Default deployer host, a placeholder until one is configured.
pub const DEFAULT_HOST: &str = "http://deployer.local/";

/// Default path to the projects endpoint on the deployer.
pub const DEFAULT_API_ENDPOINT: &str = "/compose/projects/";

/// Build the configure endpoint URL for a project and version.
///
/// The path is joined onto `host` with standard relative-URL resolution,
/// so an absolute endpoint path replaces any path already on the host.
pub fn build_url(host: &str, api_endpoint: &str, project: &str, version: &str) -> Result<Url> {
    let base = Url::parse(host)?;
    let url = base.join(&format!("{api_endpoint}{project}/configure/{version}/"))?;
    Ok(url)
}

/// POST the configuration payload to the deployer.
///
/// Redirects are not followed; any response below 400 counts as success,
/// including a raw 3xx. The body is opaque, no Content-Type is set.
pub fn send(url: &Url, token: &str, payload: &[u8]) -> Result<()> {
    let agent = ureq::AgentBuilder::new().redirects(0).build();

    // The deployer expects the non-standard `Bearer: <token>` scheme.
    let response = agent
        .post(url.as_str())
        .set("Authorization", &format!("Bearer: {token}"))
        .send_bytes(payload);

    match response {
        Ok(_) => Ok(()),
        Err(ureq::Error::Status(status, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            Err(Error::Rejected { status, body })
        }
        Err(e) => Err(Error::Transport(e.to_string())),
    }
}
