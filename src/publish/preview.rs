//! Preview web surface URL handling.
//!
//! The preview starts at a computed URL and every redirect must keep
//! carrying the auth query parameters, otherwise the server bounces the
//! draft preview to the login page. Navigation is never blocked: the
//! surface only augments and forwards.

use crate::env::ServerConfig;

/// Decision returned to the web view for a navigation action. Always
/// [`NavigationPolicy::Allow`] in this design; `Cancel` exists for parity
/// with the platform callback signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    Allow,
    Cancel,
}

/// The draft preview URL with auth query attached.
pub fn initial_url(server: &ServerConfig, project_id: i64, update_id: i64) -> String {
    prepared_url(
        &format!(
            "{}/projects/{}/updates/{}/preview",
            server.api_base_url, project_id, update_id
        ),
        server,
    )
}

/// Re-append the required auth query parameters to a redirect target.
///
/// URLs without a host (relative redirects, about:blank and friends) are
/// returned unchanged, as are URLs already carrying the client id, so the
/// augmentation is idempotent.
pub fn prepared_url(url: &str, server: &ServerConfig) -> String {
    if !has_host(url) {
        return url.to_string();
    }
    let client_key = format!("client_id={}", server.client_id);
    if url.contains(&client_key) {
        return url.to_string();
    }

    let auth_query = format!("{client_key}&currency={}", server.currency);
    if url.contains('?') {
        format!("{url}&{auth_query}")
    } else {
        format!("{url}?{auth_query}")
    }
}

fn has_host(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    if scheme.is_empty() {
        return false;
    }
    rest.split(['/', '?', '#'])
        .next()
        .is_some_and(|host| !host.is_empty())
}
