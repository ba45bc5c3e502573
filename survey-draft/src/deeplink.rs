//! Routing of incoming deep links.

use url::{Url, form_urlencoded};

/// Screen a deep link leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The wallet returned a credential. `query` holds the original query
    /// parameters, re-encoded as `application/x-www-form-urlencoded`.
    AuthCallback { query: String },
    /// Open the explore screen focused on one survey.
    Explore { survey_id: String },
}

/// Dev-tooling URLs that must never be treated as app links.
fn is_dev_client_url(url: &str) -> bool {
    url.contains("expo-development-client") || url.starts_with("exp://")
}

/// Host or path segment naming the link target, e.g. `auth` in
/// `zkdappsurveyfrontend://auth?...` or `myapp:///auth`.
fn targets(url: &Url, name: &str) -> bool {
    url.host_str() == Some(name) || url.path().trim_matches('/') == name
}

/// Decide where `url` should lead. Unrecognised or malformed links yield `None`.
pub fn route(url: &str) -> Option<Route> {
    if is_dev_client_url(url) {
        tracing::debug!(url, "ignoring dev client link");
        return None;
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::warn!(url, %error, "malformed deep link");
            return None;
        }
    };
    tracing::info!(url, "deep link received");

    if targets(&parsed, "auth") {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(parsed.query_pairs())
            .finish();
        return Some(Route::AuthCallback { query });
    }

    if targets(&parsed, "survey") {
        let survey_id = parsed
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty())?;
        return Some(Route::Explore { survey_id });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_by_host_keeps_query() {
        let route = route("zkdappsurveyfrontend://auth?did=did%3Aexample%3A1&timestamp=1700000000000");
        assert_eq!(
            route,
            Some(Route::AuthCallback {
                query: "did=did%3Aexample%3A1&timestamp=1700000000000".into()
            })
        );
    }

    #[test]
    fn auth_by_path() {
        assert_eq!(
            route("zkdappsurveyfrontend:///auth"),
            Some(Route::AuthCallback {
                query: String::new()
            })
        );
        assert!(matches!(
            route("https://surveys.example/auth?credential=%7B%7D"),
            Some(Route::AuthCallback { query }) if query == "credential=%7B%7D"
        ));
    }

    #[test]
    fn survey_link_needs_id() {
        assert_eq!(
            route("zkdappsurveyfrontend://survey?id=s-42"),
            Some(Route::Explore {
                survey_id: "s-42".into()
            })
        );
        assert_eq!(route("zkdappsurveyfrontend://survey"), None);
        assert_eq!(route("zkdappsurveyfrontend://survey?id="), None);
    }

    #[test]
    fn dev_client_links_are_ignored() {
        assert_eq!(route("exp://192.168.0.2:8081/--/auth"), None);
        assert_eq!(
            route("zkdappsurveyfrontend://expo-development-client/?url=x"),
            None
        );
    }

    #[test]
    fn unknown_and_malformed() {
        assert_eq!(route("zkdappsurveyfrontend://settings"), None);
        assert_eq!(route("not a url"), None);
    }
}
