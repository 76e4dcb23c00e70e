//! Prefix routing: which upstream owns a request path.

use pm_config::GatewayConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    prefix: String,
    upstream: String,
}

impl Route {
    pub fn new(prefix: impl Into<String>, upstream: impl Into<String>) -> Self {
        let upstream: String = upstream.into();
        Self {
            prefix: prefix.into(),
            upstream: upstream.trim_end_matches('/').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    /// `/project` matches `/project` and `/project/...` but not `/projects`.
    pub fn matches(&self, path: &str) -> bool {
        if self.prefix == "/" {
            return true;
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Upstream URL for a request; the path and query are kept verbatim.
    pub fn target_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.upstream, path_and_query)
    }
}

/// Routes ordered longest prefix first, so the most specific match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(mut routes: Vec<Route>) -> Self {
        routes.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self { routes }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(
            config
                .routes
                .iter()
                .map(|r| Route::new(r.path_prefix.as_str(), r.upstream.as_str()))
                .collect(),
        )
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(path))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
