//! Request identity and captured response snapshots

use reqwest::Method;

/// Identity of an intercepted request: method plus absolute URL.
/// Two requests with the same key address the same cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxiedRequest {
    pub method: Method,
    pub url: String,
}

impl ProxiedRequest {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
        }
    }

    /// Convenience for the common case
    pub fn get(url: &str) -> Self {
        Self::new(Method::GET, url)
    }

    /// Cache key for this request
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}

/// A response captured at store time: status, headers and full body.
///
/// `Clone` is the duplication point of the engine: a response headed both to
/// the caller and to a store is cloned at the branch, so each side gets an
/// independently readable copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CachedResponse {
    /// Drain a network response into a snapshot. Reading the body can fail
    /// mid-transfer, which counts as a network error.
    pub async fn capture(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Only successful responses are ever written to a store
    pub fn is_cacheable(&self) -> bool {
        self.status == 200
    }

    /// Look up a header value by name (ASCII case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
