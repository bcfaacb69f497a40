//! Same-origin proxy to the backend
//!
//! `GET /api/proxy?endpoint=/tickers` fetches `{API_BASE_URL}/tickers` and
//! hands back the backend's status, content type and body untouched.

use worker::{Headers, Response, Url};

use crate::error::{GatewayError, Result};

/// Query parameter naming the backend path
pub const ENDPOINT_PARAM: &str = "endpoint";

/// Backend-relative path requested by the browser
pub fn parse_endpoint(url: &Url) -> Result<String> {
    let endpoint = url
        .query_pairs()
        .find(|(key, _)| key == ENDPOINT_PARAM)
        .map(|(_, value)| value.into_owned());

    match endpoint {
        Some(path) if path.starts_with('/') => Ok(path),
        Some(path) if !path.trim().is_empty() => Err(GatewayError::BadRequest(format!(
            "{ENDPOINT_PARAM} must start with '/', got '{path}'"
        ))),
        _ => Err(GatewayError::BadRequest(format!(
            "missing '{ENDPOINT_PARAM}' query parameter"
        ))),
    }
}

pub fn backend_url(base: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base.trim_end_matches('/'))
}

/// Backend reply as forwarded to the browser
#[derive(Debug)]
pub struct Forwarded {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Forwarded {
    pub fn into_response(self) -> worker::Result<Response> {
        let mut headers = Headers::new();
        if let Some(content_type) = &self.content_type {
            headers.set("Content-Type", content_type)?;
        }
        Ok(Response::from_bytes(self.body)?
            .with_status(self.status)
            .with_headers(headers))
    }
}

/// GET the backend; any HTTP status is a successful forward
pub async fn fetch_backend(client: &reqwest::Client, url: &str) -> Result<Forwarded> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?.to_vec();

    Ok(Forwarded {
        status,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn proxy_url(query: &str) -> Url {
        Url::parse(&format!("https://ui.example.com/api/proxy{query}")).unwrap()
    }

    #[test]
    fn test_parse_endpoint() {
        assert_eq!(
            parse_endpoint(&proxy_url("?endpoint=/tickers")).unwrap(),
            "/tickers"
        );
        assert_eq!(
            parse_endpoint(&proxy_url("?endpoint=%2Ftickers%3Flimit%3D5")).unwrap(),
            "/tickers?limit=5"
        );
    }

    #[test]
    fn test_parse_endpoint_rejects() {
        for query in ["", "?endpoint=", "?other=/tickers", "?endpoint=tickers"] {
            let err = parse_endpoint(&proxy_url(query)).unwrap_err();
            assert_eq!(err.status(), 400, "query {query:?}");
        }
    }

    #[test]
    fn test_backend_url_join() {
        assert_eq!(
            backend_url("http://localhost:8000/", "/tickers"),
            "http://localhost:8000/tickers"
        );
        assert_eq!(
            backend_url("http://localhost:8000", "/tickers"),
            "http://localhost:8000/tickers"
        );
    }

    #[tokio::test]
    async fn test_forwards_body_and_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"[{"symbol":"BTC"}]"#, "application/json"),
            )
            .mount(&server)
            .await;

        let forwarded = fetch_backend(&reqwest::Client::new(), &format!("{}/tickers", server.uri()))
            .await
            .unwrap();
        assert_eq!(forwarded.status, 200);
        assert_eq!(forwarded.content_type.as_deref(), Some("application/json"));
        assert_eq!(forwarded.body, br#"[{"symbol":"BTC"}]"#);
    }

    #[tokio::test]
    async fn test_backend_error_status_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickers"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let forwarded = fetch_backend(&reqwest::Client::new(), &format!("{}/tickers", server.uri()))
            .await
            .unwrap();
        assert_eq!(forwarded.status, 503);
        assert_eq!(forwarded.body, b"maintenance");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_upstream_error() {
        let err = fetch_backend(&reqwest::Client::new(), "http://127.0.0.1:1/tickers")
            .await
            .unwrap_err();
        assert_eq!(err.status(), 502);
    }
}
