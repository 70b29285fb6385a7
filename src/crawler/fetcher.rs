//! HTTP fetcher
//!
//! One bounded GET per page: overall timeout from config (30s by default),
//! automatic redirect following, browser-style User-Agent. Every failure mode
//! maps to a [`FetchError`] the crawl loop recovers from locally.

use crate::config::CrawlerConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// A failed page fetch, carrying the URL and the underlying cause
///
/// Never fatal to the overall crawl: the scheduler logs the error and moves
/// on to the next frontier URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("failed to connect to {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },
}

/// Builds the HTTP client shared by all fetches of a crawler
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the raw response body
///
/// Non-2xx statuses, transport errors, and timeouts all come back as
/// [`FetchError`]; a successful result is the decoded body text.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_send_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

fn classify_send_error(url: &str, source: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if source.is_timeout() {
        FetchError::Timeout { url }
    } else if source.is_connect() {
        FetchError::Connect { url, source }
    } else {
        FetchError::Request { url, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> CrawlerConfig {
        CrawlerConfig {
            fetch_timeout_secs: 5,
            ..CrawlerConfig::default()
        }
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&test_config()).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let body = fetch_page(&client, &format!("{}/", server.uri())).await.unwrap();
        assert_eq!(body, "<html>hi</html>");
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        fetch_page(&client, &server.uri()).await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let body = fetch_page(&client, &format!("{}/old", server.uri())).await.unwrap();
        assert_eq!(body, "moved");
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let err = fetch_page(&client, &format!("{}/gone", server.uri()))
            .await
            .unwrap_err();
        match err {
            FetchError::Status { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_error() {
        // Nothing listens on this port
        let client = build_http_client(&test_config()).unwrap();
        let result = fetch_page(&client, "http://127.0.0.1:1/").await;
        assert!(result.is_err());
    }
}
