use crate::api::{check, health, CheckTransport};
use crate::config::Config;
use crate::error::Error;
use async_trait::async_trait;
use eyre::WrapErr;
use serde::{de::DeserializeOwned, Serialize};

/// HTTP client of the validation service
#[derive(Clone)]
pub struct Client {
    check_url: String,
    health_url: String,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> eyre::Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Client {
            check_url: config.check_url(),
            health_url: config.health_url(),
            client: builder
                .build()
                .wrap_err(Error::new("Failed to set up HTTP client", None))?,
        })
    }

    /// A POST request to an endpoint of the service
    pub fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.post(url)
    }

    /// Incapsulate a typical JSON POST request
    ///
    /// The HTTP status is only logged: the service answers with JSON on errors as well.
    pub async fn request<B, R>(&self, url: &str, body: &B) -> eyre::Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let result = self
            .post(url)
            .json(body)
            .send()
            .await
            .inspect_err(|err| log::error!("{err:?}"))
            .wrap_err("Network request failed")?;

        let status = result.status();
        let text = result.text().await.wrap_err("Failed to read response")?;
        log::info!("Got status from {url}: {status}");
        log::info!("Got response from {url}: {text}");

        serde_json::from_str(&text).wrap_err("Could not parse response")
    }

    /// Ask the service whether it is running
    pub async fn health(&self) -> eyre::Result<health::Response> {
        let result = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .inspect_err(|err| log::error!("{err:?}"))
            .wrap_err(Error::new(
                "Network request failed",
                Some("Make sure the service is running at the configured api_base."),
            ))?;

        let status = result.status();
        let text = result.text().await?;
        log::info!("Got status from {}: {status}", self.health_url);
        log::info!("Got response from {}: {text}", self.health_url);

        if !status.is_success() {
            return Err(Error::new(
                &format!("Service is unhealthy ({status})"),
                Some("Try again in a few seconds."),
            )
            .into());
        }

        serde_json::from_str(&text).wrap_err(Error::new(
            "Invalid response from server",
            Some("The health endpoint did not return JSON."),
        ))
    }
}

#[async_trait]
impl CheckTransport for Client {
    async fn check(&self, request: &check::Request) -> eyre::Result<check::Response> {
        self.request(&self.check_url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn client(server: &mockito::Server) -> Client {
        Client::new(&Config {
            api_base: server.url(),
            ..Default::default()
        })
        .unwrap()
    }

    fn request(url: &str) -> check::Request {
        check::Request { url: url.into() }
    }

    #[tokio::test]
    async fn posts_url_as_json() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/check-url")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(json!({"url": "https://example.com"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"✅ Valid website URL"}"#)
            .expect(1)
            .create_async()
            .await;

        let response = client(&server).check(&request("https://example.com")).await.unwrap();

        assert_eq!(response.message(), Some("✅ Valid website URL"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn posts_to_configured_path() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v2/check")
            .with_status(200)
            .with_body(r#"{"message":"✅ Valid website URL"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = Client::new(&Config {
            api_base: server.url(),
            check_path: "/v2/check".into(),
            ..Default::default()
        })
        .unwrap();

        client.check(&request("https://example.com")).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_with_json_is_a_reply() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/api/check-url")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Missing url field"}"#)
            .create_async()
            .await;

        let response = client(&server).check(&request(" ")).await.unwrap();
        assert_eq!(response.message(), Some("Missing url field"));
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/api/check-url")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let error = client(&server)
            .check(&request("https://example.com"))
            .await
            .unwrap_err();

        assert!(format!("{error:#}").starts_with("Could not parse response"));
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        // Take a free port and release it, so nothing listens there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new(&Config {
            api_base: format!("http://{address}"),
            ..Default::default()
        })
        .unwrap();

        let error = client.check(&request("https://example.com")).await.unwrap_err();
        assert!(format!("{error:#}").starts_with("Network request failed"));
    }

    #[tokio::test]
    async fn gives_up_after_timeout() {
        // Accept connections and never answer
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut connections = Vec::new();

            while let Ok((stream, _)) = listener.accept().await {
                connections.push(stream);
            }
        });

        let client = Client::new(&Config {
            api_base: format!("http://{address}"),
            timeout: Some(Duration::from_millis(50)),
            ..Default::default()
        })
        .unwrap();

        let error = client.check(&request("https://example.com")).await.unwrap_err();
        assert!(format!("{error:#}").starts_with("Network request failed"));
    }

    #[tokio::test]
    async fn reads_health() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;

        let response = client(&server).health().await.unwrap();
        assert!(response.is_up());
    }

    #[tokio::test]
    async fn unhealthy_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/api/health")
            .with_status(503)
            .create_async()
            .await;

        let error = Error::from(client(&server).health().await.unwrap_err());
        assert_eq!(error.message(), "Service is unhealthy (503 Service Unavailable)");
    }
}
