use std::time::Duration;

use domain::{
    model::{
        entity::{ClusterResponse, JobDetailsResponse},
        vo::{SlurmJobsResponse, SlurmResource},
    },
    service::SlurmRestApi,
    UpstreamError,
};
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

/// slurmrestd client. Credentials live in the middleware chain of `client`.
pub struct SlurmRestClient {
    base: String,
    client: ClientWithMiddleware,
    timeout: Duration,
}

impl SlurmRestClient {
    /// `base` is the daemon root, e.g. `http://10.0.0.5:6820/`. It is only
    /// parsed when a request is made.
    pub fn new(base: impl Into<String>, client: ClientWithMiddleware, timeout: Duration) -> Self {
        Self {
            base: base.into(),
            client,
            timeout,
        }
    }

    fn url(&self, resource: &SlurmResource) -> Result<Url, UpstreamError> {
        let mut url =
            Url::parse(&self.base).map_err(|e| UpstreamError::RequestConstruction(e.into()))?;
        url.path_segments_mut()
            .map_err(|_| {
                UpstreamError::RequestConstruction(anyhow::anyhow!(
                    "{} cannot be a base URL",
                    self.base
                ))
            })?
            .pop_if_empty()
            .extend(resource.segments());
        Ok(url)
    }

    /// One GET against `resource`, decoded into `T`.
    ///
    /// Connect, headers and body all share the single `timeout` deadline.
    /// When it expires the request is dropped and the upstream counts as
    /// unreachable.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        resource: SlurmResource,
    ) -> Result<T, UpstreamError> {
        let url = self.url(&resource)?;
        tracing::debug!(%url, "GET slurmrestd");

        tokio::time::timeout(self.timeout, self.exchange(url, &resource))
            .await
            .map_err(|elapsed| UpstreamError::Unreachable {
                subject: resource.subject(),
                source: anyhow::Error::new(elapsed)
                    .context(format!("Request timeout after {:?}", self.timeout)),
            })?
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &SlurmResource,
    ) -> Result<T, UpstreamError> {
        let resp = self.client.get(url).send().await.map_err(|e| match e {
            reqwest_middleware::Error::Reqwest(e) if e.is_builder() => {
                UpstreamError::RequestConstruction(e.into())
            }
            e => UpstreamError::Unreachable {
                subject: resource.subject(),
                source: e.into(),
            },
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, %resource, "slurmrestd answered non-200");
            return Err(UpstreamError::NonSuccess(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| UpstreamError::BodyRead(e.into()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl SlurmRestApi for SlurmRestClient {
    async fn get_clusters(&self) -> Result<ClusterResponse, UpstreamError> {
        self.fetch(SlurmResource::Clusters).await
    }

    async fn get_jobs(&self) -> Result<SlurmJobsResponse, UpstreamError> {
        self.fetch(SlurmResource::Jobs).await
    }

    async fn get_job(&self, job_id: &str) -> Result<JobDetailsResponse, UpstreamError> {
        self.fetch(SlurmResource::Job(job_id.to_owned())).await
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use domain::{service::SlurmRestApi, UpstreamError};
    use indoc::indoc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::SlurmRestClient;
    use crate::infrastructure::http::header::{SLURM_USER_NAME, SLURM_USER_TOKEN};
    use crate::infrastructure::http::middleware::{MiddlewareMenu, SlurmAuthMiddleware};

    pub const USER: &str = "slurm";
    pub const TOKEN: &str = "t0k3n";

    pub fn client_with_timeout(base: impl Into<String>, timeout: Duration) -> SlurmRestClient {
        let auth = Arc::new(SlurmAuthMiddleware::new(USER, TOKEN).unwrap());
        SlurmRestClient::new(base, MiddlewareMenu::builder().auth(auth).build().make(), timeout)
    }

    pub fn client(base: impl Into<String>) -> SlurmRestClient {
        client_with_timeout(base, Duration::from_secs(5))
    }

    /// A base URL nothing is listening on.
    pub async fn refused_base() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_headers_and_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/slurmdb/v0.0.41/clusters/")
            .match_header(SLURM_USER_NAME, USER)
            .match_header(SLURM_USER_TOKEN, TOKEN)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"clusters":[{"name":"linux"}]}"#)
            .create_async()
            .await;

        let resp = client(server.url()).get_clusters().await.unwrap();
        assert_eq!(Some("linux"), resp.clusters().next().and_then(|c| c.name()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_job_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/slurmdb/v0.0.41/job/4242")
            .with_status(200)
            .with_body(indoc! {r#"
                {"jobs": [{"job_id": 4242, "state": {"current": ["RUNNING"], "reason": "None"}}]}
            "#})
            .create_async()
            .await;

        let resp = client(server.url()).get_job("4242").await.unwrap();
        assert_eq!(4242, resp.jobs[0].job_id);
        assert_eq!(["RUNNING"], resp.jobs[0].state.current.as_slice());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/slurm/v0.0.41/jobs/")
            .with_status(500)
            .with_body(r#"{"errors":[{"error":"boom"}]}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/slurmdb/v0.0.41/job/1")
            .with_status(404)
            .with_body(r#"{"jobs":[]}"#)
            .create_async()
            .await;

        let client = client(server.url());
        assert!(matches!(client.get_jobs().await, Err(UpstreamError::NonSuccess(500))));
        assert!(matches!(client.get_job("1").await, Err(UpstreamError::NonSuccess(404))));
    }

    #[tokio::test]
    async fn test_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/slurm/v0.0.41/jobs/")
            .with_status(200)
            .with_body(r#"{"jobs":[{"job_state":"RUNNING"}]}"#)
            .create_async()
            .await;

        let err = client(server.url()).get_jobs().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let err = client(refused_base().await).get_clusters().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Unreachable { subject: "cluster", .. }));
        assert_eq!("Failed to fetch cluster data", err.to_string());
    }

    #[tokio::test]
    async fn test_timeout() {
        // Accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());

        let client = client_with_timeout(base, Duration::from_millis(200));
        let err = client.get_jobs().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Unreachable { subject: "job", .. }));
        drop(listener);
    }

    #[tokio::test]
    async fn test_timeout_covers_body() {
        // Headers and the start of the body arrive, the rest never does.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"jobs\":")
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        let client = client_with_timeout(base, Duration::from_millis(200));
        let err = tokio::time::timeout(Duration::from_secs(3), client.get_jobs())
            .await
            .expect("stalled body was not cut off")
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Unreachable { subject: "job", .. }));
    }

    #[tokio::test]
    async fn test_bad_address() {
        let err = client("http://not a host:6820/").get_jobs().await.unwrap_err();
        assert!(matches!(err, UpstreamError::RequestConstruction(_)));

        let err = client("http://10.0.0.5:port/").get_jobs().await.unwrap_err();
        assert!(matches!(err, UpstreamError::RequestConstruction(_)));
    }
}
