use reqwest::header::HeaderValue;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

use crate::infrastructure::http::header::{SLURM_USER_NAME, SLURM_USER_TOKEN};

/// Stamps the slurmrestd credentials on every outgoing request.
pub struct SlurmAuthMiddleware {
    user_name: HeaderValue,
    user_token: HeaderValue,
}

impl SlurmAuthMiddleware {
    pub fn new(user_name: &str, user_token: &str) -> anyhow::Result<Self> {
        let mut user_token = HeaderValue::from_str(user_token)?;
        user_token.set_sensitive(true);
        Ok(Self {
            user_name: HeaderValue::from_str(user_name)?,
            user_token,
        })
    }
}

#[async_trait::async_trait]
impl Middleware for SlurmAuthMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(SLURM_USER_NAME, self.user_name.clone());
        headers.insert(SLURM_USER_TOKEN, self.user_token.clone());
        next.run(req, extensions).await
    }
}
