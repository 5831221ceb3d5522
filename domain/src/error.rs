/// Why a call to slurmrestd did not produce the expected payload.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The address/port/path do not form a valid request.
    #[error("Failed to create request")]
    RequestConstruction(#[source] anyhow::Error),

    /// Connection failure, or no answer before the timeout.
    #[error("Failed to fetch {subject} data")]
    Unreachable {
        subject: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Non-200 response from SLURM REST API")]
    NonSuccess(u16),

    #[error("Failed to read response body")]
    BodyRead(#[source] anyhow::Error),

    #[error("Failed to parse response")]
    Decode(#[from] serde_json::Error),
}
