use std::fmt;

pub const SLURM_API_VERSION: &str = "v0.0.41";

/// Upstream slurmrestd endpoints the proxy reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlurmResource {
    /// `slurmdb/v0.0.41/clusters/`
    Clusters,
    /// `slurm/v0.0.41/jobs/`
    Jobs,
    /// `slurmdb/v0.0.41/job/{job_id}`
    Job(String),
}

impl SlurmResource {
    /// Path segments relative to the daemon root. An empty trailing segment
    /// keeps the trailing slash the listing endpoints expect.
    pub fn segments(&self) -> [&str; 4] {
        match self {
            Self::Clusters => ["slurmdb", SLURM_API_VERSION, "clusters", ""],
            Self::Jobs => ["slurm", SLURM_API_VERSION, "jobs", ""],
            Self::Job(id) => ["slurmdb", SLURM_API_VERSION, "job", id.as_str()],
        }
    }

    /// What the resource holds, used in error messages.
    pub const fn subject(&self) -> &'static str {
        match self {
            Self::Clusters => "cluster",
            Self::Jobs | Self::Job(_) => "job",
        }
    }
}

impl fmt::Display for SlurmResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}
