use serde::Deserialize;

use super::SlurmNumber;
use crate::model::nullable;

/// `GET slurm/v0.0.41/jobs/` 的响应体，只保留用到的字段
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SlurmJobsResponse {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub jobs: Vec<SlurmJobInfo>,
}

/// slurmrestd 返回的单个作业
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SlurmJobInfo {
    #[serde(deserialize_with = "nullable::or_default")]
    pub job_id: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub name: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub user_name: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub partition: String,
    /// 作业状态列表，第一个为主状态
    #[serde(deserialize_with = "nullable::or_default")]
    pub job_state: Vec<String>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub submit_time: SlurmNumber,
    #[serde(deserialize_with = "nullable::or_default")]
    pub start_time: SlurmNumber,
    #[serde(deserialize_with = "nullable::or_default")]
    pub end_time: SlurmNumber,
    #[serde(deserialize_with = "nullable::or_default")]
    pub nodes: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub cpus: SlurmNumber,
    #[serde(deserialize_with = "nullable::or_default")]
    pub memory_per_node: SlurmNumber,
}
