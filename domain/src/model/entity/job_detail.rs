use serde::{Deserialize, Serialize};

use crate::model::nullable;

/// `GET slurmdb/v0.0.41/job/{job_id}` 的响应
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetailsResponse {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub jobs: Vec<JobDetail>,
}

/// 作业详情，来自 slurmdbd 的记账数据
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDetail {
    #[serde(deserialize_with = "nullable::or_default")]
    pub job_id: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub name: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub account: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub comment: JobComment,
    /// 分配的节点数
    #[serde(deserialize_with = "nullable::or_default")]
    pub allocation_nodes: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub cluster: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub partition: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub nodes: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub user: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub group: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub working_directory: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub state: JobDetailState,
    #[serde(deserialize_with = "nullable::or_default")]
    pub time: JobTime,
    #[serde(deserialize_with = "nullable::or_default")]
    pub tres: JobTres,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobComment {
    #[serde(deserialize_with = "nullable::or_default")]
    pub administrator: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub job: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub system: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDetailState {
    #[serde(deserialize_with = "nullable::or_default")]
    pub current: Vec<String>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub reason: String,
}

/// 作业时间（Unix 秒，`elapsed` 为秒数）
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTime {
    #[serde(deserialize_with = "nullable::or_default")]
    pub elapsed: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub eligible: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub end: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub start: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub submission: i64,
}

/// 已分配与申请的可追踪资源
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTres {
    #[serde(deserialize_with = "nullable::or_default")]
    pub allocated: Vec<Tres>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub requested: Vec<Tres>,
}

/// 可追踪资源（TRES），如 cpu、mem、gres/gpu
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tres {
    #[serde(deserialize_with = "nullable::or_default")]
    pub r#type: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub name: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub id: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub count: i64,
}
