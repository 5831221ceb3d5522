use serde::{Deserialize, Serialize};

/// 作业概要，由 slurmrestd 的作业信息展平得到
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: i64,
    pub name: String,
    pub user_name: String,
    pub partition: String,
    /// `job_state` 的第一个值，没有则为空字符串
    pub state: String,
    /// 提交时间（Unix 秒）
    pub submit_time: i64,
    /// 开始时间（Unix 秒）
    pub start_time: i64,
    /// 结束时间（Unix 秒）
    pub end_time: i64,
    pub nodes: String,
    /// 核心数
    pub cpus: i64,
    /// 每节点内存（MB）
    pub memory_per_node: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResponse {
    pub jobs: Vec<Job>,
}
