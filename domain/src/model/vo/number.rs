use serde::{Deserialize, Serialize};

use crate::model::nullable;

/// slurmrestd 对可选/无限数值的包装：`{"set": true, "infinite": false, "number": 42}`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlurmNumber {
    /// 是否设置了值
    #[serde(deserialize_with = "nullable::or_default")]
    pub set: bool,
    /// 是否为无限
    #[serde(deserialize_with = "nullable::or_default")]
    pub infinite: bool,
    /// 数值
    #[serde(deserialize_with = "nullable::or_default")]
    pub number: i64,
}

impl SlurmNumber {
    /// Unwraps to the bare `number`, whatever `set` and `infinite` say.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.number
    }
}

impl From<SlurmNumber> for i64 {
    fn from(n: SlurmNumber) -> Self {
        n.value()
    }
}
