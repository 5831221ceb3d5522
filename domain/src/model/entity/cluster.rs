use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// `GET slurmdb/v0.0.41/clusters/` 的响应，原样透传
///
/// The upstream object is kept as-is, nulls and unknown keys included, and
/// written back unchanged. Decoding only checks that `clusters`, when
/// present and not null, is a list of objects.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ClusterResponse(Map<String, Value>);

impl TryFrom<Map<String, Value>> for ClusterResponse {
    type Error = String;

    fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
        match body.get("clusters") {
            None | Some(Value::Null) => {}
            Some(Value::Array(clusters)) => {
                if let Some(i) = clusters.iter().position(|c| !c.is_object()) {
                    return Err(format!("clusters[{i}] is not an object"));
                }
            }
            Some(_) => return Err("`clusters` is not a list".to_owned()),
        }
        Ok(Self(body))
    }
}

impl Serialize for ClusterResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl ClusterResponse {
    pub fn clusters(&self) -> impl Iterator<Item = Cluster<'_>> {
        self.0
            .get("clusters")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .map(Cluster)
    }
}

/// 集群，借用透传响应中的对象
#[derive(Debug, Clone, Copy)]
pub struct Cluster<'a>(&'a Map<String, Value>);

impl<'a> Cluster<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// 节点列表表达式
    pub fn nodes(&self) -> Option<&'a str> {
        self.0.get("nodes").and_then(Value::as_str)
    }
}
