use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub sensor_id: String,

    // "info" | "warning" | "critical"
    pub alert_level: String,

    pub timestamp: i64,
    pub resolved: bool,

    #[serde(default)]
    pub message: Option<String>,
}
