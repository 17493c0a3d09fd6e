use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    // both enforced unique at the storage layer
    pub email: String,
    pub username: String,

    // "viewer" | "operator" | "admin"
    #[serde(default)]
    pub role: Option<String>,
}
