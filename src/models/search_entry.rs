use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One row of a user's search history. The collection is schema-flexible
/// beyond these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: ObjectId,
    pub search_date: i64,

    #[serde(default)]
    pub query: Option<String>,
}
