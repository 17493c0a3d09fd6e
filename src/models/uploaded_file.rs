use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub filename: String,
    pub upload_date: i64,

    // size in bytes
    pub size: i64,

    // "pending" | "processed" | "failed"
    pub status: String,

    pub records_count: i64,
    pub uploaded_by: String,
}
