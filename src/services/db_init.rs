use chrono::Utc;
use futures_util::StreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Database, IndexModel,
};

use crate::models::UploadedFile;

/// Collections managed by the initializer, in creation order.
pub const COLLECTIONS: [&str; 4] = ["uploaded_files", "search_history", "alerts", "users"];

/// Full bootstrap sequence: collections, then indexes, then the seed row.
pub async fn initialize(db: &Database) -> Result<(), String> {
    ensure_collections(db).await?;
    ensure_indexes(db).await?;
    seed_uploaded_files(db).await?;
    Ok(())
}

/// Create any of the managed collections that do not exist yet.
/// Check-then-create, so a re-run is a no-op rather than an error.
pub async fn ensure_collections(db: &Database) -> Result<(), String> {
    let existing = db
        .list_collection_names(None)
        .await
        .map_err(|e| e.to_string())?;

    for name in COLLECTIONS {
        if existing.iter().any(|c| c == name) {
            continue;
        }

        db.create_collection(name, None)
            .await
            .map_err(|e| e.to_string())?;
        tracing::info!("created collection {}", name);
    }

    Ok(())
}

pub async fn ensure_indexes(db: &Database) -> Result<(), String> {
    // uploaded_files: newest uploads first, plus filename/status lookups
    {
        let col = db.collection::<Document>("uploaded_files");
        for keys in [
            doc! { "upload_date": -1 },
            doc! { "filename": 1 },
            doc! { "status": 1 },
        ] {
            let model = IndexModel::builder().keys(keys).build();

            col.create_index(model, None)
                .await
                .map_err(|e| e.to_string())?;
        }
    }

    // search_history: recent searches first, and per-user lookups
    {
        let col = db.collection::<Document>("search_history");
        for keys in [doc! { "search_date": -1 }, doc! { "user_id": 1 }] {
            let model = IndexModel::builder().keys(keys).build();

            col.create_index(model, None)
                .await
                .map_err(|e| e.to_string())?;
        }
    }

    // alerts: scan by recency, sensor, severity, open/resolved
    {
        let col = db.collection::<Document>("alerts");
        for keys in [
            doc! { "timestamp": -1 },
            doc! { "sensor_id": 1 },
            doc! { "alert_level": 1 },
            doc! { "resolved": 1 },
        ] {
            let model = IndexModel::builder().keys(keys).build();

            col.create_index(model, None)
                .await
                .map_err(|e| e.to_string())?;
        }
    }

    // users: unique email
    {
        let col = db.collection::<Document>("users");
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // users: unique username
    {
        let col = db.collection::<Document>("users");
        let model = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Insert the smoke-test row into `uploaded_files`.
///
/// No unique key on the seed row; a re-run inserts another copy.
pub async fn seed_uploaded_files(db: &Database) -> Result<UploadedFile, String> {
    let files = db.collection::<UploadedFile>("uploaded_files");

    let seed = UploadedFile {
        id: ObjectId::new(),
        filename: "initial_test.csv".to_string(),
        upload_date: Utc::now().timestamp(),
        size: 1024,
        status: "processed".to_string(),
        records_count: 100,
        uploaded_by: "system".to_string(),
    };

    files
        .insert_one(&seed, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(seed)
}

/// Per-collection index names read back from the server, for the
/// post-init log line.
pub async fn summary(db: &Database) -> Result<Vec<(String, Vec<String>)>, String> {
    let mut out = Vec::new();

    for name in COLLECTIONS {
        let col = db.collection::<Document>(name);

        let mut cursor = col.list_indexes(None).await.map_err(|e| e.to_string())?;

        let mut index_names: Vec<String> = Vec::new();
        while let Some(res) = cursor.next().await {
            let index = res.map_err(|e| e.to_string())?;
            if let Some(n) = index.options.and_then(|o| o.name) {
                index_names.push(n);
            }
        }

        out.push((name.to_string(), index_names));
    }

    Ok(out)
}
