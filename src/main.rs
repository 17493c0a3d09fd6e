use mongodb::{bson::doc, Client};
use tracing_subscriber;

use iotdb_init::{config, services::db_init};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // Mongo connection
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&settings.mongodb_db);

    // fail fast before touching any collection
    db.run_command(doc! { "ping": 1 }, None)
        .await
        .expect("MongoDB is not reachable");
    tracing::info!(
        "connected to {} (database: {})",
        settings.mongodb_uri,
        settings.mongodb_db
    );

    db_init::initialize(&db)
        .await
        .expect("Database initialization failed");

    match db_init::summary(&db).await {
        Ok(collections) => {
            for (name, indexes) in collections {
                tracing::info!("collection {}: indexes [{}]", name, indexes.join(", "));
            }
        }
        Err(e) => tracing::warn!("could not read back index summary: {}", e),
    }

    println!("MongoDB initialized successfully!");
}
