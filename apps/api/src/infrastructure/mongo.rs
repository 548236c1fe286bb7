use std::time::Duration;

use bson::doc;
use mongodb::{options::ClientOptions, Client, Database};

/// Upper bound for establishing the initial connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to MongoDB and verifies the deployment is reachable
///
/// # Arguments
/// * `uri` - MongoDB connection string
/// * `db_name` - Database holding the `players` and `teams` collections
///
/// # Returns
/// * `Ok(Database)` - Handle backed by the driver's connection pool
/// * `Err(mongodb::error::Error)` - If the URI is invalid or the ping fails
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);

    let client = Client::with_options(options)?;
    let db = client.database(db_name);

    // Test the connection
    db.run_command(doc! { "ping": 1 }, None).await?;

    Ok(db)
}
