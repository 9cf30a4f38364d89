//! Store wiring: which backend serves the three collections.

use std::sync::Arc;

use fitclub_store::{ContactStore, InMemoryStore, MongoStore, PaymentStore, UserStore};

/// Connection string used when `MONGODB_URI` is not set.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017/FitnessClub";

/// Long-lived collection handles injected into every request.
///
/// Built once at startup; handlers share them via an `Extension` rather
/// than reaching for a global.
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub payments: Arc<dyn PaymentStore>,
    pub contacts: Arc<dyn ContactStore>,
}

/// Select the backend from the environment.
///
/// `USE_PERSISTENT_STORE=true` connects to MongoDB (`MONGODB_URI`,
/// defaulting to the local club database); anything else serves from
/// memory, which is what the test suite runs against.
pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        build_mongo_services().await
    } else {
        build_in_memory_services()
    }
}

fn build_in_memory_services() -> AppServices {
    let store = Arc::new(InMemoryStore::new());
    AppServices {
        users: store.clone(),
        payments: store.clone(),
        contacts: store,
    }
}

async fn build_mongo_services() -> AppServices {
    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());

    let store = MongoStore::connect(&uri)
        .await
        .expect("failed to connect to MongoDB");
    tracing::info!("connected to MongoDB");

    let store = Arc::new(store);
    AppServices {
        users: store.clone(),
        payments: store.clone(),
        contacts: store,
    }
}
