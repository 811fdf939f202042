// src/seed.rs

use tracing::{error, info};
//
use crate::{
    administrator::Administrator,
    instructor::Instructor,
    member::Member,
    resource::Resource,
    store::{RecordStore, Result},
};

/// Fills every empty collection with its sample records.
///
/// Failures are logged per collection and never abort startup. Returns the
/// collections that received samples on this run.
pub async fn initialize(store: &dyn RecordStore) -> Vec<&'static str> {
    let mut seeded = Vec::new();

    seed_collection::<Member>(store, &mut seeded).await;
    seed_collection::<Instructor>(store, &mut seeded).await;
    seed_collection::<Administrator>(store, &mut seeded).await;

    seeded
}

async fn seed_collection<R: Resource>(store: &dyn RecordStore, seeded: &mut Vec<&'static str>) {
    match insert_samples::<R>(store).await {
        Ok(true) => seeded.push(R::COLLECTION),
        Ok(false) => {}
        Err(err) => {
            error!(collection = R::COLLECTION, error = %err, "failed to initialize sample data");
        }
    }
}

async fn insert_samples<R: Resource>(store: &dyn RecordStore) -> Result<bool> {
    if store.count(R::COLLECTION).await? > 0 {
        return Ok(false);
    }

    let samples = R::sample_documents()?;
    let count = samples.len();
    store.insert_many(R::COLLECTION, samples).await?;

    info!(collection = R::COLLECTION, count, "sample data initialized");

    Ok(true)
}
