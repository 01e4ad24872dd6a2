use crate::api::offers_api::OffersApi;
use crate::config::Config;
use crate::db::sqlite::{OfferStorage, PopulateSummary};
use crate::error::PullError;
use crate::types::offers::OfferRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// One full ingestion pass: wipe the stale snapshot, fetch the catalog,
/// write it, close. The process has nothing else to do afterwards.
pub async fn run(cfg: &Config) -> Result<PopulateSummary, PullError> {
    remove_stale_database(&cfg.database_path)?;

    let client = OffersApi::client(cfg);
    let offers = OffersApi::fetch_offers(&client, &cfg.endpoint).await?;

    write_snapshot(&cfg.database_path, &offers).await
}

/// Create the database file and write one fetched catalog into it.
pub async fn write_snapshot(
    path: &Path,
    offers: &[OfferRecord],
) -> Result<PopulateSummary, PullError> {
    let storage = OfferStorage::open(path).await?;
    storage.init_schema().await?;
    let summary = storage.populate(offers).await?;
    storage.close().await;

    info!(
        offers = summary.offers,
        attributes = summary.attributes,
        images = summary.images,
        database = %path.display(),
        "snapshot written"
    );
    Ok(summary)
}

/// Delete any database file left over from a previous run. Absence is fine;
/// every pass rebuilds the snapshot from scratch. A hard-killed run can also
/// leave journal/WAL sidecars next to the file, so those go too.
pub fn remove_stale_database(path: &Path) -> Result<(), PullError> {
    remove_if_present(path)?;
    for suffix in ["-journal", "-wal", "-shm"] {
        let mut sidecar = path.as_os_str().to_os_string();
        sidecar.push(suffix);
        remove_if_present(Path::new(&sidecar))?;
    }
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<(), PullError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed stale database file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no stale database file");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
