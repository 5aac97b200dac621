//! Fetch-and-persist execution of a download plan.

use std::path::Path;

use crate::error::LoadError;
use crate::fetch::{self, FetchOptions};
use crate::fs_ops;
use crate::observer::LoadObserver;
use crate::rewrite::DownloadPlan;

/// Fetches every plan entry and writes it under `assets_dir`, in plan order.
///
/// The directory is created first; pre-existing is success. Each asset is
/// fetched then written before the next one starts. Fails fast: assets
/// already on disk are kept when a later entry fails, and the caller decides
/// what to do with partial output.
pub fn execute(
    plan: &DownloadPlan,
    assets_dir: &Path,
    options: &FetchOptions,
    observer: &dyn LoadObserver,
) -> Result<(), LoadError> {
    fs_ops::create_directory(assets_dir)?;

    for asset in plan {
        let bytes = fetch::fetch(asset.absolute_url.as_str(), options)?;
        let path = assets_dir.join(&asset.local_file_name);
        fs_ops::write_file(&path, &bytes)?;
        tracing::info!(url = %asset.absolute_url, path = %path.display(), "asset saved");
        observer.asset_saved(&asset.absolute_url, &path);
    }

    Ok(())
}
