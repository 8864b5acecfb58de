use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::content::models::Asset;
use crate::errors::AppError;

/// Reads bundled assets from a directory on disk.
///
/// Existence is not checked up front: a missing file surfaces as `NotFound`
/// on the request that asks for it.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Asset names are plain file names; anything with a path component is rejected.
    fn path_for(&self, asset: &Asset) -> Result<PathBuf, AppError> {
        let name = asset.name.as_str();
        let is_plain = !name.is_empty()
            && !name.contains(['/', '\\'])
            && name != "."
            && name != "..";
        if !is_plain {
            return Err(AppError::NotFound(format!("Asset '{name}' not found")));
        }
        Ok(self.root.join(name))
    }

    pub async fn read(&self, asset: &Asset) -> Result<Bytes, AppError> {
        let path = self.path_for(asset)?;
        match tokio::fs::read(&path).await {
            Ok(data) => {
                debug!(asset = %asset.name, bytes = data.len(), "Asset read");
                Ok(Bytes::from(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Bundled asset missing");
                Err(AppError::NotFound(format!("Asset '{}' not found", asset.name)))
            }
            Err(e) => Err(AppError::Asset(e)),
        }
    }
}
