use crate::common::{DomainError, DomainResult};
use crate::config::{AssetConfig, ASSET_DIR_ENV};
use crate::domains::scene::{AssetKind, AssetSource};
use image::RgbaImage;
use std::env;
use std::path::{Path, PathBuf};

/// Loads scene images from a directory on disk.
pub struct FilesystemAssetSource {
    base: PathBuf,
    names: AssetConfig,
}

impl FilesystemAssetSource {
    /// Precedence: explicit `names.dir` -> `TAPFIELD_ASSET_DIR` -> ./assets -> current directory.
    pub fn new(names: AssetConfig) -> Self {
        let base = names.dir.clone().unwrap_or_else(|| {
            if let Ok(v) = env::var(ASSET_DIR_ENV) {
                PathBuf::from(v)
            } else {
                let cwd_default = Path::new("assets");
                if cwd_default.exists() { cwd_default.to_path_buf() } else { PathBuf::from(".") }
            }
        });
        Self { base, names }
    }

    pub fn path_of(&self, kind: AssetKind) -> PathBuf {
        self.base.join(self.names.file_name(kind))
    }
}

impl AssetSource for FilesystemAssetSource {
    fn load_image(&self, kind: AssetKind) -> DomainResult<RgbaImage> {
        let path = self.path_of(kind);
        let image = image::open(&path).map_err(|source| DomainError::AssetLoad { path, source })?;
        Ok(image.to_rgba8())
    }
}
