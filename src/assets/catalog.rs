//! Directory-backed image asset catalog
//!
//! Resolves asset names to decoded PNG images the way a host application
//! bundle does: a name maps to `<root>/<name>.png`, a missing file is an
//! absent image rather than an error, and successful decodes are cached so
//! repeated lookups stay cheap.

use crate::error::{KnobDemoError, Result};
use image::{DynamicImage, GenericImageView};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// A named, decoded image handle
///
/// Cloning is cheap: the pixel data is shared behind an `Arc`.
#[derive(Clone)]
pub struct KnobImage {
    name: String,
    image: Arc<DynamicImage>,
}

impl KnobImage {
    pub(crate) fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            image: Arc::new(image),
        }
    }

    /// The asset name this image was resolved from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether two handles share the same decoded pixel data
    pub fn shares_pixels_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl fmt::Debug for KnobImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("KnobImage")
            .field("name", &self.name)
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}

/// Named-image lookup over a directory of PNG files
///
/// Lookups are lazy: nothing is read until a name is requested. Decoded
/// images are cached by name for the lifetime of the catalog, so a file
/// replaced on disk after its first lookup keeps serving the cached pixels.
#[derive(Debug)]
pub struct AssetCatalog {
    root: PathBuf,
    cache: Mutex<HashMap<String, KnobImage>>,
}

impl AssetCatalog {
    /// Create a catalog over the given directory.
    ///
    /// The directory does not have to exist; every lookup in a missing
    /// directory simply resolves to an absent image.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Directory this catalog resolves names in
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an asset name to an image.
    ///
    /// Returns `None` for a missing file and also for a file that fails to
    /// decode; decode failures are logged, since they usually mean a broken
    /// asset rather than an intentionally absent one.
    pub fn image(&self, name: &str) -> Option<KnobImage> {
        if let Some(hit) = self.cache.lock().get(name) {
            return Some(hit.clone());
        }

        match self.load_image(name) {
            Ok(Some(image)) => {
                self.cache.lock().insert(name.to_string(), image.clone());
                Some(image)
            }
            Ok(None) => {
                debug!("No asset named {:?} in {}", name, self.root.display());
                None
            }
            Err(e) => {
                warn!("Failed to load asset {:?}: {}", name, e);
                None
            }
        }
    }

    fn load_image(&self, name: &str) -> Result<Option<KnobImage>> {
        let path = self.root.join(format!("{name}.png"));
        if !path.exists() {
            return Ok(None);
        }

        let image = image::open(&path).map_err(|e| {
            // Preserve error chain by wrapping the source error
            KnobDemoError::AssetDecodeFailed(Box::new(e))
        })?;

        debug!("Loaded asset {:?} from {}", name, path.display());
        Ok(Some(KnobImage::new(name, image)))
    }
}
