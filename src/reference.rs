//! Reference portrait selection and loading
//!
//! Provides the fixed set of reference portraits used as the second subject
//! of the composite photo. Selection is uniform per call; the RNG is passed
//! in so tests can seed it.

use crate::models::InlineImage;
use crate::{Error, Result};
use rand::prelude::*;
use std::fs;
use std::path::PathBuf;

/// One entry of the fixed reference-portrait catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceImage {
    pub file: &'static str,
    pub mime_type: &'static str,
}

/// The fixed reference-portrait catalog.
pub const REFERENCE_IMAGES: &[ReferenceImage] = &[
    ReferenceImage {
        file: "uksnote1.jpeg",
        mime_type: "image/jpeg",
    },
    ReferenceImage {
        file: "uksnote2.jpeg",
        mime_type: "image/jpeg",
    },
];

/// Read-only store over the reference-portrait catalog.
pub struct ReferenceImageStore {
    asset_dir: PathBuf,
    catalog: &'static [ReferenceImage],
}

impl ReferenceImageStore {
    /// Store backed by `asset_dir` and the fixed product catalog.
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            catalog: REFERENCE_IMAGES,
        }
    }

    /// Uniform random pick over the catalog, re-evaluated per call.
    pub fn pick(&self, rng: &mut impl Rng) -> ReferenceImage {
        *self
            .catalog
            .choose(rng)
            .expect("reference catalog is never empty")
    }

    /// Load the backing asset for `image`.
    ///
    /// A missing or unreadable asset is a fatal configuration error, not a
    /// degrade-and-continue case: synthesis has no second subject without it.
    pub fn load(&self, image: ReferenceImage) -> Result<InlineImage> {
        let path = self.asset_dir.join(image.file);
        let bytes = fs::read(&path).map_err(|e| {
            Error::ReferenceAsset(format!("failed to read {}: {}", path.display(), e))
        })?;

        Ok(InlineImage {
            bytes,
            mime_type: image.mime_type.to_string(),
        })
    }
}
