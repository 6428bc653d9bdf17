use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use image::DynamicImage;
use thiserror::Error;
use tracing::{debug, warn};

use super::basic::{Rank, Suit};

/// Conventional location of the card image assets, relative to the
/// working directory of the host application.
pub const DEFAULT_IMAGE_DIR: &str = "resources/card.images";

/// An expected image file was missing or could not be decoded.
///
/// This is the only error the image subsystem produces. [`Card::load`]
/// catches it, logs the attempted path, and leaves the image slot
/// empty; it never reaches the constructor's caller.
///
/// [`Card::load`]: super::basic::Card::load
#[derive(Debug, Error)]
#[error("could not read card image at {path}: {source}")]
pub struct ImageLoadError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// Resolves and decodes card image assets from a directory on disk.
///
/// Faces follow the `<rank>.<suit>.png` naming convention (raw
/// indices); the universal backside lives at `back.png`. The backside
/// is decoded at most once per store and shared across every card
/// built from it; wrap the store in an `Arc` to construct cards from
/// multiple threads.
#[derive(Debug)]
pub struct ImageStore {
    dir: PathBuf,
    back: OnceLock<Option<Arc<DynamicImage>>>,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            back: OnceLock::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the face asset for a rank/suit pair.
    pub fn face_path(&self, rank: Rank, suit: Suit) -> PathBuf {
        self.dir
            .join(format!("{}.{}.png", rank.value(), suit.value()))
    }

    /// Path of the shared backside asset.
    pub fn back_path(&self) -> PathBuf {
        self.dir.join("back.png")
    }

    /// Reads and decodes the face asset for a card.
    ///
    /// A Joker has no face file of its own; its face resolves to the
    /// backside asset.
    pub fn load_face(&self, rank: Rank, suit: Suit) -> Result<Arc<DynamicImage>, ImageLoadError> {
        let path = if rank == Rank::Joker {
            self.back_path()
        } else {
            self.face_path(rank, suit)
        };
        load(path)
    }

    /// The shared backside image, decoded on first access and cached
    /// for the lifetime of the store.
    ///
    /// The first outcome is authoritative: a failed load is logged
    /// once and memoized as `None`, so later calls do not retry the
    /// disk read.
    pub fn back(&self) -> Option<Arc<DynamicImage>> {
        self.back
            .get_or_init(|| {
                let path = self.back_path();
                match load(path) {
                    Ok(image) => {
                        debug!(path = %self.back_path().display(), "Loaded shared card back image");
                        Some(image)
                    }
                    Err(err) => {
                        warn!(path = %err.path.display(), "Failed to load card back image");
                        None
                    }
                }
            })
            .clone()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_DIR)
    }
}

fn load(path: PathBuf) -> Result<Arc<DynamicImage>, ImageLoadError> {
    image::open(&path)
        .map(Arc::new)
        .map_err(|source| ImageLoadError { path, source })
}
