// Library crate for the card game core
// This file exposes the public API for the surrounding application and integration tests

pub mod card;

// Re-export commonly used types for easier access
pub use card::{Card, CardCodeError, ImageLoadError, ImageStore, Rank, Suit, DEFAULT_IMAGE_DIR};
