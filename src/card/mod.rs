pub mod basic;
pub mod images;


pub use basic::{Card, CardCodeError, Rank, Suit};
pub use images::{ImageLoadError, ImageStore, DEFAULT_IMAGE_DIR};
