//! Image asset resolution
//!
//! This module resolves the asset names a knob skin is made of into decoded
//! images: `AssetCatalog` maps names to PNG files in a directory and caches
//! decodes, `ImageSet` groups the five conventional slots a skin fills, and
//! `SlotNames` derives those slot names from a base title.
//!
//! Missing assets are a normal condition, not an error: a name with no
//! matching file resolves to `None` and the affected slot stays empty.

pub mod catalog;
pub mod image_set;

pub use catalog::{AssetCatalog, KnobImage};
pub use image_set::{ImageSet, SlotNames};
