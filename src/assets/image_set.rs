//! Five-slot image sets derived from a base asset name
//!
//! A knob skin is a family of assets named by convention: the base name for
//! the normal state, plus "-highlighted", "-disabled", "-background", and
//! "-foreground" variants. The picker hands the screen a base name; this
//! module turns it into the concrete slot names and resolved images.

use crate::assets::{AssetCatalog, KnobImage};

/// The five conventional asset names derived from a base title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotNames {
    /// Normal-state foreground asset name (the base title itself)
    pub normal: String,
    /// Highlighted-state foreground asset name
    pub highlighted: String,
    /// Disabled-state foreground asset name
    pub disabled: String,
    /// Background asset name
    pub background: String,
    /// Foreground overlay asset name
    pub foreground: String,
}

impl SlotNames {
    /// Derive the five conventional names for a base title
    pub fn for_title(title: &str) -> Self {
        Self {
            normal: title.to_string(),
            highlighted: format!("{title}-highlighted"),
            disabled: format!("{title}-disabled"),
            background: format!("{title}-background"),
            foreground: format!("{title}-foreground"),
        }
    }
}

/// A resolved set of knob images, one per slot
///
/// Every slot is optional: a skin does not have to ship all five assets,
/// and a missing asset simply leaves its slot empty.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    /// Normal-state foreground image
    pub normal: Option<KnobImage>,
    /// Highlighted-state foreground image
    pub highlighted: Option<KnobImage>,
    /// Disabled-state foreground image
    pub disabled: Option<KnobImage>,
    /// Background image
    pub background: Option<KnobImage>,
    /// Foreground overlay image
    pub foreground: Option<KnobImage>,
}

impl ImageSet {
    /// Resolve the five conventional slots for a base title through a catalog
    pub fn resolve(catalog: &AssetCatalog, title: &str) -> Self {
        let names = SlotNames::for_title(title);
        Self {
            normal: catalog.image(&names.normal),
            highlighted: catalog.image(&names.highlighted),
            disabled: catalog.image(&names.disabled),
            background: catalog.image(&names.background),
            foreground: catalog.image(&names.foreground),
        }
    }
}
