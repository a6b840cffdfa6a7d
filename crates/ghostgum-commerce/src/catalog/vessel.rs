//! Ceramic vessel types.
//!
//! Vessels are the refillable stoneware jars sold alongside the skincare
//! range. They live in their own gallery with their own detail pages, but
//! feed the same cart as products.

use crate::cart::CartCandidate;
use crate::ids::{LineItemId, VesselId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Tier/size configuration of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselVariantKey {
    /// Two-tier stack.
    Duo,
    /// Three-tier stack.
    Trio,
    /// 150ml single jar.
    Ml150,
    /// 300ml single jar.
    Ml300,
}

impl VesselVariantKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            VesselVariantKey::Duo => "duo",
            VesselVariantKey::Trio => "trio",
            VesselVariantKey::Ml150 => "150ml",
            VesselVariantKey::Ml300 => "300ml",
        }
    }
}

/// A configuration of a vessel (tier count or jar size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VesselVariant {
    /// Configuration key.
    pub key: VesselVariantKey,
    /// Display label (e.g. "The Duo (2-tier)").
    pub label: String,
    /// One-line pitch.
    pub blurb: String,
    /// What goes in each tier.
    pub composition: Vec<String>,
    /// Hero image URL.
    pub image: Option<String>,
}

/// A ceramic vessel in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vessel {
    /// Gallery identifier (routable).
    pub id: VesselId,
    /// Display name.
    pub name: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Long-form description.
    pub description: String,
    /// Price of the base configuration.
    pub price: Money,
    /// Card image URL.
    pub image: String,
    /// Badge labels shown on the card.
    pub badges: Vec<String>,
    /// Available configurations.
    pub variants: Vec<VesselVariant>,
    /// Materials and glaze copy.
    pub materials: String,
    /// Care instructions.
    pub care: String,
}

impl Vessel {
    /// Look up a variant by key.
    pub fn variant(&self, key: VesselVariantKey) -> Option<&VesselVariant> {
        self.variants.iter().find(|v| v.key == key)
    }

    /// Build a cart candidate for this vessel.
    ///
    /// Vessel configurations share the gallery id suffixed with the
    /// variant key so that a Duo and a Trio stay separate cart lines.
    pub fn cart_candidate(&self, variant: Option<&VesselVariant>) -> CartCandidate {
        let handle = self.id.as_str().into();
        match variant {
            Some(v) => CartCandidate {
                id: LineItemId::new(format!("{}:{}", self.id, v.key.as_str())),
                handle,
                title: format!("{} — {}", self.name, v.label),
                price: self.price,
                image: v.image.clone().or_else(|| Some(self.image.clone())),
            },
            None => CartCandidate {
                id: LineItemId::from(&self.id),
                handle,
                title: self.name.clone(),
                price: self.price,
                image: Some(self.image.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_variant_key_str() {
        assert_eq!(VesselVariantKey::Duo.as_str(), "duo");
        assert_eq!(VesselVariantKey::Ml150.as_str(), "150ml");
    }

    #[test]
    fn test_vessel_cart_candidate() {
        let catalog = Catalog::ghost_gum();
        let vessel = catalog.vessel(&"Cascade".into()).unwrap();

        let base = vessel.cart_candidate(None);
        assert_eq!(base.id.as_str(), "Cascade");

        let trio = vessel.variant(VesselVariantKey::Trio).unwrap();
        let candidate = vessel.cart_candidate(Some(trio));
        assert_eq!(candidate.id.as_str(), "Cascade:trio");
        assert_ne!(candidate.id, base.id);
    }
}
