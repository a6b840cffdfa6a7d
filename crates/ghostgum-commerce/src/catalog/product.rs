//! Product and variant types.

use crate::cart::CartCandidate;
use crate::ids::{LineItemId, ProductHandle, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product range classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    /// Core range, beef tallow base.
    BeefTallow,
    /// Premium range, camel tallow base.
    CamelTallow,
    /// Ceramic ware sold through the shop page.
    Ceramics,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::BeefTallow => "beef-tallow",
            ProductCategory::CamelTallow => "camel-tallow",
            ProductCategory::Ceramics => "ceramics",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beef-tallow" => Some(ProductCategory::BeefTallow),
            "camel-tallow" => Some(ProductCategory::CamelTallow),
            "ceramics" => Some(ProductCategory::Ceramics),
            _ => None,
        }
    }
}

/// Product form classification, used by the shop page filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Balm,
    Soap,
    LipBalm,
    Vessel,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Balm => "balm",
            ProductType::Soap => "soap",
            ProductType::LipBalm => "lip-balm",
            ProductType::Vessel => "vessel",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "balm" => Some(ProductType::Balm),
            "soap" => Some(ProductType::Soap),
            "lip-balm" => Some(ProductType::LipBalm),
            "vessel" => Some(ProductType::Vessel),
            _ => None,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// URL-friendly handle (unique, routable).
    pub handle: ProductHandle,
    /// Product name.
    pub title: String,
    /// Short description for listings.
    pub short_description: String,
    /// Key benefit bullets for the detail page.
    pub key_benefits: Vec<String>,
    /// Base formula ingredients.
    pub ingredients: Vec<String>,
    /// Card image URL.
    pub image: Option<String>,
    /// Base price; variants may override.
    pub price: Money,
    /// Original price when showing a markdown.
    pub compare_at_price: Option<Money>,
    /// Whether the refill subscription applies.
    pub subscription_eligible: bool,
    /// Badge labels shown on the card.
    pub badges: Vec<String>,
    /// Sourcing note.
    pub provenance: String,
    /// Fill volume (e.g. "50ml").
    pub volume: Option<String>,
    /// Range classification.
    pub category: ProductCategory,
    /// Form classification.
    pub product_type: ProductType,
    /// Variants, empty for single-formula products.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Look up a variant by id.
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Check if this product has variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Build a cart candidate for this product.
    ///
    /// With a variant, the line gets the composite `"handle:variant"` id
    /// and a "Title — Variant" display name, so variants never merge into
    /// one line. Without one, the handle itself is the id.
    pub fn cart_candidate(&self, variant: Option<&ProductVariant>) -> CartCandidate {
        match variant {
            Some(v) => CartCandidate {
                id: LineItemId::for_variant(&self.handle, &v.id),
                handle: self.handle.clone(),
                title: format!("{} — {}", self.title, v.title),
                price: v.price,
                image: v.image.clone().or_else(|| self.image.clone()),
            },
            None => CartCandidate {
                id: LineItemId::from(&self.handle),
                handle: self.handle.clone(),
                title: self.title.clone(),
                price: self.price,
                image: self.image.clone(),
            },
        }
    }
}

/// A formula variant of a product (e.g. naked vs. Jarrah honey).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Variant identifier, unique within the product.
    pub id: VariantId,
    /// Display title (e.g. "Jarrah Honey").
    pub title: String,
    /// Price of this variant.
    pub price: Money,
    /// Variant-specific ingredients.
    pub ingredients: Vec<String>,
    /// One-line description.
    pub description: Option<String>,
    /// Variant image URL.
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_category_round_trip() {
        for c in [
            ProductCategory::BeefTallow,
            ProductCategory::CamelTallow,
            ProductCategory::Ceramics,
        ] {
            assert_eq!(ProductCategory::from_str(c.as_str()), Some(c));
        }
        assert_eq!(ProductCategory::from_str("unknown"), None);
    }

    #[test]
    fn test_product_type_round_trip() {
        for t in [
            ProductType::Balm,
            ProductType::Soap,
            ProductType::LipBalm,
            ProductType::Vessel,
        ] {
            assert_eq!(ProductType::from_str(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_cart_candidate_without_variant() {
        let catalog = Catalog::ghost_gum();
        let product = catalog.product(&"lip-balm".into()).unwrap();

        let candidate = product.cart_candidate(None);
        assert_eq!(candidate.id.as_str(), "lip-balm");
        assert_eq!(candidate.title, product.title);
        assert_eq!(candidate.price, product.price);
    }

    #[test]
    fn test_cart_candidate_with_variant() {
        let catalog = Catalog::ghost_gum();
        let product = catalog.product(&"protective-barrier-balm".into()).unwrap();
        let variant = product.variant(&"jarrah-honey".into()).unwrap();

        let candidate = product.cart_candidate(Some(variant));
        assert_eq!(candidate.id.as_str(), "protective-barrier-balm:jarrah-honey");
        assert!(candidate.title.contains("Jarrah Honey"));
        assert_eq!(candidate.price, variant.price);
    }
}
