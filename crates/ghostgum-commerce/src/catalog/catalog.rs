//! The static catalog container and the seeded Ghost Gum range.

use crate::catalog::{
    Product, ProductCategory, ProductType, ProductVariant, Vessel, VesselVariant, VesselVariantKey,
};
use crate::ids::{ProductHandle, VesselId};
use crate::money::Money;

/// The read-only catalog the storefront renders and the cart draws
/// candidates from. Bundled with the application; nothing here is fetched
/// or persisted.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    vessels: Vec<Vessel>,
}

impl Catalog {
    /// Build a catalog from explicit data.
    pub fn new(products: Vec<Product>, vessels: Vec<Vessel>) -> Self {
        Self { products, vessels }
    }

    /// All products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All vessels, in display order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Look up a product by handle.
    pub fn product(&self, handle: &ProductHandle) -> Option<&Product> {
        self.products.iter().find(|p| &p.handle == handle)
    }

    /// Look up a vessel by gallery id.
    pub fn vessel(&self, id: &VesselId) -> Option<&Vessel> {
        self.vessels.iter().find(|v| &v.id == id)
    }

    /// Products of a given form, for the shop page `?filter=` facets.
    pub fn products_of_type(&self, product_type: ProductType) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.product_type == product_type)
    }

    /// Products in a given range.
    pub fn products_in_category(
        &self,
        category: ProductCategory,
    ) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.category == category)
    }

    /// The bundled Ghost Gum range.
    pub fn ghost_gum() -> Self {
        Self::new(ghost_gum_products(), ghost_gum_vessels())
    }
}

fn ghost_gum_products() -> Vec<Product> {
    vec![
        Product {
            handle: "protective-barrier-balm".into(),
            title: "Protective Barrier Balm".to_string(),
            short_description:
                "Beef tallow balm for daily protection. Available with Jarrah honey or naked."
                    .to_string(),
            key_benefits: vec![
                "Locks in moisture".to_string(),
                "Wind & sun routine-friendly".to_string(),
                "Non-greasy".to_string(),
            ],
            ingredients: vec!["Beef tallow".to_string(), "Beeswax".to_string()],
            image: None,
            price: Money::from_decimal(42.0),
            compare_at_price: None,
            subscription_eligible: true,
            badges: vec!["Beef Tallow".to_string(), "Core Range".to_string()],
            provenance: "NT-sourced tallow; small-batch.".to_string(),
            volume: Some("50ml".to_string()),
            category: ProductCategory::BeefTallow,
            product_type: ProductType::Balm,
            variants: vec![
                ProductVariant {
                    id: "naked".into(),
                    title: "Naked".to_string(),
                    price: Money::from_decimal(40.0),
                    ingredients: vec!["Beef tallow".to_string(), "Beeswax".to_string()],
                    description: Some(
                        "Pure and simple - just beef tallow and beeswax".to_string(),
                    ),
                    image: None,
                },
                ProductVariant {
                    id: "jarrah-honey".into(),
                    title: "Jarrah Honey".to_string(),
                    price: Money::from_decimal(42.0),
                    ingredients: vec![
                        "Beef tallow".to_string(),
                        "Jarrah honey".to_string(),
                        "Beeswax".to_string(),
                    ],
                    description: Some(
                        "Our signature blend with antimicrobial Jarrah honey".to_string(),
                    ),
                    image: None,
                },
            ],
        },
        Product {
            handle: "protective-barrier-balm-refill".into(),
            title: "Protective Barrier Balm Refill".to_string(),
            short_description:
                "Refill packets for your ceramic jar. Available in Jarrah honey or naked."
                    .to_string(),
            key_benefits: vec![
                "Eco-friendly refill".to_string(),
                "Same premium formula".to_string(),
                "Perfect jar fit".to_string(),
            ],
            ingredients: vec!["Beef tallow".to_string(), "Beeswax".to_string()],
            image: None,
            price: Money::from_decimal(32.0),
            compare_at_price: None,
            subscription_eligible: true,
            badges: vec![
                "Refill".to_string(),
                "Eco-Friendly".to_string(),
                "Core Range".to_string(),
            ],
            provenance: "NT-sourced tallow; Kraft packaging that fully biodegrades".to_string(),
            volume: Some("50ml".to_string()),
            category: ProductCategory::BeefTallow,
            product_type: ProductType::Balm,
            variants: vec![
                ProductVariant {
                    id: "naked-refill".into(),
                    title: "Naked Refill".to_string(),
                    price: Money::from_decimal(30.0),
                    ingredients: vec!["Beef tallow".to_string(), "Beeswax".to_string()],
                    description: Some(
                        "Pure refill packet with bio-based nozzle system for easy pouring"
                            .to_string(),
                    ),
                    image: None,
                },
                ProductVariant {
                    id: "jarrah-honey-refill".into(),
                    title: "Jarrah Honey Refill".to_string(),
                    price: Money::from_decimal(32.0),
                    ingredients: vec![
                        "Beef tallow".to_string(),
                        "Jarrah honey".to_string(),
                        "Beeswax".to_string(),
                    ],
                    description: Some("Signature blend refill packet".to_string()),
                    image: None,
                },
            ],
        },
        Product {
            handle: "cold-process-soap".into(),
            title: "Cold Process Soap".to_string(),
            short_description: "Slow-cured tallow soap for face and body.".to_string(),
            key_benefits: vec![
                "Gentle cleanse".to_string(),
                "No synthetic surfactants".to_string(),
            ],
            ingredients: vec![
                "Beef tallow".to_string(),
                "Olive oil".to_string(),
                "Lye".to_string(),
            ],
            image: None,
            price: Money::from_decimal(18.0),
            compare_at_price: None,
            subscription_eligible: false,
            badges: vec!["Core Range".to_string()],
            provenance: "Cured six weeks in small batches.".to_string(),
            volume: Some("100g".to_string()),
            category: ProductCategory::BeefTallow,
            product_type: ProductType::Soap,
            variants: Vec::new(),
        },
        Product {
            handle: "lip-balm".into(),
            title: "Lip Balm".to_string(),
            short_description: "Camel tallow lip balm for dry climates.".to_string(),
            key_benefits: vec![
                "All-day hold".to_string(),
                "Unscented".to_string(),
            ],
            ingredients: vec!["Camel tallow".to_string(), "Beeswax".to_string()],
            image: None,
            price: Money::from_decimal(14.0),
            compare_at_price: None,
            subscription_eligible: true,
            badges: vec!["Camel Tallow".to_string(), "Premium".to_string()],
            provenance: "Central Australian camel tallow.".to_string(),
            volume: Some("15ml".to_string()),
            category: ProductCategory::CamelTallow,
            product_type: ProductType::LipBalm,
            variants: Vec::new(),
        },
    ]
}

fn ghost_gum_vessels() -> Vec<Vessel> {
    let materials = "Stoneware ceramic in Ghost Gum off-white, matte-satin glaze with \
                     micro-speckle and faint bark-like striations. Tone-on-tone recessed emboss."
        .to_string();
    let care = "Wipe ceramic with a soft damp cloth. Rinse inserts with lukewarm water only; \
                dry fully before re-stacking. Avoid harsh detergents on ceramic."
        .to_string();

    vec![
        Vessel {
            id: "Cascade".into(),
            name: "Cascade".to_string(),
            subtitle: None,
            description: "The Cascade unites purpose and permanence. Each tier twists with a \
                          soft, damped motion. The outer ceramic is heirloom, the ritual inside \
                          evolves."
                .to_string(),
            price: Money::from_decimal(180.0),
            image: "https://res.cloudinary.com/ghostgum/image/upload/vessels/cascade.jpg"
                .to_string(),
            badges: vec![
                "Stackable".to_string(),
                "Refillable".to_string(),
                "Ceramic".to_string(),
                "Heirloom".to_string(),
            ],
            variants: vec![
                VesselVariant {
                    key: VesselVariantKey::Duo,
                    label: "The Duo (2-tier)".to_string(),
                    blurb: "The essential carry, cleanse and condition in a slim, two-tier form."
                        .to_string(),
                    composition: vec![
                        "Top: Barrier Balm or Lip Balm".to_string(),
                        "Bottom: Cold-Processed Soap".to_string(),
                    ],
                    image: None,
                },
                VesselVariant {
                    key: VesselVariantKey::Trio,
                    label: "Trio (3-tier)".to_string(),
                    blurb: "The complete daily ritual. Rehydrate, repair, cleanse in one object."
                        .to_string(),
                    composition: vec![
                        "Top: Lip Balm".to_string(),
                        "Middle: Barrier Balm".to_string(),
                        "Bottom: Cold-Processed Soap".to_string(),
                    ],
                    image: None,
                },
            ],
            materials: materials.clone(),
            care: care.clone(),
        },
        Vessel {
            id: "Alba".into(),
            name: "Alba".to_string(),
            subtitle: Some("Single jar".to_string()),
            description: "A single modernist cylinder for one formula, refilled for life."
                .to_string(),
            price: Money::from_decimal(95.0),
            image: "https://res.cloudinary.com/ghostgum/image/upload/vessels/alba.jpg".to_string(),
            badges: vec!["Refillable".to_string(), "Ceramic".to_string()],
            variants: vec![
                VesselVariant {
                    key: VesselVariantKey::Ml150,
                    label: "150ml".to_string(),
                    blurb: "Counter size for the daily balm.".to_string(),
                    composition: vec!["Barrier Balm".to_string()],
                    image: None,
                },
                VesselVariant {
                    key: VesselVariantKey::Ml300,
                    label: "300ml".to_string(),
                    blurb: "Family size, or the committed.".to_string(),
                    composition: vec!["Barrier Balm".to_string()],
                    image: None,
                },
            ],
            materials,
            care,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lookups() {
        let catalog = Catalog::ghost_gum();
        assert!(catalog.product(&"protective-barrier-balm".into()).is_some());
        assert!(catalog.product(&"missing".into()).is_none());
        assert!(catalog.vessel(&"Cascade".into()).is_some());
        assert!(catalog.vessel(&"missing".into()).is_none());
    }

    #[test]
    fn test_handles_unique() {
        let catalog = Catalog::ghost_gum();
        for p in catalog.products() {
            let count = catalog
                .products()
                .iter()
                .filter(|q| q.handle == p.handle)
                .count();
            assert_eq!(count, 1, "duplicate handle {}", p.handle);
        }
    }

    #[test]
    fn test_type_filter() {
        let catalog = Catalog::ghost_gum();
        let balms: Vec<_> = catalog.products_of_type(ProductType::Balm).collect();
        assert!(!balms.is_empty());
        assert!(balms.iter().all(|p| p.product_type == ProductType::Balm));
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::ghost_gum();
        let premium: Vec<_> = catalog
            .products_in_category(ProductCategory::CamelTallow)
            .collect();
        assert!(premium.iter().any(|p| p.handle.as_str() == "lip-balm"));
    }
}
