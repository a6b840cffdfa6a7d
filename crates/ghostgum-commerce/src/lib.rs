//! Catalog and cart domain types for the Ghost Gum storefront.
//!
//! This crate is the pure, I/O-free half of the storefront core:
//!
//! - **Money**: cents-based prices with `$` display
//! - **Ids**: newtype string identifiers, including the composite
//!   line-item id contract for variant-bearing products
//! - **Catalog**: the static skincare range and vessel gallery the UI
//!   renders and the cart draws candidates from
//! - **Cart**: ordered line items with total-function operations
//!
//! # Example
//!
//! ```
//! use ghostgum_commerce::prelude::*;
//!
//! let catalog = Catalog::ghost_gum();
//! let balm = catalog.product(&"protective-barrier-balm".into()).unwrap();
//! let honey = balm.variant(&"jarrah-honey".into()).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(balm.cart_candidate(Some(honey)));
//! cart.add(balm.cart_candidate(Some(honey)));
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), Money::from_decimal(84.0));
//! ```

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;

pub use ids::{LineItemId, ProductHandle, VariantId, VesselId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::{LineItemId, ProductHandle, VariantId, VesselId};
    pub use crate::money::Money;

    pub use crate::catalog::{
        Catalog, Product, ProductCategory, ProductType, ProductVariant, Vessel, VesselVariant,
        VesselVariantKey,
    };

    pub use crate::cart::{
        Cart, CartCandidate, CartItem, FREE_SHIPPING_THRESHOLD, MAX_QUANTITY_PER_ITEM,
    };
}
