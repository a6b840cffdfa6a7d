//! Product catalog module.
//!
//! Static, read-only data bundled with the storefront: the skincare range
//! and the ceramic vessel gallery.

mod catalog;
mod product;
mod vessel;

pub use catalog::Catalog;
pub use product::{Product, ProductCategory, ProductType, ProductVariant};
pub use vessel::{Vessel, VesselVariant, VesselVariantKey};
