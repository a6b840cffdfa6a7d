//! Reactive state for the Ghost Gum storefront.
//!
//! Two pieces live here:
//!
//! - [`store::CartStore`]: the single source of truth for cart contents
//!   and drawer visibility, with an explicit observer subscription in
//!   place of a UI framework's implicit re-render.
//! - [`membership::MembershipClient`]: the brandmark reveal subscribe
//!   call, the storefront's one network boundary.
//!
//! # Example
//!
//! ```
//! use ghostgum_commerce::prelude::*;
//! use ghostgum_store::store::CartStore;
//!
//! let catalog = Catalog::ghost_gum();
//! let balm = catalog.product(&"lip-balm".into()).unwrap();
//!
//! let mut store = CartStore::new();
//! store.subscribe(|view| {
//!     // header badge
//!     let _ = view.item_count();
//! });
//! store.add_to_cart(balm.cart_candidate(None));
//! assert_eq!(store.cart_item_count(), 1);
//! ```

pub mod membership;
pub mod store;

pub use membership::{MembershipClient, MembershipError, SubscribeRequest};
pub use store::{CartStore, CartView, SharedCartStore, SubscriptionId};
