//! Shopping cart module.
//!
//! Contains the cart container, its line items, and candidate descriptors.

mod cart;

pub use cart::{Cart, CartCandidate, CartItem, FREE_SHIPPING_THRESHOLD, MAX_QUANTITY_PER_ITEM};
