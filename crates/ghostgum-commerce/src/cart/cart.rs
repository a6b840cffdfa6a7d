//! Cart container and line item types.

use crate::ids::{LineItemId, ProductHandle};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order value at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money { cents: 100_00 };

/// Maximum quantity allowed per line item. Quantities clamp here rather
/// than erroring; cart operations stay total.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A line item descriptor, without quantity.
///
/// Callers build these from the catalog (see `Product::cart_candidate` and
/// `Vessel::cart_candidate`). The `id` is the uniqueness contract: two
/// candidates with the same id merge into one line, so variant-bearing
/// products must pass a composite id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartCandidate {
    /// Stable identity key for the cart line.
    pub id: LineItemId,
    /// Catalog reference; not required to be unique across lines.
    pub handle: ProductHandle,
    /// Display name, may encode the variant ("Product — Variant").
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Display image URL.
    pub image: Option<String>,
}

/// One entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Stable identity key, unique within the cart.
    pub id: LineItemId,
    /// Catalog reference.
    pub handle: ProductHandle,
    /// Display name.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Display image URL.
    pub image: Option<String>,
    /// Count of units, always >= 1. A quantity driven to zero removes the
    /// line instead.
    pub quantity: i64,
}

impl CartItem {
    fn from_candidate(candidate: CartCandidate) -> Self {
        Self {
            id: candidate.id,
            handle: candidate.handle,
            title: candidate.title,
            price: candidate.price,
            image: candidate.image,
            quantity: 1,
        }
    }

    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.price * self.quantity
    }
}

/// The cart's owned contents: an ordered list of line items, at most one
/// per id, insertion order preserved for display.
///
/// All operations are total functions over the in-memory state. Unknown
/// ids are no-ops, never errors; there is nothing here that can fail.
/// Totals are recomputed on every read, never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add a candidate to the cart.
    ///
    /// If a line with the same id already exists its quantity is bumped by
    /// one and the existing descriptor fields are kept (first seen wins).
    /// Otherwise the candidate is appended as a new line with quantity 1.
    pub fn add(&mut self, candidate: CartCandidate) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == candidate.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(1)
                .min(MAX_QUANTITY_PER_ITEM);
            return;
        }
        self.items.push(CartItem::from_candidate(candidate));
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of zero or below removes the line; values above
    /// [`MAX_QUANTITY_PER_ITEM`] clamp to the cap. Unknown ids are a
    /// no-op and never create a line.
    pub fn set_quantity(&mut self, id: &LineItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
        }
    }

    /// Remove a line by id. Returns whether a line was removed.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a line by id.
    pub fn get(&self, id: &LineItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Money {
        Money::sum(self.items.iter().map(CartItem::subtotal))
    }

    /// Total unit count (sum of quantities), for the header badge.
    /// Distinct from the number of lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Amount still needed to reach free shipping, or `None` once the
    /// total is at or over the threshold.
    pub fn amount_to_free_shipping(&self) -> Option<Money> {
        let remaining = FREE_SHIPPING_THRESHOLD.saturating_sub(self.total());
        if remaining.is_zero() {
            None
        } else {
            Some(remaining)
        }
    }
}
