//! The reactive cart store.
//!
//! Single source of truth for cart contents and drawer visibility. Every
//! UI surface (header badge, drawer, product and vessel detail pages)
//! mutates through the operations here and re-renders from the snapshot
//! views published to its subscription.
//!
//! The store is single-threaded by design: the browser-style event loop
//! is the only mutation context, operations are synchronous and run to
//! completion, so calls never interleave. Share it as a
//! [`SharedCartStore`] rather than an `Arc<Mutex<_>>`.

use ghostgum_commerce::cart::{Cart, CartCandidate, CartItem};
use ghostgum_commerce::ids::LineItemId;
use ghostgum_commerce::money::Money;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A read-only snapshot view of the store, published to subscribers and
/// returned by [`CartStore::view`]. Derived values are recomputed on
/// every read, never cached.
#[derive(Debug, Clone, Copy)]
pub struct CartView<'a> {
    /// Line items in display order.
    pub items: &'a [CartItem],
    /// Whether the drawer should render.
    pub is_open: bool,
}

impl CartView<'_> {
    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Money {
        Money::sum(self.items.iter().map(CartItem::subtotal))
    }

    /// Sum of quantities, for the header badge.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

type Listener = Box<dyn FnMut(CartView<'_>)>;

/// Shared single-threaded handle to a [`CartStore`].
///
/// Created at app bootstrap and handed to every consumer; constructible
/// fresh per test for isolation.
pub type SharedCartStore = Rc<RefCell<CartStore>>;

/// Owns the cart and the drawer flag; publishes a snapshot to every live
/// subscriber after each mutation.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    is_open: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty, closed store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a shared handle.
    pub fn shared() -> SharedCartStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Add a candidate line to the cart.
    ///
    /// An existing line with the same id gets its quantity bumped by one;
    /// otherwise the candidate is appended with quantity 1. Does not open
    /// the drawer.
    pub fn add_to_cart(&mut self, candidate: CartCandidate) {
        debug!(id = %candidate.id, title = %candidate.title, "add to cart");
        self.cart.add(candidate);
        self.notify();
    }

    /// Set a line's quantity to an absolute value; zero or below removes
    /// the line. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: i64) {
        debug!(%id, quantity, "update quantity");
        self.cart.set_quantity(id, quantity);
        self.notify();
    }

    /// Remove a line by id. Unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, id: &LineItemId) {
        debug!(%id, "remove from cart");
        self.cart.remove(id);
        self.notify();
    }

    /// Flip the drawer open/closed.
    pub fn toggle_cart(&mut self) {
        self.is_open = !self.is_open;
        debug!(is_open = self.is_open, "toggle cart");
        self.notify();
    }

    /// Close the drawer (overlay click, close button, continue shopping).
    pub fn close_cart(&mut self) {
        if self.is_open {
            self.is_open = false;
            debug!("close cart");
            self.notify();
        }
    }

    /// Whether the drawer should render.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Recomputed cart total.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Recomputed unit count for the header badge.
    pub fn cart_item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Current snapshot view.
    pub fn view(&self) -> CartView<'_> {
        CartView {
            items: self.cart.items(),
            is_open: self.is_open,
        }
    }

    /// Register a listener. It is called once per mutation, in
    /// subscription order, with a snapshot view of the new state.
    pub fn subscribe(&mut self, listener: impl FnMut(CartView<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    fn notify(&mut self) {
        let view = CartView {
            items: self.cart.items(),
            is_open: self.is_open,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostgum_commerce::ids::ProductHandle;

    fn candidate(id: &str, price: f64) -> CartCandidate {
        CartCandidate {
            id: id.into(),
            handle: ProductHandle::new(id),
            title: format!("Item {id}"),
            price: Money::from_decimal(price),
            image: None,
        }
    }

    #[test]
    fn test_starts_empty_and_closed() {
        let store = CartStore::new();
        assert!(store.view().is_empty());
        assert!(!store.is_open());
        assert_eq!(store.cart_total(), Money::zero());
        assert_eq!(store.cart_item_count(), 0);
    }

    #[test]
    fn test_add_does_not_open_drawer() {
        let mut store = CartStore::new();
        store.add_to_cart(candidate("balm", 42.0));
        assert!(!store.is_open());
    }

    #[test]
    fn test_toggle_pairs_back_to_original() {
        let mut store = CartStore::new();
        store.toggle_cart();
        assert!(store.is_open());
        store.toggle_cart();
        assert!(!store.is_open());
    }

    #[test]
    fn test_close_cart() {
        let mut store = CartStore::new();
        store.toggle_cart();
        store.close_cart();
        assert!(!store.is_open());

        // Closing a closed drawer stays closed.
        store.close_cart();
        assert!(!store.is_open());
    }

    #[test]
    fn test_view_totals_recomputed() {
        let mut store = CartStore::new();
        store.add_to_cart(candidate("a", 10.0));
        store.add_to_cart(candidate("a", 10.0));
        store.add_to_cart(candidate("b", 5.0));

        let view = store.view();
        assert_eq!(view.total(), Money::from_decimal(25.0));
        assert_eq!(view.item_count(), 3);
    }

    #[test]
    fn test_subscriber_notified_once_per_mutation() {
        let notifications = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&notifications);

        let mut store = CartStore::new();
        store.subscribe(move |_| *seen.borrow_mut() += 1);

        store.add_to_cart(candidate("balm", 42.0));
        store.update_quantity(&"balm".into(), 3);
        store.toggle_cart();
        store.remove_from_cart(&"balm".into());

        assert_eq!(*notifications.borrow(), 4);
    }

    #[test]
    fn test_subscriber_sees_current_state() {
        let badge = Rc::new(RefCell::new(0i64));
        let seen = Rc::clone(&badge);

        let mut store = CartStore::new();
        store.subscribe(move |view| *seen.borrow_mut() = view.item_count());

        store.add_to_cart(candidate("balm", 42.0));
        store.add_to_cart(candidate("balm", 42.0));
        assert_eq!(*badge.borrow(), 2);

        store.update_quantity(&"balm".into(), 5);
        assert_eq!(*badge.borrow(), 5);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let notifications = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&notifications);

        let mut store = CartStore::new();
        let id = store.subscribe(move |_| *seen.borrow_mut() += 1);

        store.add_to_cart(candidate("balm", 42.0));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store.add_to_cart(candidate("balm", 42.0));
        assert_eq!(*notifications.borrow(), 1);
    }

    #[test]
    fn test_shared_handle() {
        let store = CartStore::shared();
        store.borrow_mut().add_to_cart(candidate("balm", 42.0));
        assert_eq!(store.borrow().cart_item_count(), 1);
    }

    #[test]
    fn test_update_quantity_respects_cap() {
        use ghostgum_commerce::cart::MAX_QUANTITY_PER_ITEM;

        let mut store = CartStore::new();
        store.add_to_cart(candidate("balm", 42.0));
        store.update_quantity(&"balm".into(), i64::MAX);

        assert_eq!(store.cart_item_count(), MAX_QUANTITY_PER_ITEM);
        assert_eq!(
            store.cart_total(),
            Money::from_decimal(42.0) * MAX_QUANTITY_PER_ITEM
        );
    }

    #[test]
    fn test_rapid_updates_serialize_last_write_wins() {
        let mut store = CartStore::new();
        store.add_to_cart(candidate("balm", 42.0));

        // Double-click style repeats are plain serialized calls.
        store.update_quantity(&"balm".into(), 5);
        store.update_quantity(&"balm".into(), 5);
        assert_eq!(store.cart().get(&"balm".into()).unwrap().quantity, 5);

        store.update_quantity(&"balm".into(), 2);
        assert_eq!(store.cart().get(&"balm".into()).unwrap().quantity, 2);
    }
}
