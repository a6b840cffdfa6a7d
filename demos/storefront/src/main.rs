//! Storefront wiring demo.
//!
//! Stands in for the UI tree: a header badge and a drawer subscribe to
//! the shared cart store, then a shopping session runs through the same
//! operations the detail pages and drawer controls would trigger.

use ghostgum_commerce::prelude::*;
use ghostgum_store::store::{CartStore, CartView};
use tracing::info;

fn render_badge(view: CartView<'_>) {
    info!(count = view.item_count(), "header badge");
}

fn render_drawer(view: CartView<'_>) {
    if !view.is_open {
        return;
    }
    if view.is_empty() {
        info!("drawer: your cart is empty");
        return;
    }
    for item in view.items {
        info!(
            title = %item.title,
            quantity = item.quantity,
            price = %item.price,
            "drawer line"
        );
    }
    match Money::sum(view.items.iter().map(CartItem::subtotal)) {
        total if total >= FREE_SHIPPING_THRESHOLD => {
            info!(%total, "drawer total, ships free");
        }
        total => {
            let remaining = FREE_SHIPPING_THRESHOLD - total;
            info!(%total, %remaining, "drawer total, below free shipping");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ghostgum_store=debug".into()),
        )
        .init();

    let catalog = Catalog::ghost_gum();
    let store = CartStore::shared();

    store.borrow_mut().subscribe(render_badge);
    store.borrow_mut().subscribe(render_drawer);

    // Product detail page: add the Jarrah honey balm twice.
    let balm = catalog
        .product(&"protective-barrier-balm".into())
        .expect("seed catalog has the balm");
    let honey = balm
        .variant(&"jarrah-honey".into())
        .expect("balm has the honey variant");
    store.borrow_mut().add_to_cart(balm.cart_candidate(Some(honey)));
    store.borrow_mut().add_to_cart(balm.cart_candidate(Some(honey)));

    // Vessel detail page: add a Trio.
    let cascade = catalog
        .vessel(&"Cascade".into())
        .expect("seed catalog has the Cascade");
    let trio = cascade
        .variant(VesselVariantKey::Trio)
        .expect("Cascade has a trio");
    store.borrow_mut().add_to_cart(cascade.cart_candidate(Some(trio)));

    // Header: open the drawer.
    store.borrow_mut().toggle_cart();

    // Drawer controls: drop one balm, then remove the line.
    let balm_line: LineItemId = "protective-barrier-balm:jarrah-honey".into();
    store.borrow_mut().update_quantity(&balm_line, 1);
    store.borrow_mut().remove_from_cart(&balm_line);

    // Overlay click.
    store.borrow_mut().close_cart();

    info!(
        total = %store.borrow().cart_total(),
        count = store.borrow().cart_item_count(),
        "session done"
    );
}
