//! Checkout snapshot and totals, end to end through the pure path:
//! cart lines -> frozen reservation items -> subtotal -> final total.

use booking_server::booking::{build_reservation_items, items_subtotal};
use booking_server::db::models::Product;
use booking_server::pricing::{self, LineItem};
use shared::models::CartItemRequest;
use surrealdb::sql::Thing;

fn product(id: &str, name: &str, base_price: f64, pct: f64) -> Product {
    Product {
        id: Some(Thing::from(("product", id))),
        name: name.to_string(),
        description: None,
        category: Thing::from(("category", "inflatables")),
        base_price,
        extra_hour_percentage: pct,
        images: Vec::new(),
        sort_order: 0,
        is_active: true,
    }
}

fn cart_line(product: &str, quantity: u32, extra_hours: u32) -> CartItemRequest {
    CartItemRequest {
        product: product.to_string(),
        quantity,
        extra_hours,
    }
}

#[test]
fn item_total_follows_the_extra_hour_formula() {
    // 2 * 10000 * (1 + 0.15 * 1) = 23000
    let products = vec![product("castle", "Bouncy Castle", 10_000.0, 15.0)];
    let items = build_reservation_items(&[cart_line("product:castle", 2, 1)], &products).unwrap();
    assert_eq!(items[0].item_total, 23_000.0);
}

#[test]
fn total_is_subtotal_plus_transport() {
    let products = vec![
        product("castle", "Bouncy Castle", 150.0, 15.0),
        product("popcorn", "Popcorn Machine", 60.0, 10.0),
    ];
    let cart = vec![
        cart_line("product:castle", 1, 2),
        cart_line("product:popcorn", 2, 0),
    ];

    let items = build_reservation_items(&cart, &products).unwrap();
    let subtotal = items_subtotal(&items).unwrap();
    let total = pricing::reservation_total(subtotal, 35.0).unwrap();

    let item_sum: f64 = items.iter().map(|i| i.item_total).sum();
    assert_eq!(subtotal, item_sum);
    assert_eq!(total, subtotal + 35.0);
}

#[test]
fn zero_transport_zone_adds_nothing() {
    let products = vec![product("castle", "Bouncy Castle", 150.0, 15.0)];
    let items = build_reservation_items(&[cart_line("product:castle", 1, 0)], &products).unwrap();
    let subtotal = items_subtotal(&items).unwrap();
    assert_eq!(pricing::reservation_total(subtotal, 0.0).unwrap(), subtotal);
}

#[test]
fn snapshots_survive_catalog_edits() {
    let mut products = vec![product("castle", "Bouncy Castle", 150.0, 15.0)];
    let items = build_reservation_items(&[cart_line("product:castle", 1, 1)], &products).unwrap();
    let before = items[0].item_total;

    // Reprice and rename the live product after booking
    products[0].base_price = 999.0;
    products[0].name = "Renamed".to_string();

    assert_eq!(items[0].item_total, before);
    assert_eq!(items[0].product_name, "Bouncy Castle");
    assert_eq!(items[0].unit_price, 150.0);
}

#[test]
fn recomputing_totals_is_idempotent() {
    let products = vec![
        product("castle", "Bouncy Castle", 79.99, 12.5),
        product("slide", "Water Slide", 42.0, 0.0),
    ];
    let cart = vec![
        cart_line("product:castle", 3, 2),
        cart_line("product:slide", 1, 5),
    ];

    let first_items = build_reservation_items(&cart, &products).unwrap();
    let second_items = build_reservation_items(&cart, &products).unwrap();
    assert_eq!(
        items_subtotal(&first_items).unwrap(),
        items_subtotal(&second_items).unwrap()
    );

    // Replaying the frozen snapshot through the calculator matches too
    let replayed: Vec<LineItem> = first_items
        .iter()
        .map(|i| LineItem {
            base_price: i.unit_price,
            extra_hour_percentage: i.extra_hour_percentage,
            quantity: i.quantity,
            extra_hours: i.extra_hours,
        })
        .collect();
    assert_eq!(
        pricing::cart_subtotal(&replayed).unwrap(),
        items_subtotal(&first_items).unwrap()
    );
}

#[test]
fn every_line_total_is_rounded_to_cents() {
    let products = vec![product("castle", "Bouncy Castle", 33.33, 12.5)];
    let items = build_reservation_items(&[cart_line("product:castle", 1, 1)], &products).unwrap();
    // 33.33 * 1.125 = 37.49625 -> 37.50
    assert_eq!(items[0].item_total, 37.50);
}
