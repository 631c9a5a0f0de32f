//! Shared fixtures for the API integration suites

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

pub const SEED: &str = r#"
dishes:
  - id: "d1"
    name: "Broccoli and beetroot stir fry"
    description: "Crunchy stir fry featuring fresh broccoli and beetroot"
    price: 15
    image_url: "https://images.example.com/stir-fry.jpg"
  - id: "d2"
    name: "Falafel and tahini bagel"
    description: "A warm bagel filled with falafel and tahini"
    price: 6
    image_url: "https://images.example.com/bagel.jpg"

orders:
  - id: "o-pending"
    deliverTo: "742 Evergreen Terrace"
    mobileNumber: "(939) 555-0113"
    status: "pending"
    dishes:
      - { id: "d1", name: "Broccoli and beetroot stir fry", price: 15, quantity: 2 }
  - id: "o-preparing"
    deliverTo: "308 Negra Arroyo Lane"
    mobileNumber: "(505) 143-3369"
    status: "preparing"
    dishes:
      - { id: "d2", name: "Falafel and tahini bagel", price: 6, quantity: 1 }
  - id: "o-delivered"
    deliverTo: "1600 Pennsylvania Avenue NW"
    mobileNumber: "(202) 456-1111"
    status: "delivered"
    dishes:
      - { id: "d2", name: "Falafel and tahini bagel", price: 6, quantity: 4 }
"#;

/// Server over the fixed seed plus handles on its stores
pub struct TestApp {
    pub server: TestServer,
    pub dishes: InMemoryStore<Dish>,
    pub orders: InMemoryStore<Order>,
}

/// New records get ids `new-1`, `new-2`, ...
pub fn app() -> TestApp {
    let seed = SeedData::from_yaml_str(SEED).unwrap();
    let host = ServerBuilder::new()
        .with_seed(seed)
        .with_id_generator(SequentialIdGenerator::new("new-"))
        .build_host()
        .unwrap();
    let dishes = host.dishes.clone();
    let orders = host.orders.clone();
    let router = RestExposure::build_router(Arc::new(host), vec![]).unwrap();

    TestApp {
        server: TestServer::new(router),
        dishes,
        orders,
    }
}

pub fn data(body: Value) -> Value {
    json!({ "data": body })
}

pub fn valid_dish() -> Value {
    json!({
        "name": "Dolcelatte and chickpea spaghetti",
        "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
        "price": 19,
        "image_url": "https://images.example.com/spaghetti.jpg"
    })
}

pub fn valid_order() -> Value {
    json!({
        "deliverTo": "221B Baker Street",
        "mobileNumber": "020 7224 3688",
        "status": "pending",
        "dishes": [
            {
                "id": "d1",
                "name": "Broccoli and beetroot stir fry",
                "description": "Crunchy stir fry featuring fresh broccoli and beetroot",
                "image_url": "https://images.example.com/stir-fry.jpg",
                "price": 15,
                "quantity": 2
            }
        ]
    })
}

pub fn message(response: &axum_test::TestResponse) -> String {
    response.json::<Value>()["message"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
