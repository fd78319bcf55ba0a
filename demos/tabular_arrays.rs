//! Tabular arrays: the shape that makes TOON compact.
//!
//! Run with: `cargo run --example tabular_arrays`

use serde::Serialize;
use toon_codec::to_string;

#[derive(Serialize)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn main() -> toon_codec::Result<()> {
    let products = vec![
        Product {
            sku: "A1".to_string(),
            name: "Widget".to_string(),
            price: 9.99,
            quantity: 12,
        },
        Product {
            sku: "B2".to_string(),
            name: "Gadget".to_string(),
            price: 14.5,
            quantity: 3,
        },
        Product {
            sku: "C3".to_string(),
            name: "Doohickey".to_string(),
            price: 0.5,
            quantity: 200,
        },
    ];

    let toon = to_string(&products)?;
    let json = serde_json::to_string(&products).map_err(toon_codec::Error::message)?;

    println!("TOON ({} bytes):\n{}\n", toon.len(), toon);
    println!("JSON ({} bytes):\n{}", json.len(), json);
    Ok(())
}
