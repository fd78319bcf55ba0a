//! First steps: encode a struct, decode it back.
//!
//! Run with: `cargo run --example simple`

use serde::{Deserialize, Serialize};
use toon_codec::{from_str, to_string};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

fn main() -> toon_codec::Result<()> {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "ops".to_string()],
    };

    let text = to_string(&user)?;
    println!("TOON:\n{}\n", text);

    let back: User = from_str(&text)?;
    assert_eq!(user, back);
    println!("round trip ok: {:?}", back);
    Ok(())
}
