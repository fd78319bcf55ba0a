//! Delimiters, indentation, key folding, and path expansion.
//!
//! Run with: `cargo run --example custom_options`

use toon_codec::{
    decode_with_options, encode_with_options, toon, DecodeOptions, Delimiter, EncodeOptions,
    KeyFolding, PathExpansion,
};

fn main() -> toon_codec::Result<()> {
    let value = toon!({
        "server": {"http": {"port": 8080}},
        "rows": [
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"}
        ]
    });

    let piped = EncodeOptions::new()
        .with_delimiter(Delimiter::Pipe)
        .with_indent(4);
    println!("pipe delimiter, 4-space indent:\n{}\n", encode_with_options(&value, &piped));

    let folded = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
    let folded_text = encode_with_options(&value, &folded);
    println!("key folding:\n{}\n", folded_text);

    let expanded = decode_with_options(
        &folded_text,
        &DecodeOptions::new().with_expand_paths(PathExpansion::Safe),
    )?;
    assert_eq!(expanded, value);
    println!("path expansion restored the original tree");
    Ok(())
}
