//! Handlers for the text codecs
//!
//! Each case pairs raw bytes (`hex`) with their encoding (`text`). Valid
//! cases are checked in both directions; invalid cases must fail to decode.

use crate::suites::kat::dispatcher::{insert, HandlerFn, DispatchKey};
use crate::suites::kat::engine::{expect_hex, expect_text, hex_bits_or_empty, text};
use crate::suites::kat::error::Result;
use crate::suites::kat::model::TestCase;
use bitcrypt::algorithms::codec::{Base32, Base32Hex, Base64, Base64Url, Codec, Hex, Utf8};
use std::collections::HashMap;

fn check<C>(case: &TestCase) -> Result<()>
where
    C: Codec<Encoded = String, Input = str>,
{
    let encoded = text(case, "text")?;
    let decoded = C::to_bits(&encoded)?;
    let expected = case.field("hex").unwrap_or_default();
    expect_hex(&expected, &decoded)?;

    // Decoding tolerates whitespace and padding the encoder never emits
    if case.field("canonical").as_deref() != Some("false") {
        expect_text(&encoded, &C::from_bits(&hex_bits_or_empty(case, "hex")?)?)?;
    }
    Ok(())
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, "CODEC", "hex", check::<Hex>);
    insert(map, "CODEC", "base64", check::<Base64>);
    insert(map, "CODEC", "base64url", check::<Base64Url>);
    insert(map, "CODEC", "base32", check::<Base32>);
    insert(map, "CODEC", "base32hex", check::<Base32Hex>);
    insert(map, "CODEC", "utf8", check::<Utf8>);
}
