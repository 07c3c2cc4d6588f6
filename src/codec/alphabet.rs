//! Binary-to-text layer shared by the range and collection codecs.
//!
//! RFC 4648 style chunked encoding over the url-safe alphabet, without
//! padding. Every three input bytes become four characters, a final partial
//! group becomes two or three. Decoding is strict: unknown characters,
//! impossible lengths, and nonzero spare bits in the last group are all
//! rejected, so every byte string has exactly one token spelling.

use crate::error::Error;

/// The 64 token characters, in sextet order. A-Z, a-z, 0-9, then the two
/// url-safe punctuation marks. Safe inside a URL fragment with no escaping.
const CHARSET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const INVALID: u8 = 0xFF;

/// Byte-indexed inverse of CHARSET.
const INVERSE: [u8; 256] = inverse();

const fn inverse() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Spell out a byte string. Infallible, and the output length is determined
/// by the input length alone: 3n bytes become 4n characters, a trailing byte
/// adds two characters, two trailing bytes add three.
pub fn encode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let mut word = 0u32;
        for (i, byte) in chunk.iter().enumerate() {
            word |= (*byte as u32) << (16 - 8 * i);
        }
        for i in 0..=chunk.len() {
            let sextet = (word >> (18 - 6 * i)) & 0b111111;
            text.push(CHARSET[sextet as usize] as char);
        }
    }
    text
}

/// Read a byte string back out of its spelling. Rejects any text that
/// encode() could not have produced.
pub fn decode(text: &str) -> Result<Vec<u8>, Error> {
    if text.len() % 4 == 1 {
        return Err(Error::MalformedToken("dangling character"));
    }
    let mut bytes = Vec::with_capacity(text.len() / 4 * 3 + 2);
    for chunk in text.as_bytes().chunks(4) {
        let mut word = 0u32;
        for (i, c) in chunk.iter().enumerate() {
            let sextet = INVERSE[*c as usize];
            if sextet == INVALID {
                return Err(Error::MalformedToken("character outside the url-safe alphabet"));
            }
            word |= (sextet as u32) << (18 - 6 * i);
        }
        // a partial group must leave its spare low bits at zero
        let n = 6 * chunk.len() / 8;
        if word & ((1 << (24 - 8 * n)) - 1) != 0 {
            return Err(Error::MalformedToken("nonzero spare bits"));
        }
        for i in 0..n {
            bytes.push((word >> (16 - 8 * i)) as u8);
        }
    }
    Ok(bytes)
}
