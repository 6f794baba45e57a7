//! Byte-offset UTF-8 segmentation and Russian case folding.
//!
//! Everything here works on raw byte slices rather than `str`: the pipeline
//! accepts arbitrary file bytes and carries malformed sequences through with
//! undefined segmentation instead of rejecting them. Offsets handed to these
//! functions are assumed to sit on character boundaries; a continuation byte
//! (top two bits `10`) is never treated as a character start.
//!
//! Use [`char_len_at`] and [`prev_char_start`] to step forward or backward by
//! whole characters, [`char_count`] for word-length checks, and [`lowercase`]
//! for the length-preserving ASCII + Russian case fold.
//!
//! ```rust
//! use ruslex_utf8::{char_count, lowercase};
//!
//! let folded = lowercase("Ёлки".as_bytes());
//! assert_eq!(folded, "ёлки".as_bytes());
//! assert_eq!(char_count(&folded), 4);
//! ```

/// Byte length of the UTF-8 character starting at `offset`.
///
/// `offset` must be a character start. Lengths are derived from the lead
/// byte's high bits alone; nothing checks that the continuation bytes are
/// actually there.
pub fn char_len_at(bytes: &[u8], offset: usize) -> usize {
    let lead = bytes[offset];
    if lead < 0x80 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else {
        4
    }
}

/// Number of characters (not bytes) in `bytes`, by lead-byte stepping.
pub fn char_count(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        i += char_len_at(bytes, i);
        count += 1;
    }
    count
}

/// Start offset of the character preceding the boundary at `offset`.
///
/// Skips backward over continuation bytes until a lead byte is found, never
/// past the start of the slice.
pub fn prev_char_start(bytes: &[u8], offset: usize) -> usize {
    let mut i = offset.saturating_sub(1);
    while i > 0 && bytes[i] & 0xC0 == 0x80 {
        i -= 1;
    }
    i
}

/// Remove exactly one trailing character; no-op on an empty buffer.
pub fn pop_last_char(buf: &mut Vec<u8>) {
    if buf.is_empty() {
        return;
    }
    let start = prev_char_start(buf, buf.len());
    buf.truncate(start);
}

/// Lowercase ASCII letters and Russian capitals, preserving byte length.
///
/// `Ё` (`D0 81`) maps to `ё` (`D1 91`); `А`..`П` (`D0 90..9F`) keep their
/// lead byte and add `0x20` to the trail; `Р`..`Я` (`D0 A0..AF`) cross into
/// the `D1` lead and subtract `0x20`. Every mapping is two bytes to two
/// bytes, so the fold is an in-place rewrite over a copy. Any other
/// multi-byte character is skipped whole without inspection.
pub fn lowercase(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    let mut i = 0;
    while i < out.len() {
        let lead = out[i];

        if lead < 0x80 {
            out[i] = lead.to_ascii_lowercase();
            i += 1;
            continue;
        }

        if lead == 0xD0 && i + 1 < out.len() {
            let trail = out[i + 1];

            // Ё -> ё
            if trail == 0x81 {
                out[i] = 0xD1;
                out[i + 1] = 0x91;
                i += 2;
                continue;
            }

            // А..П -> а..п
            if (0x90..=0x9F).contains(&trail) {
                out[i + 1] = trail + 0x20;
                i += 2;
                continue;
            }

            // Р..Я -> р..я, crossing into the D1 lead
            if (0xA0..=0xAF).contains(&trail) {
                out[i] = 0xD1;
                out[i + 1] = trail - 0x20;
                i += 2;
                continue;
            }
        }

        i += char_len_at(&out, i);
    }
    out
}
