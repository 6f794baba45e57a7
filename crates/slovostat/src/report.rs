//! Rendering of the two output sections.

use std::io::{self, Write};

use crate::pipeline::Analysis;

/// Header printed between the token list and the frequency section.
pub const REPEATS_HEADER: &str = "=== Повторы (по основе) ===";

/// Write the numbered token list, then the stem frequency section.
///
/// Tokens and stems are raw bytes and are written as such: whatever byte
/// sequence survived cleaning goes out unmodified, valid UTF-8 or not. The
/// header is emitted even when both sections are empty.
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    for (i, token) in analysis.tokens.iter().enumerate() {
        write!(out, "{} - ", i + 1)?;
        out.write_all(token)?;
        out.write_all(b"\n")?;
    }

    writeln!(out, "\n{REPEATS_HEADER}")?;
    for (stem, count) in analysis.stems.iter() {
        out.write_all(stem)?;
        writeln!(out, " : {count}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze;

    fn render(input: &str) -> String {
        let analysis = analyze(input.as_bytes());
        let mut out = Vec::new();
        write_report(&mut out, &analysis).expect("write to vec");
        String::from_utf8(out).expect("utf8 report")
    }

    #[test]
    fn numbers_tokens_and_lists_stems() {
        let report = render("Добрым людям добро!");
        assert_eq!(
            report,
            "1 - добрым\n\
             2 - людям\n\
             3 - добро\n\
             \n\
             === Повторы (по основе) ===\n\
             добр : 2\n\
             люд : 1\n"
        );
    }

    #[test]
    fn empty_input_still_prints_header() {
        assert_eq!(render(""), "\n=== Повторы (по основе) ===\n");
    }
}
