use std::env;

use ruslex_stem::{clean, stem};
use ruslex_utf8::lowercase;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let words: Vec<String> = if args.is_empty() {
        [
            "Добрым",
            "людям",
            "добро!",
            "продаются,",
            "ядер",
            "полями",
            "дом",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect()
    } else {
        args
    };

    for word in words {
        let token = lowercase(clean(word.as_bytes()));
        let stemmed = stem(&token);
        println!(
            "{:<16} -> {:<16} -> {}",
            word,
            String::from_utf8_lossy(&token),
            String::from_utf8_lossy(&stemmed)
        );
    }
}
