//! Macedonian Cyrillic to Latin transliteration.
//!
//! Report text is written with a WinAnsi-encoded base font, so free-text
//! fields are normalized to an ASCII approximation before layout. The
//! substitution works character by character over a fixed table; anything
//! outside the table passes through verbatim.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LATIN: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('д', "d"),
        ('ѓ', "gj"),
        ('е', "e"),
        ('ж', "zh"),
        ('з', "z"),
        ('ѕ', "dz"),
        ('и', "i"),
        ('ј', "j"),
        ('к', "k"),
        ('л', "l"),
        ('љ', "lj"),
        ('м', "m"),
        ('н', "n"),
        ('њ', "nj"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('ќ', "kj"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "ch"),
        ('џ', "dj"),
        ('ш', "sh"),
        ('А', "A"),
        ('Б', "B"),
        ('В', "V"),
        ('Г', "G"),
        ('Д', "D"),
        ('Ѓ', "Gj"),
        ('Е', "E"),
        ('Ж', "Zh"),
        ('З', "Z"),
        ('Ѕ', "Dz"),
        ('И', "I"),
        ('Ј', "J"),
        ('К', "K"),
        ('Л', "L"),
        ('Љ', "Lj"),
        ('М', "M"),
        ('Н', "N"),
        ('Њ', "Nj"),
        ('О', "O"),
        ('П', "P"),
        ('Р', "R"),
        ('С', "S"),
        ('Т', "T"),
        ('Ќ', "Kj"),
        ('У', "U"),
        ('Ф', "F"),
        ('Х', "H"),
        ('Ц', "C"),
        ('Ч', "Ch"),
        ('Џ', "Dj"),
        ('Ш', "Sh"),
    ])
});

/// Replace every mapped Cyrillic letter with its Latin equivalent.
///
/// Total over all inputs: digits, punctuation and anything already ASCII
/// come back unchanged. Case is preserved (`ж` → `zh`, `Ж` → `Zh`); no
/// whitespace is collapsed.
pub fn to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match LATIN.get(&c) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
    }
    out
}
