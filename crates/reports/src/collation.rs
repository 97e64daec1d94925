//! Alphabetical ordering of display names as a pt-BR reader expects it.
//!
//! Names compare letter by letter ignoring case and accents first, so
//! `Álvaro` sorts next to `alvo` and before `Bruno`. Names equal at that
//! level are ordered unaccented before accented, then lowercase before
//! uppercase, then by code point.

/// Sort key for a display name. Ordering keys orders the names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accents: Vec<bool>,
    uppercase: Vec<bool>,
    raw: String,
}

/// Builds the sort key of `name`.
pub fn collation_key(name: &str) -> CollationKey {
    let mut base = String::with_capacity(name.len());
    let mut accents = Vec::with_capacity(name.len());
    let mut uppercase = Vec::with_capacity(name.len());

    for ch in name.chars() {
        for lower in ch.to_lowercase() {
            let folded = strip_accent(lower);
            base.push(folded);
            accents.push(folded != lower);
            uppercase.push(ch.is_uppercase());
        }
    }

    CollationKey {
        base,
        accents,
        uppercase,
        raw: name.to_string(),
    }
}

/// Maps an accented lowercase Latin letter to its base letter.
fn strip_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
