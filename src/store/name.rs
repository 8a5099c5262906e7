//! Player-name helpers: canonical lookup keys and display formatting.
//!
//! Profiles are looked up by a normalized form of the entered name so that
//! "Ana", "ana" and "Aná" all resolve to the same player.

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fold common Latin diacritics to their base letter.
///
/// Covers the accented forms a name-entry field realistically produces;
/// anything unrecognized passes through unchanged.
pub fn strip_diacritics(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Canonical lookup key: diacritics stripped, then lowercased.
pub fn normalize(s: &str) -> String {
    strip_diacritics(s).to_lowercase()
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}
