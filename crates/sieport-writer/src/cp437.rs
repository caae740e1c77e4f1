//! IBM code page 437 ("PC8") transcoding.
//!
//! The interchange format is a byte stream in code page 437. ASCII maps
//! straight through; the upper half follows the standard IBM table. The
//! conversion is write-only and lossy: characters outside the code page
//! are dropped.

/// Characters assigned to code points 0x80..=0xFF.
const HIGH_HALF: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Map a character to its code page 437 byte, or `None` when the character
/// has no representation.
#[must_use]
pub fn encode_char(c: char) -> Option<u8> {
    if c.is_ascii() {
        return Some(c as u8);
    }
    HIGH_HALF
        .iter()
        .position(|&mapped| mapped == c)
        .map(|index| (index + 0x80) as u8)
}

/// Transcode a string, dropping characters the code page cannot represent.
#[must_use]
pub fn encode(s: &str) -> Vec<u8> {
    s.chars().filter_map(encode_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_maps_to_itself() {
        assert_eq!(encode_char('A'), Some(0x41));
        assert_eq!(encode_char(' '), Some(0x20));
        assert_eq!(encode_char('\u{1f}'), Some(0x1f));
    }

    #[test]
    fn test_high_half_mappings() {
        assert_eq!(encode_char('Ö'), Some(0x99));
        assert_eq!(encode_char('ä'), Some(0x84));
        assert_eq!(encode_char('É'), Some(0x90));
        assert_eq!(encode_char('½'), Some(0xab));
        assert_eq!(encode_char('\u{a0}'), Some(0xff));
    }

    #[test]
    fn test_unrepresentable_characters_are_dropped() {
        assert_eq!(encode_char('€'), None);
        assert_eq!(encode_char('Ω'), Some(0xea));
        assert_eq!(encode("Ör€e"), vec![0x99, b'r', b'e']);
    }
}
