//! WinAnsi text encoding for the standard Type 1 fonts.

/// Byte written for characters WinAnsi cannot represent.
const REPLACEMENT: u8 = b'?';

/// Encodes `text` as WinAnsi (Windows-1252) bytes.
///
/// Latin-1 maps directly; the typographic punctuation Windows-1252 places in
/// `0x80..=0x9F` is mapped explicitly. Anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT),
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        '\t' => b' ',
        _ => REPLACEMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_win_ansi("1. Sign contract"), b"1. Sign contract");
    }

    #[test]
    fn test_latin1_maps_to_single_bytes() {
        assert_eq!(encode_win_ansi("Relatórios"), b"Relat\xF3rios");
        assert_eq!(encode_win_ansi("ação"), b"a\xE7\xE3o");
    }

    #[test]
    fn test_typographic_punctuation() {
        assert_eq!(encode_win_ansi("“a” – b…"), b"\x93a\x94 \x96 b\x85");
        assert_eq!(encode_win_ansi("€5"), b"\x805");
    }

    #[test]
    fn test_unrepresentable_characters_are_replaced() {
        assert_eq!(encode_win_ansi("📋 日本"), b"? ??");
        assert_eq!(encode_win_ansi("a\nb"), b"a?b");
    }
}
