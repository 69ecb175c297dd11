//! Text helpers for contract fields.

use super::ContractError;

/// Uppercase the first character and keep the rest unchanged.
///
/// Empty input is a caller bug and is reported as [`ContractError::EmptyText`].
pub fn capitalize_first(text: &str) -> Result<String, ContractError> {
    let mut chars = text.chars();
    let first = chars.next().ok_or(ContractError::EmptyText)?;

    let mut result = String::with_capacity(text.len());
    result.extend(first.to_uppercase());
    result.push_str(chars.as_str());
    Ok(result)
}

/// Encode text for the standard Type1 fonts, which use WinAnsiEncoding.
///
/// German umlauts, `ß` and `€` all have code points in Windows-1252;
/// anything else is replaced with `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => code as u8,
        _ => match ch {
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
            _ => b'?',
        },
    }
}

/// Encode text as a UTF-16BE string with byte order mark, as used for
/// document info entries.
pub fn to_utf16_be(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}
