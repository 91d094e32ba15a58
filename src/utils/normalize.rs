use crate::error::{MnidError, Result};

/// Lenient hex-string-to-bytes conversion.
///
/// Strips an optional `0x`/`0X` prefix and pads an odd digit count with a
/// leading `'0'` nibble, so `"123"` becomes `[0x01, 0x23]`. An empty string
/// (or a bare prefix) yields an empty vector. Width constraints are left to
/// the caller.
pub fn hex_to_bytes_lenient(input: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(input);
    // offset of the first digit inside `input`, for error reporting
    let offset = input.len() - digits.len();

    let mut nibbles = Vec::with_capacity(digits.len() + 1);
    if digits.len() % 2 != 0 {
        nibbles.push(0u8);
    }
    for (i, character) in digits.char_indices() {
        let value = character
            .to_digit(16)
            .ok_or(MnidError::InvalidHexDigit {
                character,
                index: offset + i,
            })?;
        nibbles.push(value as u8);
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Canonical `0x`-prefixed lowercase rendering of a byte slice
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_length_gets_leading_nibble() {
        assert_eq!(hex_to_bytes_lenient("123").unwrap(), vec![0x01, 0x23]);
        assert_eq!(hex_to_bytes_lenient("0x1").unwrap(), vec![0x01]);
    }

    #[test]
    fn test_prefix_is_optional_and_case_insensitive() {
        let expected = vec![0xab, 0xcd];
        assert_eq!(hex_to_bytes_lenient("abcd").unwrap(), expected);
        assert_eq!(hex_to_bytes_lenient("0xabcd").unwrap(), expected);
        assert_eq!(hex_to_bytes_lenient("0XABCD").unwrap(), expected);
        assert_eq!(hex_to_bytes_lenient("0xAbCd").unwrap(), expected);
    }

    #[test]
    fn test_empty_input_is_zero_bytes() {
        assert!(hex_to_bytes_lenient("").unwrap().is_empty());
        assert!(hex_to_bytes_lenient("0x").unwrap().is_empty());
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(hex_to_bytes_lenient("0x0007").unwrap(), vec![0x00, 0x07]);
        assert_eq!(hex_to_bytes_lenient("0x007").unwrap(), vec![0x00, 0x07]);
    }

    #[test]
    fn test_invalid_digit_reports_position() {
        let err = hex_to_bytes_lenient("0x12g4").unwrap_err();
        assert_eq!(
            err,
            MnidError::InvalidHexDigit {
                character: 'g',
                index: 4
            }
        );
    }

    #[test]
    fn test_whitespace_is_rejected() {
        assert!(hex_to_bytes_lenient(" 0x12").is_err());
        assert!(hex_to_bytes_lenient("0x12 ").is_err());
    }

    #[test]
    fn test_to_prefixed_hex_is_lowercase() {
        assert_eq!(to_prefixed_hex(&[0xAB, 0x01]), "0xab01");
        assert_eq!(to_prefixed_hex(&[]), "0x");
    }
}
