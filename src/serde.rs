//! JSON-deserializable format descriptions.
//!
//! These types describe the *shape* of a floating-point storage layout.
//! They are intended to be read from JSON (for example a format file
//! shipped with your application) and then compiled into a validated
//! [crate::format::FloatFormat] through `TryFrom`.

use serde::{Deserialize, Serialize};

/// Numeral base of the described encoding.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub enum RadixDef {
    /// Base-2 storage layout.
    Binary,
    /// Base-10 storage layout.
    Decimal,
}

/// Bit position of a single field.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct FieldSpecDef {
    /// Offset of the field's lowest bit, counted from bit 0 of the buffer.
    pub bit_offset: isize,
    /// Width of the field in bits.
    pub bit_length: isize,
}

/// Top-level description of one floating-point storage layout.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FormatDef {
    /// Human-readable format name.
    pub name: String,
    /// Numeral base; binary for every common interchange format.
    pub radix: RadixDef,
    /// Total storage width in bytes.
    pub byte_size: usize,
    /// Sign field position.
    pub sign: FieldSpecDef,
    /// Exponent field position.
    pub exponent: FieldSpecDef,
    /// Mantissa field position.
    pub mantissa: FieldSpecDef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FloatFormat;

    #[test]
    fn test_compile_format_from_json() {
        let json = r#"{
            "name": "bfloat16",
            "radix": "Binary",
            "byte_size": 2,
            "sign": { "bit_offset": 15, "bit_length": 1 },
            "exponent": { "bit_offset": 7, "bit_length": 8 },
            "mantissa": { "bit_offset": 0, "bit_length": 7 }
        }"#;

        let def: FormatDef = serde_json::from_str(json).unwrap();
        let format = FloatFormat::try_from(def).unwrap();

        assert_eq!(format.name(), "bfloat16");
        assert_eq!(format.sign_mask(), [0x00, 0x80]);
        assert_eq!(format.exponent_mask(), [0x80, 0x7F]);
        assert_eq!(format.mantissa_mask(), [0x7F, 0x00]);
    }

    #[test]
    fn test_out_of_range_definition_fails_to_compile() {
        let json = r#"{
            "name": "broken",
            "radix": "Binary",
            "byte_size": 2,
            "sign": { "bit_offset": -1, "bit_length": 1 },
            "exponent": { "bit_offset": 10, "bit_length": 5 },
            "mantissa": { "bit_offset": 0, "bit_length": 10 }
        }"#;

        let def: FormatDef = serde_json::from_str(json).unwrap();
        assert!(FloatFormat::try_from(def).is_err());
    }
}
