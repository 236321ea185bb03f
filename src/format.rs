//! Format descriptors: where the sign, exponent and mantissa of a
//! floating-point encoding live within its storage buffer, plus the
//! derived per-field byte masks.

use crate::{bits, errors::LayoutError, field::FieldSpec};

/// Numeral base represented by an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary = 2,
    Decimal = 10,
}

#[cfg(feature = "serde")]
impl From<crate::serde::RadixDef> for Radix {
    fn from(value: crate::serde::RadixDef) -> Self {
        match value {
            crate::serde::RadixDef::Binary => Radix::Binary,
            crate::serde::RadixDef::Decimal => Radix::Decimal,
        }
    }
}

/// The three fields of a floating-point layout; labels validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatField {
    Sign,
    Exponent,
    Mantissa,
}

impl FloatField {
    pub fn name(self) -> &'static str {
        match self {
            FloatField::Sign => "sign",
            FloatField::Exponent => "exponent",
            FloatField::Mantissa => "mantissa",
        }
    }
}

impl std::fmt::Display for FloatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable description of one floating-point storage layout.
///
/// Use [FloatFormat::new] to build one; the constructor validates each
/// field against the storage width and derives the three field masks, so
/// every descriptor you can hold carries masks consistent with its layout.
/// Masks are never mutated afterwards, which makes a shared descriptor
/// safe to read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatFormat {
    name: String,
    radix: Radix,
    byte_size: usize,
    sign: FieldSpec,
    exponent: FieldSpec,
    mantissa: FieldSpec,
    sign_mask: Vec<u8>,
    exponent_mask: Vec<u8>,
    mantissa_mask: Vec<u8>,
}

impl FloatFormat {
    /// Validates the three field layouts and derives their masks.
    ///
    /// Each field fails individually: a negative offset, a negative
    /// length, or an end past the storage width aborts construction
    /// before any mask is built. Fields are only checked against the
    /// storage bounds; overlap between fields is not rejected.
    pub fn new(
        radix: Radix,
        byte_size: usize,
        sign: FieldSpec,
        exponent: FieldSpec,
        mantissa: FieldSpec,
        name: impl Into<String>,
    ) -> Result<Self, LayoutError> {
        let bit_size = byte_size * 8;

        validate(FloatField::Sign, sign, bit_size)?;
        validate(FloatField::Exponent, exponent, bit_size)?;
        validate(FloatField::Mantissa, mantissa, bit_size)?;

        Ok(FloatFormat {
            name: name.into(),
            radix,
            byte_size,
            sign,
            exponent,
            mantissa,
            sign_mask: field_mask(byte_size, sign),
            exponent_mask: field_mask(byte_size, exponent),
            mantissa_mask: field_mask(byte_size, mantissa),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Total storage width in bytes.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Total storage width in bits.
    pub fn bit_size(&self) -> usize {
        self.byte_size * 8
    }

    pub fn sign(&self) -> FieldSpec {
        self.sign
    }

    pub fn exponent(&self) -> FieldSpec {
        self.exponent
    }

    pub fn mantissa(&self) -> FieldSpec {
        self.mantissa
    }

    /// Mask isolating the sign field, `byte_size` bytes, little-endian.
    pub fn sign_mask(&self) -> &[u8] {
        &self.sign_mask
    }

    /// Mask isolating the exponent field, `byte_size` bytes, little-endian.
    pub fn exponent_mask(&self) -> &[u8] {
        &self.exponent_mask
    }

    /// Mask isolating the mantissa field, `byte_size` bytes, little-endian.
    pub fn mantissa_mask(&self) -> &[u8] {
        &self.mantissa_mask
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::FormatDef> for FloatFormat {
    type Error = LayoutError;

    fn try_from(def: crate::serde::FormatDef) -> Result<Self, Self::Error> {
        FloatFormat::new(
            def.radix.into(),
            def.byte_size,
            def.sign.into(),
            def.exponent.into(),
            def.mantissa.into(),
            def.name,
        )
    }
}

fn validate(field: FloatField, spec: FieldSpec, bit_size: usize) -> Result<(), LayoutError> {
    if spec.bit_offset < 0 {
        return Err(LayoutError::OffsetOutOfRange {
            field,
            offset: spec.bit_offset,
        });
    }

    if spec.bit_length < 0 {
        return Err(LayoutError::LengthOutOfRange {
            field,
            length: spec.bit_length,
        });
    }

    let end = spec.bit_offset + spec.bit_length;
    if end as usize > bit_size {
        return Err(LayoutError::BoundsExceeded {
            field,
            end,
            total_bits: bit_size,
        });
    }

    Ok(())
}

fn field_mask(byte_size: usize, spec: FieldSpec) -> Vec<u8> {
    let mut mask = vec![0u8; byte_size];
    bits::compute_mask(&mut mask, spec.bit_offset, spec.bit_length as usize);
    mask
}
