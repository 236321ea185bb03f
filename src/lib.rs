//! # floatcraft
//!
//! Byte-level layout descriptions for IEEE-754-style floating-point
//! encodings.
//!
//! A [format::FloatFormat] records where the sign, exponent and mantissa
//! fields of an encoding live inside its storage buffer and derives, for
//! each field, the byte mask that isolates it: every bit inside the field
//! set, every other bit clear. Masks are little-endian (byte 0 holds bits
//! 0-7) and are computed once at construction, so a descriptor can be
//! shared and read freely for its whole lifetime. The standard interchange
//! widths from 16 to 256 bits are available in [presets].
//!
//! ## Example
//!
//! ```
//! use floatcraft::field::FieldSpec;
//! use floatcraft::format::{FloatFormat, Radix};
//!
//! // bfloat16: 1 sign bit, 8 exponent bits, 7 mantissa bits.
//! let bf16 = FloatFormat::new(
//!     Radix::Binary,
//!     2,
//!     FieldSpec::new(15, 1),
//!     FieldSpec::new(7, 8),
//!     FieldSpec::new(0, 7),
//!     "bfloat16",
//! )
//! .unwrap();
//!
//! assert_eq!(bf16.sign_mask(), [0x00, 0x80]);
//! assert_eq!(bf16.exponent_mask(), [0x80, 0x7F]);
//! assert_eq!(bf16.mantissa_mask(), [0x7F, 0x00]);
//! ```
//!
//! Preset layouts are plain statics:
//!
//! ```
//! use floatcraft::presets::DOUBLE;
//!
//! let mantissa_bits: u32 = DOUBLE.mantissa_mask().iter().map(|b| b.count_ones()).sum();
//! assert_eq!(mantissa_bits, 52);
//! ```

pub mod bits;
pub mod errors;
pub mod field;
pub mod format;
pub mod presets;
#[cfg(feature = "serde")]
pub mod serde;
