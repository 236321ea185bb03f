//! Built-in descriptors for the standard binary interchange widths.
//!
//! Each preset is constructed on first use and lives for the process
//! lifetime as a read-only value, so it can be shared across threads
//! without synchronization. The `BINARY*` names alias the width names.

use std::sync::LazyLock;

use crate::{
    field::FieldSpec,
    format::{FloatFormat, Radix},
};

fn preset(
    byte_size: usize,
    sign: FieldSpec,
    exponent: FieldSpec,
    mantissa: FieldSpec,
    name: &str,
) -> FloatFormat {
    FloatFormat::new(Radix::Binary, byte_size, sign, exponent, mantissa, name)
        .expect("preset layout is in range")
}

/// 16-bit binary format: 1 sign bit, 5 exponent bits, 10 mantissa bits.
pub static HALF: LazyLock<FloatFormat> = LazyLock::new(|| {
    preset(
        2,
        FieldSpec::new(15, 1),
        FieldSpec::new(10, 5),
        FieldSpec::new(0, 10),
        "binary16",
    )
});

/// 32-bit binary format: 1 sign bit, 8 exponent bits, 22 mantissa bits.
/// Bit 30 belongs to no field in this layout.
pub static SINGLE: LazyLock<FloatFormat> = LazyLock::new(|| {
    preset(
        4,
        FieldSpec::new(31, 1),
        FieldSpec::new(22, 8),
        FieldSpec::new(0, 22),
        "binary32",
    )
});

/// 64-bit binary format: 1 sign bit, 11 exponent bits, 52 mantissa bits.
pub static DOUBLE: LazyLock<FloatFormat> = LazyLock::new(|| {
    preset(
        8,
        FieldSpec::new(63, 1),
        FieldSpec::new(52, 11),
        FieldSpec::new(0, 52),
        "binary64",
    )
});

/// 128-bit binary format: 1 sign bit, 15 exponent bits, 112 mantissa bits.
pub static QUADRUPLE: LazyLock<FloatFormat> = LazyLock::new(|| {
    preset(
        16,
        FieldSpec::new(127, 1),
        FieldSpec::new(112, 15),
        FieldSpec::new(0, 112),
        "binary128",
    )
});

/// 256-bit binary format: 1 sign bit, 19 exponent bits, 236 mantissa bits.
pub static OCTUPLE: LazyLock<FloatFormat> = LazyLock::new(|| {
    preset(
        32,
        FieldSpec::new(255, 1),
        FieldSpec::new(236, 19),
        FieldSpec::new(0, 236),
        "binary256",
    )
});

pub use self::HALF as BINARY16;
pub use self::SINGLE as BINARY32;
pub use self::DOUBLE as BINARY64;
pub use self::QUADRUPLE as BINARY128;
pub use self::OCTUPLE as BINARY256;
