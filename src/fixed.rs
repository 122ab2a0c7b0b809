/* cordic_trig | fixed.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Shift-and-add CORDIC on scaled integers */

/******************************************************************************/

use core::f64::consts::PI;
use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use crate::common::Folded;
use crate::cordic::{self, MAX_ITERATIONS};

/******************************************************************************/

/// Errors raised while configuring a [`FixedCordic`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The format string is not of the form `<whole>.<fractional>`
    #[error("fixed point format must look like `<whole bits>.<fractional bits>`")]
    MissingSeparator,
    /// One of the bit counts is not a non-negative integer
    #[error("invalid bit count in fixed point format")]
    InvalidBitCount(#[from] ParseIntError),
    /// The format needs more than 64 bits
    #[error("fixed point format is {total} bits wide, at most 64 are supported")]
    TooWide {
        /// Total width of the rejected format
        total: u32
    },
    /// The format cannot hold angles up to +/- pi / 2
    #[error("fixed point format needs at least 2 whole bits, got {0}")]
    InsufficientWholeBits(u32),
    /// The iteration count is zero or larger than the generated tables
    #[error("iteration count must be between 1 and {max}, got {0}", max = MAX_ITERATIONS)]
    IterationsOutOfRange(usize),
    /// The last micro-rotation would shift by the full width of the storage type
    #[error("{iterations} iterations shift {storage:?} storage past its {max}-bit width")]
    ShiftTooWide {
        /// Rejected iteration count
        iterations: usize,
        /// Storage of the chosen format
        storage: StorageWidth,
        /// Largest accepted iteration count for that storage
        max: usize
    }
}

/******************************************************************************/

/// Signed Q format, written `W.F`
///
/// `W` counts the whole bits including the sign bit, `F` the fractional bits. The default `2.30`
/// format fits a 32-bit integer and represents values in [-2, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPointFormat {
    whole_bits: u32,
    fractional_bits: u32
}

/// Narrowest two's complement integer able to store a [`FixedPointFormat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StorageWidth {
    /// 8-bit storage
    I8,
    /// 16-bit storage
    I16,
    /// 32-bit storage
    I32,
    /// 64-bit storage
    I64
}

impl StorageWidth {
    /// Number of bits of the storage type
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 => 8,
            Self::I16 => 16,
            Self::I32 => 32,
            Self::I64 => 64
        }
    }

    /// Width of the shifted operand once C has applied integer promotion
    ///
    /// Shifting by this many bits or more is undefined in C.
    pub const fn shift_width(self) -> u32 {
        if self.bits() < 32 { 32 } else { self.bits() }
    }

    /// Matching `<stdint.h>` type name
    pub const fn c_type(self) -> &'static str {
        match self {
            Self::I8 => "int8_t",
            Self::I16 => "int16_t",
            Self::I32 => "int32_t",
            Self::I64 => "int64_t"
        }
    }
}

impl FixedPointFormat {
    /// Validates and builds a format
    pub fn new(whole_bits: u32, fractional_bits: u32) -> Result<Self, Error> {
        let total = whole_bits.saturating_add(fractional_bits);
        if total > 64 {
            return Err(Error::TooWide { total });
        }
        if whole_bits < 2 {
            return Err(Error::InsufficientWholeBits(whole_bits));
        }
        Ok(Self { whole_bits, fractional_bits })
    }

    /// Whole bits, sign bit included
    pub const fn whole_bits(&self) -> u32 {
        self.whole_bits
    }

    /// Fractional bits
    pub const fn fractional_bits(&self) -> u32 {
        self.fractional_bits
    }

    /// Total width in bits
    pub const fn total_bits(&self) -> u32 {
        self.whole_bits + self.fractional_bits
    }

    /// Value of one unit (1.0) in this format, i.e. `2^F`
    pub const fn scaling_factor(&self) -> i64 {
        1 << self.fractional_bits
    }

    /// Storage type needed for this format
    pub const fn storage(&self) -> StorageWidth {
        match self.total_bits() {
            0..=8 => StorageWidth::I8,
            9..=16 => StorageWidth::I16,
            17..=32 => StorageWidth::I32,
            _ => StorageWidth::I64
        }
    }

    fn to_fixed(self, value: f64) -> i64 {
        (value * self.scaling_factor() as f64) as i64
    }

    fn to_float(self, value: i64) -> f64 {
        value as f64 / self.scaling_factor() as f64
    }
}

impl Default for FixedPointFormat {
    fn default() -> Self {
        Self { whole_bits: 2, fractional_bits: 30 }
    }
}

impl FromStr for FixedPointFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fractional) = s.trim().split_once('.').ok_or(Error::MissingSeparator)?;
        let format = Self::new(whole.parse()?, fractional.parse()?)?;
        log::trace!("parsed fixed point format {:?} as {}", s, format);
        Ok(format)
    }
}

impl fmt::Display for FixedPointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.whole_bits, self.fractional_bits)
    }
}

/******************************************************************************/

/// The fixed point CORDIC engine
///
/// Unlike [`crate::CordicTrig`], the iteration count and number format are chosen at run time,
/// so that the same parameters can also be rendered as C code (see [`FixedCordic::c_source()`]).
/// The rotation itself only uses additions and arithmetic shifts. Internally the angle is in
/// radians, which keeps it within [-2, 2) for every valid format.
///
/// For example:
/// ```
/// use cordic_trig::FixedCordic;
///
/// let cordic = FixedCordic::new(16, "2.30".parse()?)?;
/// let (sine, cosine) = cordic.get_sin_cos(60.0);
/// assert!((sine - 0.866_025_4).abs() < 0.001);
/// assert!((cosine - 0.5).abs() < 0.001);
/// # Ok::<(), cordic_trig::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCordic {
    iterations: usize,
    format: FixedPointFormat,
    atan_table: [i64; MAX_ITERATIONS],
    cos_k1: i64
}

impl FixedCordic {
    /// Derives the scaled tables for the given parameters
    ///
    /// The iteration count is limited by the table size and, so that the rendered C stays
    /// defined, by [`StorageWidth::shift_width()`] of the format's storage.
    pub fn new(iterations: usize, format: FixedPointFormat) -> Result<Self, Error> {
        if !(1..=MAX_ITERATIONS).contains(&iterations) {
            return Err(Error::IterationsOutOfRange(iterations));
        }
        // Micro-rotation i shifts by i bits
        let storage = format.storage();
        let max = storage.shift_width() as usize;
        if iterations > max {
            return Err(Error::ShiftTooWide { iterations, storage, max });
        }

        let mut atan_table = [0; MAX_ITERATIONS];
        for (scaled, atan) in atan_table.iter_mut().zip(&cordic::ATAN_TABLE[..iterations]) {
            *scaled = format.to_fixed(*atan);
        }
        let cos_k1 = format.to_fixed(cordic::K_TABLE[iterations - 1]);

        log::debug!(
            "fixed point CORDIC: {} iterations, {} format in {}, K = {} ({:#x})",
            iterations, format, format.storage().c_type(), cordic::K_TABLE[iterations - 1], cos_k1
        );

        Ok(Self { iterations, format, atan_table, cos_k1 })
    }

    /// Number of micro-rotations
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number format of the accumulators
    pub const fn format(&self) -> FixedPointFormat {
        self.format
    }

    /// atan(2^-i) in radians, scaled by [`FixedPointFormat::scaling_factor()`]
    pub fn atan_table(&self) -> &[i64] {
        &self.atan_table[..self.iterations]
    }

    /// Scaled gain compensation, the starting value of x
    pub const fn cos_k1(&self) -> i64 {
        self.cos_k1
    }

    /// Sine and cosine of an angle in degrees
    ///
    /// Any finite angle is accepted; NaN and infinities give NaN.
    pub fn get_sin_cos(&self, degrees: f32) -> (f32, f32) {
        let folded = Folded::<f64>::new(degrees as f64);
        if folded.angle.is_nan() {
            return (f32::NAN, f32::NAN);
        }

        let z = self.format.to_fixed(folded.angle * (PI / 180.0));
        let (x, y) = cordic::rotate_fixed(self.cos_k1, 0, z, self.atan_table());
        let (sine, cosine) = folded.unfold(self.format.to_float(y), self.format.to_float(x));
        (sine as f32, cosine as f32)
    }
}

/******************************************************************************/
