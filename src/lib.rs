/* cordic_trig | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Sine and cosine by coordinate rotation */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

mod codegen;
mod common;
mod cordic;
mod fixed;

pub use codegen::{CHeader, CSource};
pub use cordic::MAX_ITERATIONS;
pub use fixed::{Error, FixedCordic, FixedPointFormat, StorageWidth};

use core::marker::PhantomData;
use common::{Base, Folded};

/******************************************************************************/

/// Iteration count used by [`get_sin_cos()`]
pub const DEFAULT_ITERATIONS: usize = 16;

/// The floating point CORDIC engine
///
/// `T` is the accumulator type (`f32` or `f64`) and `N` the number of micro-rotations, between 1
/// and [`MAX_ITERATIONS`]. An invalid `N` is rejected at compile time. Angles are in degrees.
pub struct CordicTrig<T, const N: usize = { DEFAULT_ITERATIONS }>(PhantomData<T>);

macro_rules! gen_atan_table {
    ($type: ty) => {
        {
            let mut table = [0.0; N];
            let mut i = 0;
            while i < N {
                table[i] = cordic::ATAN_DEG_TABLE[i] as $type;
                i += 1;
            }
            table
        }
    }
}

macro_rules! gen_sin_cos {
    ($type: ty, $degrees: ident) => {
        {
            assert!(Base::<N>::IS_N_VALID);

            let folded = Folded::<$type>::new($degrees);
            if folded.angle.is_nan() {
                return (<$type>::NAN, <$type>::NAN);
            }

            let mut x = Self::GAIN;
            let mut y = 0.0;
            let mut z = folded.angle;
            let mut p2i = 1.0;
            for atan in Self::ATAN_TABLE {
                let (dx, dy) = (y * p2i, x * p2i);
                if z >= 0.0 {
                    x -= dx;
                    y += dy;
                    z -= atan;
                } else {
                    x += dx;
                    y -= dy;
                    z += atan;
                }
                p2i /= 2.0;
            }

            folded.unfold(y, x)
        }
    }
}

/******************************************************************************/

impl<const N: usize> CordicTrig<f32, N> {
    const ATAN_TABLE: [f32; N] = {
        gen_atan_table!(f32)
    };
    const GAIN: f32 = cordic::K_TABLE[N - 1] as f32;

    /// Sine and cosine of an angle in degrees, with f32 precision
    ///
    /// For example:
    /// ```
    /// use cordic_trig::CordicTrig;
    ///
    /// let (sine, cosine) = CordicTrig::<f32, 20>::sin_cos(30.0);
    /// assert!((sine - 0.5).abs() < 1e-4);
    /// assert!((cosine - 0.866_025_4).abs() < 1e-4);
    /// ```
    pub fn sin_cos(degrees: f32) -> (f32, f32) {
        gen_sin_cos!(f32, degrees)
    }
}

impl<const N: usize> CordicTrig<f64, N> {
    const ATAN_TABLE: [f64; N] = {
        gen_atan_table!(f64)
    };
    const GAIN: f64 = cordic::K_TABLE[N - 1];

    /// Sine and cosine of an angle in degrees, with f64 precision
    ///
    /// For example:
    /// ```
    /// use cordic_trig::CordicTrig;
    ///
    /// let (sine, cosine) = CordicTrig::<f64, 40>::sin_cos(-120.0);
    /// assert!((sine + 0.866_025_403_784_438_6).abs() < 1e-9);
    /// assert!((cosine + 0.5).abs() < 1e-9);
    /// ```
    pub fn sin_cos(degrees: f64) -> (f64, f64) {
        gen_sin_cos!(f64, degrees)
    }
}

/// Sine and cosine of an angle in degrees
///
/// Runs [`DEFAULT_ITERATIONS`] micro-rotations in f32, which keeps the absolute error well below
/// 0.001 over the whole domain. Any finite angle is accepted; NaN and infinities give NaN.
pub fn get_sin_cos(degrees: f32) -> (f32, f32) {
    CordicTrig::<f32>::sin_cos(degrees)
}

/******************************************************************************/
