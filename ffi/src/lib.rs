/* cordic_trig_ffi | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

//! C linkage for [`cordic_trig::get_sin_cos()`]
//!
//! Built as a static and a dynamic library exporting `cordic_trig_get_sin_cos()`, declared in
//! `include/cordic_trig.h` with the same prototype as the generated C module. C code and test
//! binaries link against `libcordic_trig_ffi` instead of compiling the generated source.

/******************************************************************************/

/// Computes the sine and cosine of `theta_deg` (in degrees)
///
/// A null output pointer is skipped.
///
/// # Safety
///
/// `sin_val` and `cos_val` must each be null or valid for writing an `f32`.
#[no_mangle]
pub unsafe extern "C" fn cordic_trig_get_sin_cos(theta_deg: f32, sin_val: *mut f32, cos_val: *mut f32) {
    let (sine, cosine) = cordic_trig::get_sin_cos(theta_deg);
    if let Some(sin_val) = sin_val.as_mut() {
        *sin_val = sine;
    }
    if let Some(cos_val) = cos_val.as_mut() {
        *cos_val = cosine;
    }
}

/******************************************************************************/
