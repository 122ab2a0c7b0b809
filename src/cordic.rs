/* cordic_trig | cordic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

include!(concat!(env!("OUT_DIR"), "/cordic_tables.rs"));

/******************************************************************************/

/// Shift-and-add rotation on scaled integers
///
/// Rotates `(x, y)` by the angle `z` (in the same scale as `atan_table`), one micro-rotation
/// per table entry. Returns the rotated `(x, y)` pair.
pub fn rotate_fixed(mut x: i64, mut y: i64, mut z: i64, atan_table: &[i64]) -> (i64, i64) {
    for (i, &atan) in atan_table.iter().enumerate() {
        let (dx, dy) = (y >> i, x >> i);
        if z >= 0 {
            x -= dx;
            y += dy;
            z -= atan;
        } else {
            x += dx;
            y -= dy;
            z += atan;
        }
    }
    (x, y)
}

/******************************************************************************/
