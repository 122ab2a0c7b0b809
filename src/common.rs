/* cordic_trig | common.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use crate::cordic::MAX_ITERATIONS;

/******************************************************************************/

pub struct Base<const N: usize>;

impl<const N: usize> Base<N> {
    /// Compile time check of the iteration count
    pub const IS_N_VALID: bool = {
        assert!(N >= 1, "At least one CORDIC iteration is required");
        assert!(N <= MAX_ITERATIONS, "The CORDIC iteration count must not exceed the table size");
        true
    };
}

/******************************************************************************/

/// Angle brought back into the convergence range of the rotation
///
/// The rotation only converges for roughly +/- 99.9 degrees, so the input is first wrapped into
/// (-180, 180] and then reflected about the y axis when it lies in the left half-plane. The
/// reflection keeps the sine and flips the sign of the cosine.
pub struct Folded<T> {
    pub angle: T,
    pub negate_cos: bool
}

macro_rules! gen_folded {
    ($type: ty) => {
        impl Folded<$type> {
            /// Wraps an angle in degrees into the half-open range (-180, 180]
            pub fn wrap(degrees: $type) -> $type {
                let mut wrapped = degrees % 360.0;
                if wrapped > 180.0 {
                    wrapped -= 360.0;
                } else if wrapped <= -180.0 {
                    wrapped += 360.0;
                }
                wrapped
            }

            pub fn new(degrees: $type) -> Self {
                let wrapped = Self::wrap(degrees);
                if wrapped > 90.0 {
                    Self { angle: 180.0 - wrapped, negate_cos: true }
                } else if wrapped < -90.0 {
                    Self { angle: -180.0 - wrapped, negate_cos: true }
                } else {
                    Self { angle: wrapped, negate_cos: false }
                }
            }

            /// Applies the reflection to a rotation result
            pub fn unfold(&self, sin: $type, cos: $type) -> ($type, $type) {
                if self.negate_cos {
                    (sin, -cos)
                } else {
                    (sin, cos)
                }
            }
        }
    }
}

gen_folded!(f32);
gen_folded!(f64);

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(Folded::<f32>::wrap(0.0), 0.0);
        assert_eq!(Folded::<f32>::wrap(180.0), 180.0);
        assert_eq!(Folded::<f32>::wrap(-180.0), 180.0);
        assert_eq!(Folded::<f32>::wrap(270.0), -90.0);
        assert_eq!(Folded::<f32>::wrap(-270.0), 90.0);
        assert_eq!(Folded::<f32>::wrap(405.0), 45.0);
        assert_eq!(Folded::<f64>::wrap(-720.0 - 30.0), -30.0);
        assert_eq!(Folded::<f64>::wrap(3600.0 + 181.0), -179.0);
        assert!(Folded::<f32>::wrap(f32::NAN).is_nan());
        assert!(Folded::<f32>::wrap(f32::INFINITY).is_nan());
    }

    #[test]
    fn test_fold() {
        let folded = Folded::<f64>::new(135.0);
        assert_eq!(folded.angle, 45.0);
        assert!(folded.negate_cos);

        let folded = Folded::<f64>::new(-135.0);
        assert_eq!(folded.angle, -45.0);
        assert!(folded.negate_cos);

        let folded = Folded::<f64>::new(180.0);
        assert_eq!(folded.angle, 0.0);
        assert!(folded.negate_cos);

        for degrees in [-90.0, -45.0, 0.0, 60.0, 90.0] {
            let folded = Folded::<f32>::new(degrees);
            assert_eq!(folded.angle, degrees);
            assert!(!folded.negate_cos);
        }

        assert_eq!(Folded::<f32>::new(135.0).unfold(0.5, 0.25), (0.5, -0.25));
        assert_eq!(Folded::<f32>::new(45.0).unfold(0.5, 0.25), (0.5, 0.25));
    }
}
