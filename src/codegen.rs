/* cordic_trig | codegen.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* C rendition of a fixed point CORDIC engine */

/******************************************************************************/

use core::fmt;

use crate::fixed::FixedCordic;

/******************************************************************************/

/// C header declaring a generated `<prefix>_get_sin_cos()` function
///
/// Obtained from [`FixedCordic::c_header()`], rendered through [`fmt::Display`].
pub struct CHeader<'a> {
    cordic: &'a FixedCordic,
    file_name: &'a str,
    prefix: &'a str
}

/// C source implementing a generated `<prefix>_get_sin_cos()` function
///
/// Obtained from [`FixedCordic::c_source()`], rendered through [`fmt::Display`]. The generated
/// function takes an angle in degrees and performs the same wrapping, folding and shift-and-add
/// rotation as [`FixedCordic::get_sin_cos()`].
pub struct CSource<'a> {
    cordic: &'a FixedCordic,
    file_name: &'a str,
    prefix: &'a str
}

impl FixedCordic {
    /// Renders the header of a C module equivalent to this engine
    ///
    /// For example:
    /// ```
    /// use cordic_trig::{FixedCordic, FixedPointFormat};
    ///
    /// let cordic = FixedCordic::new(16, FixedPointFormat::default())?;
    /// let header = cordic.c_header("cordic_trig_generated", "cordic_trig").to_string();
    /// assert!(header.contains("typedef int32_t cordic_trig_fixed_point_t;"));
    /// # Ok::<(), cordic_trig::Error>(())
    /// ```
    pub fn c_header<'a>(&'a self, file_name: &'a str, prefix: &'a str) -> CHeader<'a> {
        CHeader { cordic: self, file_name, prefix }
    }

    /// Renders the source of a C module equivalent to this engine
    pub fn c_source<'a>(&'a self, file_name: &'a str, prefix: &'a str) -> CSource<'a> {
        CSource { cordic: self, file_name, prefix }
    }
}

/******************************************************************************/

/// Writes `s` in upper case without allocating
fn write_upper(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    s.chars().try_for_each(|c| fmt::Write::write_char(f, c.to_ascii_uppercase()))
}

impl fmt::Display for CHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix;
        let fixed_point_type = self.cordic.format().storage().c_type();

        f.write_str("#ifndef ")?;
        write_upper(f, self.file_name)?;
        f.write_str("_H\n#define ")?;
        write_upper(f, self.file_name)?;
        f.write_str("_H\n")?;

        write!(f, r#"
#include <stdint.h>

typedef {fixed_point_type} {prefix}_fixed_point_t;

/**
 * @brief Get the sine and cosine values of the given angle in degrees
 *
 * @param theta_deg Angle in degrees
 * @param sin_val Pointer to the sine value, may be NULL
 * @param cos_val Pointer to the cosine value, may be NULL
 */
void {prefix}_get_sin_cos(float theta_deg, float *sin_val, float *cos_val);

#endif // "#)?;
        write_upper(f, self.file_name)?;
        f.write_str("_H\n")
    }
}

impl fmt::Display for CSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix;
        let file_name = self.file_name;
        let format = self.cordic.format();
        let iterations = self.cordic.iterations();
        let scaling_factor = format.scaling_factor();
        let fractional_bits = format.fractional_bits();
        let cos_k1 = self.cordic.cos_k1();

        write!(f, r#"#include "{file_name}.h"
#include <math.h>
#include <stddef.h>

#define ATAN_TABLE_SIZE {iterations}
#define FIXED_POINT_SCALING_FACTOR {scaling_factor}LL // (1 << {fractional_bits}), {format} format
#define ONE_OVER_FIXED_POINT_SCALING_FACTOR (1.0F / (float)FIXED_POINT_SCALING_FACTOR)
#define COS_K1 {cos_k1}LL
#define DEG_TO_RAD 0.017453292519943295F

static const {prefix}_fixed_point_t ATAN_TABLE[ATAN_TABLE_SIZE] = {{"#)?;

        for (i, atan) in self.cordic.atan_table().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{atan}LL")?;
        }

        write!(f, r#"}};

void {prefix}_get_sin_cos(float theta_deg, float *sin_val, float *cos_val) {{
    float wrapped = fmodf(theta_deg, 360.0F);
    int negate_cos = 0;
    {prefix}_fixed_point_t x = COS_K1;
    {prefix}_fixed_point_t y = 0;
    {prefix}_fixed_point_t z;

    if (wrapped > 180.0F) {{
        wrapped -= 360.0F;
    }} else if (wrapped <= -180.0F) {{
        wrapped += 360.0F;
    }}

    if (wrapped > 90.0F) {{
        wrapped = 180.0F - wrapped;
        negate_cos = 1;
    }} else if (wrapped < -90.0F) {{
        wrapped = -180.0F - wrapped;
        negate_cos = 1;
    }}

    z = ({prefix}_fixed_point_t)(wrapped * DEG_TO_RAD * (float)FIXED_POINT_SCALING_FACTOR);

    for (size_t i = 0; i < ATAN_TABLE_SIZE; i++) {{
        {prefix}_fixed_point_t x_new;
        {prefix}_fixed_point_t y_new;

        if (z >= 0) {{
            x_new = x - (y >> i);
            y_new = y + (x >> i);
            z -= ATAN_TABLE[i];
        }} else {{
            x_new = x + (y >> i);
            y_new = y - (x >> i);
            z += ATAN_TABLE[i];
        }}

        x = x_new;
        y = y_new;
    }}

    if (sin_val) {{
        *sin_val = (float)y * ONE_OVER_FIXED_POINT_SCALING_FACTOR;
    }}

    if (cos_val) {{
        *cos_val = (float)(negate_cos ? -x : x) * ONE_OVER_FIXED_POINT_SCALING_FACTOR;
    }}
}}
"#)
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::fixed::FixedPointFormat;
    use std::string::ToString;

    #[test]
    fn test_header() {
        let cordic = FixedCordic::new(16, FixedPointFormat::default()).unwrap();
        let header = cordic.c_header("cordic_trig_generated", "cordic_trig").to_string();

        assert!(header.starts_with("#ifndef CORDIC_TRIG_GENERATED_H\n#define CORDIC_TRIG_GENERATED_H\n"));
        assert!(header.contains("#include <stdint.h>"));
        assert!(header.contains("typedef int32_t cordic_trig_fixed_point_t;"));
        assert!(header.contains("void cordic_trig_get_sin_cos(float theta_deg, float *sin_val, float *cos_val);"));
        assert!(header.ends_with("#endif // CORDIC_TRIG_GENERATED_H\n"));
    }

    #[test]
    fn test_header_storage() {
        let cordic = FixedCordic::new(12, "2.14".parse().unwrap()).unwrap();
        let header = cordic.c_header("trig", "q15").to_string();
        assert!(header.contains("typedef int16_t q15_fixed_point_t;"));

        let cordic = FixedCordic::new(40, "2.56".parse().unwrap()).unwrap();
        let header = cordic.c_header("trig", "q58").to_string();
        assert!(header.contains("typedef int64_t q58_fixed_point_t;"));
    }

    #[test]
    fn test_source() {
        let cordic = FixedCordic::new(4, FixedPointFormat::default()).unwrap();
        let source = cordic.c_source("cordic_trig_generated", "cordic_trig").to_string();

        assert!(source.starts_with("#include \"cordic_trig_generated.h\"\n"));
        assert!(source.contains("#define ATAN_TABLE_SIZE 4\n"));
        assert!(source.contains("#define FIXED_POINT_SCALING_FACTOR 1073741824LL // (1 << 30), 2.30 format\n"));
        assert!(source.contains(&std::format!("#define COS_K1 {}LL\n", cordic.cos_k1())));

        let table = std::format!(
            "static const cordic_trig_fixed_point_t ATAN_TABLE[ATAN_TABLE_SIZE] = {{{}LL, {}LL, {}LL, {}LL}};",
            cordic.atan_table()[0], cordic.atan_table()[1], cordic.atan_table()[2], cordic.atan_table()[3]
        );
        assert!(source.contains(&table));
        assert!(source.contains("void cordic_trig_get_sin_cos(float theta_deg, float *sin_val, float *cos_val) {"));
        assert!(source.contains("x_new = x - (y >> i);"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn test_table_size_within_shift_width() {
        let cordic = FixedCordic::new(32, FixedPointFormat::default()).unwrap();
        let source = cordic.c_source("a", "b").to_string();
        assert!(source.contains("#define ATAN_TABLE_SIZE 32\n"));
        assert!(FixedCordic::new(33, FixedPointFormat::default()).is_err());

        let cordic = FixedCordic::new(64, "2.62".parse().unwrap()).unwrap();
        let source = cordic.c_source("a", "b").to_string();
        assert!(source.contains("#define ATAN_TABLE_SIZE 64\n"));
        assert!(cordic.c_header("a", "b").to_string().contains("typedef int64_t b_fixed_point_t;"));
    }

    #[test]
    fn test_balanced_braces() {
        let cordic = FixedCordic::new(16, FixedPointFormat::default()).unwrap();
        let source = cordic.c_source("a", "b").to_string();
        let opened = source.matches('{').count();
        let closed = source.matches('}').count();
        assert_eq!(opened, closed);
    }
}
