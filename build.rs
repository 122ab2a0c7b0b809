use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const TABLE_SIZE: usize = 64;

fn compute_atan_table() -> [f64; TABLE_SIZE] {
    (0..TABLE_SIZE)
        .map(|i| f64::atan2(1.0, f64::powf(2.0, i as _)))
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn compute_gain_table() -> [f64; TABLE_SIZE] {
    let mut k = 1.0;
    (0..TABLE_SIZE)
        .map(|i| { k *= 1.0 / f64::sqrt(1.0 + f64::powf(2.0, -2.0 * i as f64)); k })
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let atan_table = compute_atan_table();
    let atan_deg_table = atan_table.map(f64::to_degrees);
    let gain_table = compute_gain_table();

    writeln!(&mut f, "/// Number of entries in every generated table").unwrap();
    writeln!(&mut f, "pub const MAX_ITERATIONS: usize = {};", TABLE_SIZE).unwrap();
    writeln!(&mut f, "/// atan(2^-i) in radians").unwrap();
    writeln!(&mut f, "#[allow(clippy::approx_constant)]").unwrap();
    writeln!(&mut f, "pub const ATAN_TABLE: [f64; {}] = {:?};", atan_table.len(), atan_table).unwrap();
    writeln!(&mut f, "/// atan(2^-i) in degrees").unwrap();
    writeln!(&mut f, "pub const ATAN_DEG_TABLE: [f64; {}] = {:?};", atan_deg_table.len(), atan_deg_table).unwrap();
    writeln!(&mut f, "/// Gain compensation after i + 1 micro-rotations").unwrap();
    writeln!(&mut f, "pub const K_TABLE: [f64; {}] = {:?};", gain_table.len(), gain_table).unwrap();
}
