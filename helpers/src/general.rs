use rand::Rng;
use std::error::Error;
use std::fmt;

/// InputValueError is used if some service option or race parameter does not fulfill the posed
/// requirements, e.g., by binding the service to port 0.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

/// round_to_decimals rounds x to the given number of decimal places (half away from zero).
pub fn round_to_decimals(x: f64, decimals: u32) -> f64 {
    let factor = 10.0_f64.powi(decimals as i32);
    (x * factor).round() / factor
}

/// fmt_decimals returns x as a fixed-point string with exactly the given number of decimal
/// places, e.g. 10.0 -> "10.00". Rounds the same way as round_to_decimals.
pub fn fmt_decimals(x: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_to_decimals(x, decimals))
}

/// uniform_in_range draws a value from the half-open interval [lo, hi).
pub fn uniform_in_range<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if !(lo < hi) {
        panic!("Lower bound must be less than upper bound!")
    }

    rng.gen_range(lo..hi)
}
