/// Compound an initial amount at `rate + yield_bonus` over `years`.
///
/// Pure arithmetic with no bounds checking: negative or >100% combined
/// rates are valid inputs and compound to near-zero or large values
/// accordingly. The yield bonus approximates dividend reinvestment as a
/// flat additive annual rate; it is not a dividend simulation.
pub fn project(principal: f64, rate: f64, years: u32, yield_bonus: f64) -> f64 {
    principal * (1.0 + rate + yield_bonus).powi(years as i32)
}
