//! Parametric plasma source models.

pub mod tokamak;

/// Floating-point precision to use for plasma source models.
#[allow(non_camel_case_types)]
pub type fpl = f64;
