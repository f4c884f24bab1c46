//! Core traits shared by the engine components
//!
//! Keep them small. The engine is a handful of pure functions, not a
//! framework.

/// Values that can be checked for being usable sensor data
pub trait Validatable {
    /// Check if the value is a real measurement (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
    }
}
