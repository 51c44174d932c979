/*!
    Rational number type for time bases.
*/

use std::fmt;

use crate::{Error, Result};

/**
    A rational number represented as a numerator and denominator.

    Links carry one of these as their time base (e.g. 1/30 for a
    constant 30 fps stream, 1/90000 for MPEG-TS).
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    /**
        Create a new rational number.

        # Panics

        Panics if `den` is zero. Use [`Rational::try_new`] for values
        that come from outside the program.
    */
    #[inline]
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self { num, den }
    }

    /**
        Create a new rational number, rejecting a zero denominator.
    */
    pub fn try_new(num: i32, den: i32) -> Result<Self> {
        if den == 0 {
            return Err(Error::invalid_data(format!(
                "time base {num}/{den} has a zero denominator"
            )));
        }
        Ok(Self { num, den })
    }

    /**
        Returns true if the denominator is non-zero.

        Fields are public, so a struct literal can bypass [`Rational::new`].
    */
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.den != 0
    }

    /**
        Convert to f64.
    */
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<(i32, i32)> for Rational {
    fn from((num, den): (i32, i32)) -> Self {
        Self::new(num, den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rational() {
        let r = Rational::new(1, 30);
        assert_eq!(r.num, 1);
        assert_eq!(r.den, 30);
        assert!(r.is_valid());
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn zero_denominator_panics() {
        Rational::new(1, 0);
    }

    #[test]
    fn try_new_rejects_zero_denominator() {
        let err = Rational::try_new(1, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidData { .. }));
        assert_eq!(Rational::try_new(1, 25).unwrap(), Rational::new(1, 25));
    }

    #[test]
    fn literal_can_be_invalid() {
        let r = Rational { num: 1, den: 0 };
        assert!(!r.is_valid());
    }

    #[test]
    fn to_f64_conversion() {
        assert_eq!(Rational::new(1, 2).to_f64(), 0.5);
        assert_eq!(Rational::new(1, 1000).to_f64(), 0.001);
        assert_eq!(Rational::new(1001, 30000).to_f64(), 1001.0 / 30000.0);
    }

    #[test]
    fn from_tuple() {
        let r: Rational = (1, 90000).into();
        assert_eq!(r.num, 1);
        assert_eq!(r.den, 90000);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rational::new(1, 30)), "1/30");
        assert_eq!(format!("{:?}", Rational::new(1001, 30000)), "1001/30000");
    }
}
