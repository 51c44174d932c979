/*!
    Timestamp type for media timing.
*/

use std::time::Duration;

use crate::Rational;

/**
    Presentation timestamp in time_base units.

    This is the raw timestamp value carried by a frame. To convert it to
    seconds you need the time base of the link the frame travels on.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pts(pub i64);

impl Pts {
    /**
        Convert this PTS to seconds using the given time base.

        The multiplication happens before the division so that whole-second
        timestamps (60 ticks at 1/30) come out exact.
    */
    #[inline]
    pub fn to_seconds(self, time_base: Rational) -> f64 {
        (self.0 as f64 * time_base.num as f64) / time_base.den as f64
    }

    /**
        Returns true if this timestamp lies strictly after `seconds`.

        Evaluated as `pts * num > seconds * den` in 128-bit integers, so the
        comparison is exact for every `i64` timestamp and `i32` time base.
        An invalid time base (zero denominator) never exceeds anything.
    */
    #[inline]
    pub fn exceeds_seconds(self, seconds: i64, time_base: Rational) -> bool {
        let ticks = self.0 as i128 * time_base.num as i128;
        let limit = seconds as i128 * time_base.den as i128;
        match time_base.den {
            0 => false,
            den if den > 0 => ticks > limit,
            _ => ticks < limit,
        }
    }

    /**
        Convert this PTS to a Duration using the given time base.

        Negative PTS values are clamped to zero.
    */
    #[inline]
    pub fn to_duration(self, time_base: Rational) -> Duration {
        if self.0 <= 0 || !time_base.is_valid() {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.to_seconds(time_base).max(0.0))
    }

    /**
        Create a PTS from a Duration using the given time base.
    */
    #[inline]
    pub fn from_duration(duration: Duration, time_base: Rational) -> Self {
        let seconds = duration.as_secs_f64();
        Self((seconds / time_base.to_f64()).round() as i64)
    }
}

impl From<i64> for Pts {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Pts> for i64 {
    fn from(pts: Pts) -> Self {
        pts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TB_1_30: Rational = Rational { num: 1, den: 30 };
    const TB_1_1000: Rational = Rational { num: 1, den: 1000 };
    const TB_NTSC: Rational = Rational {
        num: 1001,
        den: 30000,
    };

    #[test]
    fn to_seconds_is_exact_on_whole_seconds() {
        assert_eq!(Pts(60).to_seconds(TB_1_30), 2.0);
        assert_eq!(Pts(45).to_seconds(TB_1_30), 1.5);
        assert_eq!(Pts(75).to_seconds(TB_1_30), 2.5);
    }

    #[test]
    fn exceeds_is_strict() {
        assert!(!Pts(60).exceeds_seconds(2, TB_1_30));
        assert!(Pts(61).exceeds_seconds(2, TB_1_30));
        assert!(!Pts(59).exceeds_seconds(2, TB_1_30));
        assert!(!Pts(0).exceeds_seconds(0, TB_1_30));
        assert!(Pts(1).exceeds_seconds(0, TB_1_30));
    }

    #[test]
    fn exceeds_with_non_unit_numerator() {
        // 60 * 1001 / 30000 = 2.002s
        assert!(Pts(60).exceeds_seconds(2, TB_NTSC));
        // 59 * 1001 / 30000 = 1.968s
        assert!(!Pts(59).exceeds_seconds(2, TB_NTSC));
    }

    #[test]
    fn exceeds_with_negative_denominator() {
        let tb = Rational { num: -1, den: -30 };
        assert!(!Pts(60).exceeds_seconds(2, tb));
        assert!(Pts(61).exceeds_seconds(2, tb));
    }

    #[test]
    fn exceeds_does_not_overflow() {
        let tb = Rational {
            num: i32::MAX,
            den: 1,
        };
        assert!(Pts(i64::MAX).exceeds_seconds(i64::MAX, tb));
        assert!(!Pts(i64::MIN).exceeds_seconds(0, tb));
    }

    #[test]
    fn exceeds_invalid_time_base() {
        let tb = Rational { num: 1, den: 0 };
        assert!(!Pts(1_000).exceeds_seconds(0, tb));
    }

    #[test]
    fn pts_to_duration() {
        assert_eq!(Pts(1500).to_duration(TB_1_1000), Duration::from_millis(1500));
        assert_eq!(Pts(-100).to_duration(TB_1_1000), Duration::ZERO);
    }

    #[test]
    fn pts_from_duration() {
        let pts = Pts::from_duration(Duration::from_secs(2), TB_1_30);
        assert_eq!(pts, Pts(60));
    }

    #[test]
    fn pts_ordering() {
        assert!(Pts(100) < Pts(200));
        assert_eq!(i64::from(Pts(7)), 7);
        assert_eq!(Pts::from(7), Pts(7));
    }
}
