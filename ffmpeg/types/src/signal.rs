/*!
    Link status signals.
*/

use crate::Pts;

/**
    Terminal status of a link.

    A link without a status is still open. Once a status is set it never
    changes, and no frames follow it.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LinkStatus {
    /**
        End of stream, no more frames will be produced.

        Carries the timestamp at which the stream ended, which stages
        propagate unchanged to their own output.
    */
    Eof { pts: Pts },
}

impl LinkStatus {
    /**
        Returns the timestamp the status was set at.
    */
    pub const fn pts(self) -> Pts {
        match self {
            Self::Eof { pts } => pts,
        }
    }

    /**
        Returns true if this status marks end of stream.
    */
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_carries_pts() {
        let status = LinkStatus::Eof { pts: Pts(300) };
        assert!(status.is_eof());
        assert_eq!(status.pts(), Pts(300));
    }

    #[test]
    fn status_is_copy() {
        let s = LinkStatus::Eof { pts: Pts(1) };
        let s2 = s;
        assert_eq!(s, s2);
    }
}
