/*!
    Pixel format types.
*/

/**
    Video pixel formats.

    A subset of the formats a filter graph negotiates. Only [`PixelFormat::Yuv420p`]
    is handled by the mirroring stage, the rest are here so they can be
    recognised and rejected.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    /// Planar YUV 4:2:0, 12bpp (most common video format)
    Yuv420p,
    /// Planar YUV 4:2:2, 16bpp
    Yuv422p,
    /// Planar YUV 4:4:4, 24bpp
    Yuv444p,
    /// Semi-planar YUV 4:2:0, 12bpp (common hardware decoder output)
    Nv12,
    /// Packed RGBA, 32bpp
    Rgba,
    /// Packed BGRA, 32bpp
    Bgra,
}

impl PixelFormat {
    /**
        Returns the number of planes this format stores.
    */
    pub const fn plane_count(self) -> usize {
        match self {
            Self::Yuv420p | Self::Yuv422p | Self::Yuv444p => 3,
            Self::Nv12 => 2,
            Self::Rgba | Self::Bgra => 1,
        }
    }

    /**
        Returns true if this is a planar format.
    */
    pub const fn is_planar(self) -> bool {
        match self {
            Self::Yuv420p | Self::Yuv422p | Self::Yuv444p => true,
            Self::Nv12 => true, // semi-planar counts as planar
            Self::Rgba | Self::Bgra => false,
        }
    }

    /**
        Returns the logical `(row_bytes, rows)` of plane `index` for a frame
        of the given size, or `None` if the format has no such plane.

        Subsampled dimensions round down, so a 5x3 4:2:0 frame has
        2x1 chroma planes.
    */
    pub const fn plane_size(
        self,
        index: usize,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        if index >= self.plane_count() {
            return None;
        }
        let size = match (self, index) {
            (Self::Yuv420p, 0) | (Self::Yuv422p, 0) | (Self::Yuv444p, 0) => (width, height),
            (Self::Yuv420p, _) => (width / 2, height / 2),
            (Self::Yuv422p, _) => (width / 2, height),
            (Self::Yuv444p, _) => (width, height),
            (Self::Nv12, 0) => (width, height),
            // interleaved UV, half the rows
            (Self::Nv12, _) => (width / 2 * 2, height / 2),
            (Self::Rgba, _) | (Self::Bgra, _) => (width * 4, height),
        };
        Some(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_counts() {
        assert_eq!(PixelFormat::Yuv420p.plane_count(), 3);
        assert_eq!(PixelFormat::Nv12.plane_count(), 2);
        assert_eq!(PixelFormat::Bgra.plane_count(), 1);
    }

    #[test]
    fn is_planar() {
        assert!(PixelFormat::Yuv420p.is_planar());
        assert!(PixelFormat::Nv12.is_planar());
        assert!(!PixelFormat::Rgba.is_planar());
    }

    #[test]
    fn yuv420p_plane_sizes() {
        let f = PixelFormat::Yuv420p;
        assert_eq!(f.plane_size(0, 640, 480), Some((640, 480)));
        assert_eq!(f.plane_size(1, 640, 480), Some((320, 240)));
        assert_eq!(f.plane_size(2, 640, 480), Some((320, 240)));
        assert_eq!(f.plane_size(3, 640, 480), None);
    }

    #[test]
    fn odd_dimensions_round_down() {
        let f = PixelFormat::Yuv420p;
        assert_eq!(f.plane_size(0, 5, 3), Some((5, 3)));
        assert_eq!(f.plane_size(1, 5, 3), Some((2, 1)));
    }

    #[test]
    fn packed_plane_size() {
        assert_eq!(PixelFormat::Bgra.plane_size(0, 10, 2), Some((40, 2)));
        assert_eq!(PixelFormat::Bgra.plane_size(1, 10, 2), None);
    }
}
