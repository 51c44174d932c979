/*!
    Planar video frame types.
*/

use crate::{Error, PixelFormat, Pts, Rational, Result};

/**
    Row alignment, in bytes, of every plane allocated by [`VideoFrame::alloc`].
*/
pub const FRAME_ALIGN: usize = 32;

/**
    One plane of a video frame.

    Rows start every `stride` bytes. The stride may exceed the logical row
    width of the plane (for alignment), bytes past the row width are padding.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    /// Bytes between the start of consecutive rows.
    pub stride: usize,
    /// Row data, at least `stride * rows` bytes.
    pub data: Vec<u8>,
}

impl Plane {
    /**
        Wrap an existing buffer as a plane.
    */
    pub fn new(stride: usize, data: Vec<u8>) -> Self {
        Self { stride, data }
    }

    /**
        Allocate a zeroed plane for `rows` rows of `row_bytes` bytes each,
        with the stride rounded up to [`FRAME_ALIGN`].
    */
    pub fn alloc(row_bytes: usize, rows: usize) -> Result<Self> {
        let stride = row_bytes
            .checked_add(FRAME_ALIGN - 1)
            .map(|bytes| bytes & !(FRAME_ALIGN - 1))
            .ok_or(Error::allocation(usize::MAX))?;
        let len = stride
            .checked_mul(rows)
            .ok_or(Error::allocation(usize::MAX))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::allocation(len))?;
        data.resize(len, 0);

        Ok(Self { stride, data })
    }

    /**
        Returns the first `len` bytes of row `index`.

        # Panics

        Panics if the row lies outside the buffer.
    */
    #[inline]
    pub fn row(&self, index: usize, len: usize) -> &[u8] {
        let start = index * self.stride;
        &self.data[start..start + len]
    }

    /**
        Returns the first `len` bytes of row `index`, mutably.

        # Panics

        Panics if the row lies outside the buffer.
    */
    #[inline]
    pub fn row_mut(&mut self, index: usize, len: usize) -> &mut [u8] {
        let start = index * self.stride;
        &mut self.data[start..start + len]
    }
}

/**
    A decoded video frame.

    Pixel data lives in one [`Plane`] per component as laid out by `format`.
    For [`PixelFormat::Yuv420p`] that is a full-resolution luma plane followed
    by two chroma planes at half width and half height.

    Frames are moved, never shared: whoever holds the value owns the buffers.
*/
#[derive(Clone, Debug)]
pub struct VideoFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel format of the planes.
    pub format: PixelFormat,
    /// Presentation timestamp, shared by all planes.
    pub pts: Pts,
    /// Time base for interpreting the PTS.
    pub time_base: Rational,
    /// Plane buffers in format order.
    pub planes: Vec<Plane>,
}

impl VideoFrame {
    /**
        Create a new video frame from existing planes.
    */
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pts: Pts,
        time_base: Rational,
        planes: Vec<Plane>,
    ) -> Self {
        Self {
            width,
            height,
            format,
            pts,
            time_base,
            planes,
        }
    }

    /**
        Allocate a zeroed frame with freshly allocated, aligned planes.

        Fails with [`Error::Allocation`] if any buffer cannot be obtained.
    */
    pub fn alloc(
        width: u32,
        height: u32,
        format: PixelFormat,
        pts: Pts,
        time_base: Rational,
    ) -> Result<Self> {
        let count = format.plane_count();
        let mut planes = Vec::new();
        planes
            .try_reserve_exact(count)
            .map_err(|_| Error::allocation(count * std::mem::size_of::<Plane>()))?;

        for index in 0..count {
            let (row_bytes, rows) = format
                .plane_size(index, width as usize, height as usize)
                .ok_or(Error::UnsupportedFormat { format })?;
            planes.push(Plane::alloc(row_bytes, rows)?);
        }

        Ok(Self::new(width, height, format, pts, time_base, planes))
    }

    /**
        Returns the logical `(row_bytes, rows)` of plane `index`.
    */
    pub fn plane_size(&self, index: usize) -> Option<(usize, usize)> {
        self.format
            .plane_size(index, self.width as usize, self.height as usize)
    }

    /**
        Check that the planes match the format and are large enough
        for their stride and row count.
    */
    pub fn validate(&self) -> Result<()> {
        let expected = self.format.plane_count();
        if self.planes.len() != expected {
            return Err(Error::invalid_data(format!(
                "{:?} frame has {} planes, expected {expected}",
                self.format,
                self.planes.len()
            )));
        }

        for (index, plane) in self.planes.iter().enumerate() {
            let Some((row_bytes, rows)) = self.plane_size(index) else {
                return Err(Error::UnsupportedFormat {
                    format: self.format,
                });
            };
            if plane.stride < row_bytes {
                return Err(Error::invalid_data(format!(
                    "plane {index} stride {} is below row width {row_bytes}",
                    plane.stride
                )));
            }
            let needed = plane.stride.checked_mul(rows).ok_or_else(|| {
                Error::invalid_data(format!("plane {index} size overflows"))
            })?;
            if plane.data.len() < needed {
                return Err(Error::invalid_data(format!(
                    "plane {index} holds {} bytes, needs {needed}",
                    plane.data.len()
                )));
            }
        }

        Ok(())
    }

    /**
        Returns the presentation time in seconds.
    */
    pub fn time_seconds(&self) -> f64 {
        self.pts.to_seconds(self.time_base)
    }

    /**
        Returns the presentation time as a Duration.
    */
    pub fn presentation_time(&self) -> std::time::Duration {
        self.pts.to_duration(self.time_base)
    }
}

// Ensure frames can move between threads driving different graph branches
static_assertions::assert_impl_all!(VideoFrame: Send, Sync);
static_assertions::assert_impl_all!(Plane: Send, Sync);
