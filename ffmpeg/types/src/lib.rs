/*!
    Shared types for the ffmpeg filter crates.

    This crate defines the vocabulary that crosses the boundary between a filter
    stage and the graph driving it. It has no dependency on FFmpeg, so stages can
    be built and tested against plain in-memory buffers.

    # Core Types

    - [`Rational`] - Rational numbers for time bases
    - [`Pts`] - Timestamps in time_base units
    - [`VideoFrame`] and [`Plane`] - Planar frame data with per-plane stride

    # Format Types

    - [`PixelFormat`] - Video pixel formats and their plane geometry

    # Link Status

    - [`LinkStatus`] - Terminal status of a link (end of stream)

    # Error Handling

    - [`Error`] and [`Result`] - Common error types
*/

mod error;
mod format;
mod frame;
mod rational;
mod signal;
mod timestamp;

pub use error::{Error, Result};
pub use format::PixelFormat;
pub use frame::{FRAME_ALIGN, Plane, VideoFrame};
pub use rational::Rational;
pub use signal::LinkStatus;
pub use timestamp::Pts;
