/*!
    Vertical mirroring of planar frames.
*/

use ffmpeg_types::{Error, PixelFormat, Plane, Rational, Result, VideoFrame};

/**
    Mirror a yuv420p frame top to bottom into a newly allocated frame.

    The output keeps the input's size, format, pts and time base. Each row
    copies exactly the logical row width of its plane, strides only advance
    the row positions, so stride padding is never carried over.
*/
pub fn mirror(frame: &VideoFrame) -> Result<VideoFrame> {
    if frame.format != PixelFormat::Yuv420p {
        return Err(Error::UnsupportedFormat {
            format: frame.format,
        });
    }
    frame.validate()?;

    let mut out = VideoFrame::alloc(
        frame.width,
        frame.height,
        frame.format,
        frame.pts,
        frame.time_base,
    )?;

    for (index, (src, dst)) in frame.planes.iter().zip(out.planes.iter_mut()).enumerate() {
        let (row_bytes, rows) = frame
            .plane_size(index)
            .ok_or(Error::UnsupportedFormat {
                format: frame.format,
            })?;
        mirror_plane(src, dst, row_bytes, rows);
    }

    Ok(out)
}

// Source walks first to last while destination walks last to first.
fn mirror_plane(src: &Plane, dst: &mut Plane, row_bytes: usize, rows: usize) {
    for row in 0..rows {
        dst.row_mut(rows - 1 - row, row_bytes)
            .copy_from_slice(src.row(row, row_bytes));
    }
}

/**
    Mirror `frame` if its presentation time is within the first
    `duration` seconds, otherwise hand it back untouched.

    The window is inclusive: a frame at exactly `duration` seconds is
    mirrored, anything strictly later passes through without a copy. On
    failure the input frame is dropped and nothing is returned.
*/
pub fn transform(frame: VideoFrame, duration: i64, time_base: Rational) -> Result<VideoFrame> {
    if !time_base.is_valid() {
        return Err(Error::invalid_data(format!(
            "link time base {time_base} has a zero denominator"
        )));
    }

    if frame.pts.exceeds_seconds(duration, time_base) {
        tracing::trace!(pts = frame.pts.0, "past flip window, passing through");
        return Ok(frame);
    }

    tracing::debug!(
        pts = frame.pts.0,
        time_s = frame.pts.to_seconds(time_base),
        "mirroring frame"
    );
    mirror(&frame)
}
