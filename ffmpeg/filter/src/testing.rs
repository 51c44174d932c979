//! Frame builders shared by the unit tests.

use ffmpeg_types::{PixelFormat, Plane, Pts, Rational, VideoFrame};

pub(crate) const TB_1_30: Rational = Rational { num: 1, den: 30 };

/// Byte written into stride padding, never part of a row.
pub(crate) const PADDING: u8 = 0xEE;

/**
    A yuv420p frame whose every row is distinct, with strides padded past
    the row width so stride handling is exercised.
*/
pub(crate) fn gradient_frame(width: u32, height: u32, pts: i64) -> VideoFrame {
    let planes = (0..3)
        .map(|index| {
            let (row_bytes, rows) = PixelFormat::Yuv420p
                .plane_size(index, width as usize, height as usize)
                .unwrap();
            let stride = row_bytes + 7;
            let mut data = vec![PADDING; stride * rows];
            for row in 0..rows {
                for col in 0..row_bytes {
                    data[row * stride + col] = (index * 80 + row * 3 + col) as u8;
                }
            }
            Plane::new(stride, data)
        })
        .collect();

    VideoFrame::new(
        width,
        height,
        PixelFormat::Yuv420p,
        Pts(pts),
        TB_1_30,
        planes,
    )
}

/// Logical rows of one plane, padding stripped.
pub(crate) fn rows(frame: &VideoFrame, index: usize) -> Vec<Vec<u8>> {
    let (row_bytes, rows) = frame.plane_size(index).unwrap();
    (0..rows)
        .map(|row| frame.planes[index].row(row, row_bytes).to_vec())
        .collect()
}

/// Returns true if `out` is `input` mirrored top to bottom on every plane.
pub(crate) fn is_mirror_of(out: &VideoFrame, input: &VideoFrame) -> bool {
    (0..3).all(|index| {
        let mut expected = rows(input, index);
        expected.reverse();
        rows(out, index) == expected
    })
}
