/// Source taps for one output coordinate: two neighbouring indices and the
/// weight of the second one.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Taps {
    i0: usize,
    i1: usize,
    w1: f32,
}

/// Half-pixel-centre mapping, clamped at both edges.
fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Taps> {
    let scale = src_len as f64 / dst_len as f64;
    let last = src_len - 1;

    (0..dst_len)
        .map(|d| {
            let f = (d as f64 + 0.5) * scale - 0.5;
            let base = f.floor();
            if base < 0.0 {
                return Taps { i0: 0, i1: 0, w1: 0.0 };
            }
            let i0 = base as usize;
            if i0 >= last {
                Taps { i0: last, i1: last, w1: 0.0 }
            } else {
                Taps { i0, i1: i0 + 1, w1: (f - base) as f32 }
            }
        })
        .collect()
}

/// Bilinear resize of an interleaved HWC `f32` buffer.
///
/// Pixel centres are aligned (`src = (dst + 0.5) * src_len / dst_len - 0.5`)
/// and samples past the border replicate the edge pixel. Resizing to the
/// same size returns the input unchanged.
///
/// `src` must hold `src_width * src_height * channels` values and all sizes
/// must be non-zero.
pub fn resize_bilinear(
    src: &[f32],
    src_width: usize,
    src_height: usize,
    channels: usize,
    dst_width: usize,
    dst_height: usize,
) -> Vec<f32> {
    debug_assert_eq!(src.len(), src_width * src_height * channels);

    let xs = axis_taps(src_width, dst_width);
    let ys = axis_taps(src_height, dst_height);
    let row_stride = src_width * channels;

    let mut dst = Vec::with_capacity(dst_width * dst_height * channels);
    for y in &ys {
        let row0 = &src[y.i0 * row_stride..(y.i0 + 1) * row_stride];
        let row1 = &src[y.i1 * row_stride..(y.i1 + 1) * row_stride];
        for x in &xs {
            for c in 0..channels {
                let a0 = x.i0 * channels + c;
                let a1 = x.i1 * channels + c;
                let top = row0[a0] * (1.0 - x.w1) + row0[a1] * x.w1;
                let bottom = row1[a0] * (1.0 - x.w1) + row1[a1] * x.w1;
                dst.push(top * (1.0 - y.w1) + bottom * y.w1);
            }
        }
    }
    dst
}
