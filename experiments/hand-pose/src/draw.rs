use handpose_base::Tensor;
use handpose_infer::{HandPose, Keypoints, Point, Segment};

pub const YELLOW: [u8; 3] = [255, 255, 0];
pub const RED: [u8; 3] = [255, 0, 0];

const KEYPOINT_RADIUS: i32 = 6;
const JOINT_RADIUS: i32 = 5;
/// Glyph pixels are drawn as `LABEL_SCALE x LABEL_SCALE` blocks.
const LABEL_SCALE: i32 = 4;

/// 3x5 digit glyphs, one row per entry, MSB is the left column.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Mutable view of an HWC RGB buffer; every drawing call clips to its bounds.
pub struct Canvas<'a> {
    buf: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut [u8], width: usize, height: usize) -> Self {
        assert_eq!(buf.len(), width * height * 3, "canvas buffer must be RGB");
        Self { buf, width, height }
    }

    /// Canvas over an `[H, W, 3]` image tensor, `None` for any other layout.
    pub fn from_tensor(image: &'a mut Tensor<u8>) -> Option<Self> {
        match *image.shape.as_slice() {
            [height, width, 3] => Some(Self::new(&mut image.data, width, height)),
            _ => None,
        }
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        self.buf[idx..idx + 3].copy_from_slice(&color);
    }

    /// Bresenham line from `p0` to `p1`, clipped with Cohen-Sutherland first.
    pub fn line(&mut self, p0: Point, p1: Point, color: [u8; 3]) {
        let Some((start, end)) = clip_line(p0, p1, self.width as i32, self.height as i32) else {
            return;
        };
        let (mut x0, mut y0) = (start.x, start.y);
        let (x1, y1) = (end.x, end.y);

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub fn filled_circle(&mut self, center: Point, radius: i32, color: [u8; 3]) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Write a non-negative number with its bottom-left corner at `origin`.
    pub fn number(&mut self, value: usize, origin: Point, color: [u8; 3]) {
        let glyph_height = 5 * LABEL_SCALE;
        let advance = 4 * LABEL_SCALE;
        let text = value.to_string();

        for (i, ch) in text.bytes().enumerate() {
            let glyph = &DIGITS[(ch - b'0') as usize];
            let left = origin.x + i as i32 * advance;
            let top = origin.y - glyph_height;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..3 {
                    if bits & (0b100 >> col) == 0 {
                        continue;
                    }
                    let x = left + col * LABEL_SCALE;
                    let y = top + row as i32 * LABEL_SCALE;
                    for oy in 0..LABEL_SCALE {
                        for ox in 0..LABEL_SCALE {
                            self.set_pixel(x + ox, y + oy, color);
                        }
                    }
                }
            }
        }
    }
}

/// Mark every detected landmark with a yellow dot and its index in red.
pub fn draw_keypoints(canvas: &mut Canvas, keypoints: &Keypoints) {
    for (index, point) in keypoints.detected() {
        canvas.filled_circle(point, KEYPOINT_RADIUS, YELLOW);
        canvas.number(index, point, RED);
    }
}

/// Yellow bones with red joints.
pub fn draw_skeleton(canvas: &mut Canvas, skeleton: &[Segment]) {
    for segment in skeleton {
        canvas.line(segment.start, segment.end, YELLOW);
        canvas.filled_circle(segment.start, JOINT_RADIUS, RED);
        canvas.filled_circle(segment.end, JOINT_RADIUS, RED);
    }
}

/// Annotated copies of `image`: `(keypoints, skeleton)`.
///
/// `image` must be `[H, W, 3]`; other layouts come back unannotated.
pub fn render(image: &Tensor<u8>, pose: &HandPose) -> (Tensor<u8>, Tensor<u8>) {
    let mut keypoints_image = image.clone();
    let mut skeleton_image = image.clone();

    if let Some(mut canvas) = Canvas::from_tensor(&mut keypoints_image) {
        draw_keypoints(&mut canvas, &pose.keypoints);
    }
    if let Some(mut canvas) = Canvas::from_tensor(&mut skeleton_image) {
        draw_skeleton(&mut canvas, &pose.skeleton);
    }

    (keypoints_image, skeleton_image)
}

/// Place two RGB images next to each other on a black background.
///
/// Returns the packed buffer with its width and height.
pub fn side_by_side(left: &Tensor<u8>, right: &Tensor<u8>) -> (Vec<u8>, usize, usize) {
    let (lh, lw) = (left.shape[0], left.shape[1]);
    let (rh, rw) = (right.shape[0], right.shape[1]);
    let width = lw + rw;
    let height = lh.max(rh);

    let mut buf = vec![0u8; width * height * 3];
    for y in 0..lh {
        let dst = y * width * 3;
        buf[dst..dst + lw * 3].copy_from_slice(&left.data[y * lw * 3..(y + 1) * lw * 3]);
    }
    for y in 0..rh {
        let dst = (y * width + lw) * 3;
        buf[dst..dst + rw * 3].copy_from_slice(&right.data[y * rw * 3..(y + 1) * rw * 3]);
    }

    (buf, width, height)
}

/// Convert HWC RGB buffer to packed ARGB u32 for minifb
pub fn rgb_to_argb(buf: &[u8]) -> Vec<u32> {
    buf.chunks_exact(3)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

// Cohen-Sutherland clipping
const INSIDE: u8 = 0; // 0000
const LEFT: u8 = 1; // 0001
const RIGHT: u8 = 2; // 0010
const BOTTOM: u8 = 4; // 0100
const TOP: u8 = 8; // 1000

fn outcode(p: Point, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if p.x < 0 {
        code |= LEFT;
    } else if p.x >= width {
        code |= RIGHT;
    }
    if p.y < 0 {
        code |= TOP;
    } else if p.y >= height {
        code |= BOTTOM;
    }
    code
}

/// Clip the segment to `[0, width) x [0, height)`, `None` if nothing is left.
fn clip_line(mut p0: Point, mut p1: Point, width: i32, height: i32) -> Option<(Point, Point)> {
    if width <= 0 || height <= 0 {
        return None;
    }
    loop {
        let code0 = outcode(p0, width, height);
        let code1 = outcode(p1, width, height);

        if (code0 | code1) == 0 {
            return Some((p0, p1));
        }
        if (code0 & code1) != 0 {
            return None;
        }

        let code = if code0 != 0 { code0 } else { code1 };
        let d = p1 - p0;
        // d.y (or d.x) is non-zero here: the endpoints lie on opposite sides of this edge
        let clipped = if code & TOP != 0 {
            Point::new(p0.x + d.x * (0 - p0.y) / d.y, 0)
        } else if code & BOTTOM != 0 {
            Point::new(p0.x + d.x * (height - 1 - p0.y) / d.y, height - 1)
        } else if code & LEFT != 0 {
            Point::new(0, p0.y + d.y * (0 - p0.x) / d.x)
        } else {
            Point::new(width - 1, p0.y + d.y * (width - 1 - p0.x) / d.x)
        };

        if code == code0 {
            p0 = clipped;
        } else {
            p1 = clipped;
        }
    }
}
