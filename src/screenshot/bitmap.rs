/// Owned RGB24 pixel grid.
///
/// Width and height are always greater than zero for any `Bitmap` that
/// exists; the constructors enforce it together with the
/// `width * height * 3` storage invariant. Pixel storage is exclusively
/// owned and freed on drop — nothing in the crate shares bitmap buffers.
#[derive(Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap tightly packed row-major RGB24 bytes.
    ///
    /// Returns `None` if either dimension is zero or the buffer length does
    /// not match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if data.len() != (width as usize) * (height as usize) * 3 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB24 bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the bitmap and return its pixel storage.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The RGB colour at integer coordinates. `x` and `y` must be in range.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        debug_assert!(x < self.width && y < self.height);
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Sample the bitmap at normalized coordinates with bilinear filtering.
    ///
    /// `u` and `v` address the image over [0, 1]; the result is the weighted
    /// average of the four source pixels nearest the continuous position,
    /// clamped at the edges.
    pub fn sample_bilinear(&self, u: f32, v: f32) -> [u8; 3] {
        let x = u.clamp(0.0, 1.0) * self.width as f32 - 0.5;
        let y = v.clamp(0.0, 1.0) * self.height as f32 - 0.5;

        let x0f = x.floor();
        let y0f = y.floor();
        let fx = x - x0f;
        let fy = y - y0f;

        let max_x = i64::from(self.width - 1);
        let max_y = i64::from(self.height - 1);
        let x0 = (x0f as i64).clamp(0, max_x) as u32;
        let x1 = (x0f as i64 + 1).clamp(0, max_x) as u32;
        let y0 = (y0f as i64).clamp(0, max_y) as u32;
        let y1 = (y0f as i64 + 1).clamp(0, max_y) as u32;

        let p00 = self.pixel(x0, y0);
        let p10 = self.pixel(x1, y0);
        let p01 = self.pixel(x0, y1);
        let p11 = self.pixel(x1, y1);

        let mut out = [0u8; 3];
        for c in 0..3 {
            let top = f32::from(p00[c]) + (f32::from(p10[c]) - f32::from(p00[c])) * fx;
            let bottom = f32::from(p01[c]) + (f32::from(p11[c]) - f32::from(p01[c])) * fx;
            out[c] = (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, colour: [u8; 3]) -> Bitmap {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&colour);
        }
        Bitmap::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn from_raw_rejects_zero_dimensions() {
        assert!(Bitmap::from_raw(0, 10, vec![]).is_none());
        assert!(Bitmap::from_raw(10, 0, vec![]).is_none());
    }

    #[test]
    fn from_raw_rejects_mismatched_buffer() {
        assert!(Bitmap::from_raw(2, 2, vec![0; 11]).is_none());
        assert!(Bitmap::from_raw(2, 2, vec![0; 13]).is_none());
        assert!(Bitmap::from_raw(2, 2, vec![0; 12]).is_some());
    }

    #[test]
    fn pixel_reads_row_major_rgb() {
        // 2x2: red, green / blue, white
        let data = vec![
            255, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ];
        let bmp = Bitmap::from_raw(2, 2, data).unwrap();
        assert_eq!(bmp.pixel(0, 0), [255, 0, 0]);
        assert_eq!(bmp.pixel(1, 0), [0, 255, 0]);
        assert_eq!(bmp.pixel(0, 1), [0, 0, 255]);
        assert_eq!(bmp.pixel(1, 1), [255, 255, 255]);
    }

    #[test]
    fn bilinear_on_uniform_image_returns_the_colour() {
        let bmp = solid(7, 5, [10, 200, 30]);
        for &(u, v) in &[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (0.13, 0.87)] {
            assert_eq!(bmp.sample_bilinear(u, v), [10, 200, 30]);
        }
    }

    #[test]
    fn bilinear_at_texel_centres_returns_exact_pixels() {
        let data = vec![
            10, 10, 10, 20, 20, 20, //
            30, 30, 30, 40, 40, 40,
        ];
        let bmp = Bitmap::from_raw(2, 2, data).unwrap();
        // Texel centre (i + 0.5) / size lands exactly on pixel i
        assert_eq!(bmp.sample_bilinear(0.25, 0.25), [10, 10, 10]);
        assert_eq!(bmp.sample_bilinear(0.75, 0.25), [20, 20, 20]);
        assert_eq!(bmp.sample_bilinear(0.25, 0.75), [30, 30, 30]);
        assert_eq!(bmp.sample_bilinear(0.75, 0.75), [40, 40, 40]);
    }

    #[test]
    fn bilinear_midpoint_averages_neighbours() {
        let data = vec![0, 0, 0, 255, 255, 255];
        let bmp = Bitmap::from_raw(2, 1, data).unwrap();
        let mid = bmp.sample_bilinear(0.5, 0.5);
        assert_eq!(mid, [128, 128, 128]);
    }

    #[test]
    fn bilinear_clamps_at_edges() {
        let data = vec![50, 60, 70, 200, 210, 220];
        let bmp = Bitmap::from_raw(2, 1, data).unwrap();
        assert_eq!(bmp.sample_bilinear(0.0, 0.0), [50, 60, 70]);
        assert_eq!(bmp.sample_bilinear(1.0, 1.0), [200, 210, 220]);
        // Out-of-range coordinates clamp rather than wrap
        assert_eq!(bmp.sample_bilinear(-3.0, 0.5), [50, 60, 70]);
        assert_eq!(bmp.sample_bilinear(4.0, 0.5), [200, 210, 220]);
    }

    #[test]
    fn into_raw_returns_storage() {
        let bmp = solid(2, 2, [1, 2, 3]);
        let raw = bmp.into_raw();
        assert_eq!(raw.len(), 12);
        assert_eq!(&raw[0..3], &[1, 2, 3]);
    }
}
