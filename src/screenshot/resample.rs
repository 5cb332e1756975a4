use crate::screenshot::bitmap::Bitmap;

/// Thumbnail output width, fixed regardless of the source aspect ratio.
pub const THUMB_WIDTH: u32 = 320;
/// Thumbnail output height.
pub const THUMB_HEIGHT: u32 = 180;

/// Downsample a source bitmap of any size to the fixed 320×180 thumbnail.
///
/// Each destination pixel samples the source at normalized
/// (x / 320, y / 180) with bilinear filtering. This is a direct stretch —
/// no letterboxing or aspect correction.
pub fn thumbnail(source: &Bitmap) -> Bitmap {
    let mut data = Vec::with_capacity((THUMB_WIDTH * THUMB_HEIGHT * 3) as usize);
    for y in 0..THUMB_HEIGHT {
        for x in 0..THUMB_WIDTH {
            let u = x as f32 / THUMB_WIDTH as f32;
            let v = y as f32 / THUMB_HEIGHT as f32;
            data.extend_from_slice(&source.sample_bilinear(u, v));
        }
    }
    Bitmap::from_raw(THUMB_WIDTH, THUMB_HEIGHT, data)
        .expect("thumbnail buffer has fixed dimensions")
}
