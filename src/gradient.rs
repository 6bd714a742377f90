use image::{Rgb, RgbImage};

/// Linear blend of two colors, truncated per channel
pub fn lerp_color(top: [u8; 3], bottom: [u8; 3], t: f32) -> Rgb<u8> {
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
    Rgb([
        mix(top[0], bottom[0]),
        mix(top[1], bottom[1]),
        mix(top[2], bottom[2]),
    ])
}

/// Paint every row with a color interpolated from `top` (row 0) towards `bottom`.
///
/// `t = y / height` never reaches 1, so the last row only approaches `bottom`.
pub fn fill_vertical_gradient(img: &mut RgbImage, top: [u8; 3], bottom: [u8; 3]) {
    let height = img.height();
    if height == 0 {
        return;
    }

    for (y, row) in img.enumerate_rows_mut() {
        let color = lerp_color(top, bottom, y as f32 / height as f32);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}
