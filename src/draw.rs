use image::{Rgb, RgbImage};

/// Axis-aligned bounding box in canvas coordinates: left, top, right, bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Bounds { left, top, right, bottom }
    }

    pub fn around(center: (f32, f32), radius: f32) -> Self {
        Bounds::new(
            center.0 - radius,
            center.1 - radius,
            center.0 + radius,
            center.1 + radius,
        )
    }

    /// Pixel columns and rows whose centers can fall inside, clipped to the canvas
    fn pixel_span(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let clip = |v: f32, max: u32| v.max(0.0).min(max as f32) as u32;
        (
            clip(self.left.floor(), width),
            clip(self.top.floor(), height),
            clip(self.right.ceil(), width),
            clip(self.bottom.ceil(), height),
        )
    }

    /// Whether the pixel at (x, y) has its center inside the inscribed ellipse
    fn ellipse_contains(&self, x: u32, y: u32) -> bool {
        let rx = (self.right - self.left) / 2.0;
        let ry = (self.bottom - self.top) / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (x as f32 + 0.5 - (self.left + rx)) / rx;
        let dy = (y as f32 + 0.5 - (self.top + ry)) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

fn for_each_ellipse_pixel(img: &mut RgbImage, bounds: Bounds, mut paint: impl FnMut(&mut Rgb<u8>)) {
    let (x0, y0, x1, y1) = bounds.pixel_span(img.width(), img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            if bounds.ellipse_contains(x, y) {
                paint(img.get_pixel_mut(x, y));
            }
        }
    }
}

/// Opaque filled ellipse inscribed in `bounds`
pub fn fill_ellipse(img: &mut RgbImage, bounds: Bounds, color: Rgb<u8>) {
    for_each_ellipse_pixel(img, bounds, |pixel| *pixel = color);
}

pub fn fill_circle(img: &mut RgbImage, center: (f32, f32), radius: f32, color: Rgb<u8>) {
    fill_ellipse(img, Bounds::around(center, radius), color);
}

/// Filled ellipse composited "over" the existing pixels with the given opacity (0.0..=1.0)
pub fn blend_ellipse(img: &mut RgbImage, bounds: Bounds, color: Rgb<u8>, opacity: f32) {
    let alpha = opacity.clamp(0.0, 1.0);
    for_each_ellipse_pixel(img, bounds, |pixel| {
        for c in 0..3 {
            let blended = color[c] as f32 * alpha + pixel[c] as f32 * (1.0 - alpha);
            pixel[c] = blended.round() as u8;
        }
    });
}
