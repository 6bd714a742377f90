use image::{Rgb, RgbImage};

use crate::constants::geometry::*;
use crate::constants::palette::{CYAN, SKY_BLUE_BOTTOM, SKY_BLUE_TOP, WHITE, YELLOW};
use crate::draw::{blend_ellipse, fill_circle, fill_ellipse, Bounds};
use crate::gradient::fill_vertical_gradient;

/// How the sun's glow rings are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlowMode {
    /// Every ring is an opaque yellow disc, so only the outermost one shows
    #[default]
    Opaque,
    /// Each ring is blended with its fading opacity, giving a soft halo
    Translucent,
}

/// Opacity of glow ring `i`, fading from the peak at the innermost ring to 0
pub fn glow_opacity(ring: u32) -> f32 {
    (1.0 - ring as f32 / SUN_GLOW_RINGS as f32) * SUN_GLOW_PEAK_OPACITY
}

/// Render the square master icon: gradient sky, sun, cloud and raindrops
pub fn render_master(edge: u32, glow: GlowMode) -> RgbImage {
    let mut img = RgbImage::new(edge, edge);
    fill_vertical_gradient(&mut img, SKY_BLUE_TOP, SKY_BLUE_BOTTOM);
    compose_shapes(&mut img, glow);
    img
}

/// Paint sun, cloud and raindrops over an already filled background
pub fn compose_shapes(img: &mut RgbImage, glow: GlowMode) {
    let size = img.width().min(img.height()) as f32;
    paint_sun(img, size, glow);
    paint_cloud(img, size);
    paint_raindrops(img, size);
}

fn paint_sun(img: &mut RgbImage, size: f32, glow: GlowMode) {
    let center = (size * SUN_CENTER.0, size * SUN_CENTER.1);
    let radius = size * SUN_RADIUS;
    let step = size * SUN_GLOW_STEP;

    for ring in 0..SUN_GLOW_RINGS {
        let bounds = Bounds::around(center, radius + ring as f32 * step);
        match glow {
            GlowMode::Opaque => fill_ellipse(img, bounds, Rgb(YELLOW)),
            GlowMode::Translucent => blend_ellipse(img, bounds, Rgb(YELLOW), glow_opacity(ring)),
        }
    }

    fill_circle(img, center, radius, Rgb(WHITE));
}

fn paint_cloud(img: &mut RgbImage, size: f32) {
    let top = size * CLOUD_TOP;
    for (left, dy0, right, dy1) in [CLOUD_BODY, CLOUD_LEFT_LOBE, CLOUD_RIGHT_LOBE] {
        let bounds = Bounds::new(size * left, top + size * dy0, size * right, top + size * dy1);
        fill_ellipse(img, bounds, Rgb(WHITE));
    }
}

fn paint_raindrops(img: &mut RgbImage, size: f32) {
    let drop = size * RAINDROP_SIZE;
    let (x0, y0) = (size * RAINDROP_ORIGIN.0, size * RAINDROP_ORIGIN.1);

    for i in 0..RAINDROP_COUNT {
        let x = x0 + i as f32 * drop * RAINDROP_STEP.0;
        let y = y0 + i as f32 * drop * RAINDROP_STEP.1;
        fill_ellipse(img, Bounds::new(x, y, x + drop * RAINDROP_WIDTH, y + drop), Rgb(CYAN));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::master::BASE_EDGE;

    #[test]
    fn test_master_is_square_at_base_edge() {
        let img = render_master(BASE_EDGE, GlowMode::Opaque);
        assert_eq!(img.dimensions(), (1024, 1024));
    }

    #[test]
    fn test_top_left_corner_is_sky() {
        let img = render_master(256, GlowMode::Opaque);
        assert_eq!(img.get_pixel(0, 0), &Rgb(SKY_BLUE_TOP));
    }

    #[test]
    fn test_sun_has_white_core_and_flat_yellow_rim() {
        let img = render_master(BASE_EDGE, GlowMode::Opaque);
        // Center (768, 256), core radius 153.6, outer rim radius 198.6
        assert_eq!(img.get_pixel(768, 256), &Rgb(WHITE));
        assert_eq!(img.get_pixel(768 + 160, 256), &Rgb(YELLOW));
        assert_eq!(img.get_pixel(768 + 195, 256), &Rgb(YELLOW));
        assert_ne!(img.get_pixel(768 + 205, 256), &Rgb(YELLOW));
    }

    #[test]
    fn test_translucent_glow_blends_into_sky() {
        let opaque = render_master(BASE_EDGE, GlowMode::Opaque);
        let soft = render_master(BASE_EDGE, GlowMode::Translucent);

        // Core is identical, rim is no longer pure yellow
        assert_eq!(soft.get_pixel(768, 256), opaque.get_pixel(768, 256));
        let rim = soft.get_pixel(768 + 195, 256);
        assert_ne!(rim, &Rgb(YELLOW));
        // Halo still pulls the blue channel down from the sky
        let sky = opaque.get_pixel(768 + 205, 256);
        assert!(rim[2] < sky[2]);
    }

    #[test]
    fn test_glow_opacity_fades() {
        assert!((glow_opacity(0) - 0.3).abs() < 1e-6);
        assert!(glow_opacity(9) < glow_opacity(1));
        assert!(glow_opacity(9) > 0.0);
    }

    #[test]
    fn test_cloud_is_centered_and_white() {
        let img = render_master(BASE_EDGE, GlowMode::Opaque);
        // Body spans y 460.8..716.8 around x = 512
        assert_eq!(img.get_pixel(512, 600), &Rgb(WHITE));
        // Left lobe reaches above the body
        assert_eq!(img.get_pixel(410, 400), &Rgb(WHITE));
    }

    #[test]
    fn test_raindrops_step_diagonally() {
        let img = render_master(BASE_EDGE, GlowMode::Opaque);
        let drop = 1024.0 * RAINDROP_SIZE;
        for i in 0..3 {
            let cx = 716.8 + i as f32 * drop * 0.8 + drop * 0.25;
            let cy = 768.0 + i as f32 * drop * 0.3 + drop * 0.5;
            assert_eq!(img.get_pixel(cx as u32, cy as u32), &Rgb(CYAN), "drop {}", i);
        }
    }

    #[test]
    fn test_composition_scales_with_edge() {
        let small = render_master(128, GlowMode::Opaque);
        assert_eq!(small.get_pixel(96, 32), &Rgb(WHITE));
        assert_eq!(small.get_pixel(64, 75), &Rgb(WHITE));
    }
}
