/// Hard-coded palette, geometry ratios and output layout for the Weather app icon

pub mod palette {
    /// Gradient top (#4A90E2)
    pub const SKY_BLUE_TOP: [u8; 3] = [74, 144, 226];
    /// Gradient bottom (#87CEEB)
    pub const SKY_BLUE_BOTTOM: [u8; 3] = [135, 206, 235];
    pub const YELLOW: [u8; 3] = [255, 215, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const CYAN: [u8; 3] = [0, 212, 255];
}

pub mod master {
    /// Edge length of the master rendering every size is resampled from
    pub const BASE_EDGE: u32 = 1024;
}

/// All values are fractions of the canvas edge length
pub mod geometry {
    pub const SUN_CENTER: (f32, f32) = (0.75, 0.25);
    pub const SUN_RADIUS: f32 = 0.15;

    /// Ten glow rings, each 5px wider at the 1024px base
    pub const SUN_GLOW_RINGS: u32 = 10;
    pub const SUN_GLOW_STEP: f32 = 5.0 / 1024.0;
    /// Peak ring opacity, faded linearly towards the outermost ring
    pub const SUN_GLOW_PEAK_OPACITY: f32 = 0.3;

    pub const CLOUD_TOP: f32 = 0.45;
    /// Main body, as (left, top offset, right, bottom offset) relative to CLOUD_TOP
    pub const CLOUD_BODY: (f32, f32, f32, f32) = (0.25, 0.0, 0.75, 0.25);
    pub const CLOUD_LEFT_LOBE: (f32, f32, f32, f32) = (0.30, -0.08, 0.50, 0.12);
    pub const CLOUD_RIGHT_LOBE: (f32, f32, f32, f32) = (0.50, -0.10, 0.70, 0.10);

    pub const RAINDROP_ORIGIN: (f32, f32) = (0.70, 0.75);
    pub const RAINDROP_SIZE: f32 = 0.08;
    pub const RAINDROP_COUNT: u32 = 3;
    /// Per-drop offset, as a multiple of the drop size
    pub const RAINDROP_STEP: (f32, f32) = (0.8, 0.3);
    /// Drop width as a multiple of the drop size (height is the full size)
    pub const RAINDROP_WIDTH: f32 = 0.5;
}

pub mod output {
    /// Relative to the working directory
    pub const APPICONSET_DIR: &str = "WeatherAPP/Assets.xcassets/AppIcon.appiconset";

    /// iOS AppIcon variants, in generation order
    pub const APPICON_SIZES: &[(&str, u32)] = &[
        ("AppIcon-20@2x.png", 40),
        ("AppIcon-20@3x.png", 60),
        ("AppIcon-29@2x.png", 58),
        ("AppIcon-29@3x.png", 87),
        ("AppIcon-40@2x.png", 80),
        ("AppIcon-40@3x.png", 120),
        ("AppIcon-60@2x.png", 120),
        ("AppIcon-60@3x.png", 180),
        ("AppIcon-76@1x.png", 76),
        ("AppIcon-76@2x.png", 152),
        ("AppIcon-83.5@2x.png", 167),
        ("AppIcon-1024.png", 1024),
    ];
}
