/// Fixed size tables, file names and layout constants for the generated assets

pub mod pwa {
    /// Web manifest icon edges and the file each one is written to
    pub const ICON_SIZES: [(u32, &str); 9] = [
        (96, "icon-96.png"),
        (128, "icon-128.png"),
        (144, "icon-144.png"),
        (152, "icon-152.png"),
        (180, "icon-180.png"),
        (192, "icon-192.png"),
        (256, "icon-256.png"),
        (384, "icon-384.png"),
        (512, "icon-512.png"),
    ];

    /// Icons the manifest marks with `"purpose": "any"`
    pub const PURPOSE_ANY_SIZES: [u32; 2] = [192, 512];
}

pub mod android {
    /// Launcher icon edge per mipmap density
    pub const MIPMAP_SIZES: [(&str, u32); 5] = [
        ("mdpi", 48),
        ("hdpi", 72),
        ("xhdpi", 96),
        ("xxhdpi", 144),
        ("xxxhdpi", 192),
    ];

    pub const LAUNCHER_ICON: &str = "ic_launcher.png";
    pub const LAUNCHER_ICON_ROUND: &str = "ic_launcher_round.png";
    pub const FOREGROUND_ICON: &str = "ic_launcher_foreground.png";

    /// Foreground canvas edge in pixels (108dp at roughly 9.5px per dp)
    pub const FOREGROUND_CANVAS: u32 = 1024;

    /// Share of the foreground canvas edge covered by the icon.
    /// Visual tuning value; keeps the icon inside the 66dp of 108dp safe zone.
    pub const FOREGROUND_ICON_RATIO: f64 = 0.55;

    /// Fill of the vector background layer
    pub const BACKGROUND_COLOR: &str = "#F5F5F5";
}

pub mod screenshots {
    use image::Rgba;

    pub const PORTRAIT_SIZE: (u32, u32) = (540, 720);
    pub const LANDSCAPE_SIZE: (u32, u32) = (1280, 720);

    pub const PORTRAIT_FILE: &str = "screenshot-540x720.png";
    pub const LANDSCAPE_FILE: &str = "screenshot-1280x720.png";

    /// Edge of the master icon on the portrait mockup and its top-left corner
    pub const PORTRAIT_ICON_EDGE: u32 = 120;
    pub const PORTRAIT_ICON_POS: (i64, i64) = (210, 240);

    pub const THEME: Rgba<u8> = Rgba([0x62, 0x00, 0xEE, 0xFF]); // #6200EE
    pub const STATUS_BAR: Rgba<u8> = Rgba([0x50, 0x00, 0xDD, 0xFF]); // #5000DD
    pub const PANEL: Rgba<u8> = Rgba([0xF5, 0xF5, 0xF5, 0xFF]); // #F5F5F5
    pub const FEATURE_TEXT: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 0xFF]); // #333333
    pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

    /// Vertical distance between feature lines on the landscape mockup
    pub const FEATURE_STEP: i32 = 80;
}

pub mod fonts {
    /// Extra pixels between the lines of a multi-line label
    pub const LINE_SPACING: f32 = 4.0;
}
