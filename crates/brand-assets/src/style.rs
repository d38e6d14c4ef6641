use image::Rgb;
use std::path::PathBuf;

/// #1E88E5
pub const PRIMARY_BLUE: Rgb<u8> = Rgb([30, 136, 229]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const DARK_GRAY: Rgb<u8> = Rgb([66, 66, 66]);

pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Text and style inputs shared by all generators
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    /// Two-letter mark drawn on the icons
    pub initials: String,
    /// Splash logo headline
    pub title: String,
    /// Splash logo tagline, drawn under the title
    pub subtitle: String,
    /// Icon background and splash title color
    pub primary: Rgb<u8>,
    /// Initials color
    pub on_primary: Rgb<u8>,
    /// Subtitle color
    pub secondary_text: Rgb<u8>,
    pub bold_font: PathBuf,
    pub regular_font: PathBuf,
    /// Pixels the icon initials are raised above true center
    pub icon_text_lift: i32,
    /// Vertical gap between the title and subtitle boxes
    pub title_gap: i32,
    /// Cut the app icon corners with a rounded-rectangle alpha mask
    pub round_icon_corners: bool,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            initials: "IW".to_string(),
            title: "InkaWallet".to_string(),
            subtitle: "Accessible Banking for Everyone".to_string(),
            primary: PRIMARY_BLUE,
            on_primary: WHITE,
            secondary_text: DARK_GRAY,
            bold_font: PathBuf::from(DEFAULT_BOLD_FONT),
            regular_font: PathBuf::from(DEFAULT_REGULAR_FONT),
            icon_text_lift: 50,
            title_gap: 20,
            round_icon_corners: false,
        }
    }
}
