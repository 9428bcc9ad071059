use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Severity color scale: injured count → Color32
// ---------------------------------------------------------------------------

/// Maps injured-person counts onto a yellow → red ramp for the severity
/// map. The ramp is anchored to the largest count currently on screen so
/// the full hue range stays in use whatever the threshold.
#[derive(Debug, Clone)]
pub struct SeverityScale {
    max_injured: u32,
}

impl SeverityScale {
    pub fn new(max_injured: u32) -> Self {
        SeverityScale {
            max_injured: max_injured.max(1),
        }
    }

    /// Look up the colour for a given injured count.
    pub fn color_for(&self, injured: u32) -> Color32 {
        let t = (injured.min(self.max_injured) as f32) / self.max_injured as f32;
        // hue 55° (yellow) down to 0° (red)
        let hsl = Hsl::new(55.0 * (1.0 - t), 0.85, 0.5);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}
