use crate::config::ConfigError;
use crate::speed::FanSpeed;
use derive_more::{Deref, From, Into};
use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgb, Srgba, WithAlpha};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dial body color while the fan is off.
pub fn off_color() -> Srgba<f64> {
    Srgba::new(0.533, 0.533, 0.533, 1.0)
}

/// Indicator and label color.
pub fn marker_color() -> Srgba<f64> {
    Srgba::new(0.0, 0.0, 0.0, 1.0)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is neither a hex color nor a known color name")]
pub struct ColorParseError(String);

/// An opaque color read from configuration, as `#rgb`, `#rrggbb` or a CSS name.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct ColorValue(Srgba<f64>);

impl FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rgb = if s.starts_with('#') {
            Srgb::<u8>::from_str(s).ok()
        } else {
            palette::named::from_str(&s.to_ascii_lowercase())
        };

        rgb.map(|c| ColorValue(c.into_format::<f64>().with_alpha(1.0)))
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, _) = self.0.into_format::<u8, u8>().into_components();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Dial body colors for the three running speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedColors {
    pub low: Srgba<f64>,
    pub medium: Srgba<f64>,
    pub high: Srgba<f64>,
}

impl SpeedColors {
    /// Every running speed needs a binding. `Off` is fixed and ignored here.
    pub fn from_bindings(bindings: &HashMap<FanSpeed, ColorValue>) -> Result<Self, ConfigError> {
        if bindings.contains_key(&FanSpeed::Off) {
            log::warn!("Ignoring color for '{}': the off color is fixed", FanSpeed::Off);
        }

        let lookup = |speed: FanSpeed| {
            bindings
                .get(&speed)
                .map(|c| **c)
                .ok_or(ConfigError::MissingColor(speed))
        };

        Ok(Self {
            low: lookup(FanSpeed::Low)?,
            medium: lookup(FanSpeed::Medium)?,
            high: lookup(FanSpeed::High)?,
        })
    }

    pub fn color(&self, speed: FanSpeed) -> Srgba<f64> {
        match speed {
            FanSpeed::Off => off_color(),
            FanSpeed::Low => self.low,
            FanSpeed::Medium => self.medium,
            FanSpeed::High => self.high,
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.fandial-window, .fandial-drawing-area {
    background-color: white;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
