use std::f64::consts::PI;

pub mod model;
pub mod view;

pub use model::{Dial, Point, Size, position_for_speed, speed_angle};
pub use view::{CairoSurface, DialRenderer, DrawSurface, LabelFont, draw};

pub const INSET_FACTOR: f64 = 0.8; // leaves room for labels outside the dial
pub const LABEL_OFFSET: f64 = 30.0;
pub const INDICATOR_OFFSET: f64 = -35.0;
pub const INDICATOR_DIVISOR: f64 = 12.0;
pub const START_ANGLE: f64 = PI * 9.0 / 8.0;
pub const ANGLE_STEP: f64 = PI / 4.0;
pub const LABEL_FONT: LabelFont = LabelFont {
    family: "Sans",
    bold: true,
    size: 24.0,
};
