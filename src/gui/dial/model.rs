use crate::gui::dial::{ANGLE_STEP, INSET_FACTOR, START_ANGLE};
use crate::gui::theme::SpeedColors;
use crate::speed::FanSpeed;
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Angle of a speed's position, in radians, measured clockwise on screen
/// from the positive x axis.
pub fn speed_angle(speed: FanSpeed) -> f64 {
    START_ANGLE + speed.ordinal() as f64 * ANGLE_STEP
}

/// Point at distance `radius` from the center of `surface` in the direction of
/// `speed`. The center is taken from the surface size on every call.
pub fn position_for_speed(speed: FanSpeed, radius: f64, surface: Size) -> Point {
    let angle = speed_angle(speed);
    let center = surface.center();
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

pub struct Dial {
    radius: f64,
    speed: FanSpeed,
    colors: SpeedColors,
}

impl Dial {
    pub fn new(colors: SpeedColors) -> Self {
        Self {
            radius: 0.0,
            speed: FanSpeed::Off,
            colors,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> FanSpeed {
        self.speed
    }

    pub fn colors(&self) -> &SpeedColors {
        &self.colors
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let (width, height) = (width.max(0.0), height.max(0.0));
        self.radius = width.min(height) / 2.0 * INSET_FACTOR;
        log::debug!("Dial resized to {width}x{height}, radius {}", self.radius);
    }

    /// Advances exactly one position per call and returns the new speed. The
    /// host redraws after every activation.
    pub fn activate(&mut self) -> FanSpeed {
        self.speed = self.speed.next();
        log::debug!("Fan speed now {}", self.speed);
        self.speed
    }

    pub fn fill_color(&self) -> Srgba<f64> {
        self.colors.color(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::theme::off_color;
    use std::f64::consts::PI;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn colors() -> SpeedColors {
        SpeedColors {
            low: Srgba::new(0.0, 0.0, 1.0, 1.0),
            medium: Srgba::new(1.0, 1.0, 0.0, 1.0),
            high: Srgba::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn test_new_dial_is_off() {
        let dial = Dial::new(colors());
        assert_eq!(dial.speed(), FanSpeed::Off);
        assert_eq!(dial.radius(), 0.0);
    }

    #[test]
    fn test_activate_advances_one_step() {
        let mut dial = Dial::new(colors());
        assert_eq!(dial.activate(), FanSpeed::Low);
        assert_eq!(dial.speed(), FanSpeed::Low);
        assert_eq!(dial.activate(), FanSpeed::Medium);
    }

    #[test]
    fn test_four_activations_return_to_start() {
        let mut dial = Dial::new(colors());
        for start in FanSpeed::iter() {
            assert_eq!(dial.speed(), start);
            for _ in 0..4 {
                dial.activate();
            }
            assert_eq!(dial.speed(), start);
            dial.activate();
        }
    }

    #[test]
    fn test_resize() {
        let mut dial = Dial::new(colors());
        dial.resize(200.0, 100.0);
        assert_eq!(dial.radius(), 40.0);

        dial.resize(0.0, 0.0);
        assert_eq!(dial.radius(), 0.0);

        dial.resize(-10.0, 50.0);
        assert_eq!(dial.radius(), 0.0);
    }

    #[test]
    fn test_fill_color_follows_speed() {
        let mut dial = Dial::new(colors());
        assert_eq!(dial.fill_color(), off_color());

        let expected = [colors().low, colors().medium, colors().high];
        for color in expected {
            dial.activate();
            assert_eq!(dial.fill_color(), color);
        }
    }

    #[test]
    fn test_off_and_high_are_135_degrees_apart() {
        let surface = Size::new(300.0, 300.0);
        let center = surface.center();
        let angle_of = |speed| {
            let p = position_for_speed(speed, 100.0, surface);
            (p.y - center.y).atan2(p.x - center.x)
        };

        let separation = (angle_of(FanSpeed::High) - angle_of(FanSpeed::Off)).rem_euclid(2.0 * PI);
        assert!((separation - 3.0 * PI / 4.0).abs() < EPS);
    }

    #[test]
    fn test_angles_are_unique() {
        let angles: Vec<_> = FanSpeed::iter()
            .map(|s| speed_angle(s).rem_euclid(2.0 * PI))
            .collect();

        for (i, a) in angles.iter().enumerate() {
            for b in &angles[i + 1..] {
                assert!((a - b).abs() > EPS);
            }
        }
        assert!((angles[0] - PI * 9.0 / 8.0).abs() < EPS);
    }

    #[test]
    fn test_position_tracks_surface_center() {
        let small = position_for_speed(FanSpeed::Low, 50.0, Size::new(100.0, 100.0));
        let large = position_for_speed(FanSpeed::Low, 50.0, Size::new(300.0, 100.0));
        assert!((large.x - small.x - 100.0).abs() < EPS);
        assert!((large.y - small.y).abs() < EPS);

        let at_center = position_for_speed(FanSpeed::High, 0.0, Size::new(80.0, 60.0));
        assert_eq!(at_center, Point::new(40.0, 30.0));
    }
}
