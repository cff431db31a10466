use super::model::{Dial, Point, Size, position_for_speed};
use super::{INDICATOR_DIVISOR, INDICATOR_OFFSET, LABEL_FONT, LABEL_OFFSET};
use crate::gui::theme::marker_color;
use crate::labels::LabelResolver;
use crate::speed::FanSpeed;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFont {
    pub family: &'static str,
    pub bold: bool,
    pub size: f64,
}

/// Target the dial draws onto. Only these two primitives are ever issued.
pub trait DrawSurface {
    type Error;

    fn size(&self) -> Size;

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Srgba<f64>,
    ) -> Result<(), Self::Error>;

    fn draw_centered_text(
        &mut self,
        text: &str,
        position: Point,
        color: Srgba<f64>,
        font: &LabelFont,
    ) -> Result<(), Self::Error>;
}

pub struct CairoSurface<'a> {
    cr: &'a Context,
    size: Size,
}

impl<'a> CairoSurface<'a> {
    pub fn new(cr: &'a Context, width: f64, height: f64) -> Self {
        Self {
            cr,
            size: Size::new(width, height),
        }
    }

    fn set_color(&self, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }
}

impl DrawSurface for CairoSurface<'_> {
    type Error = cairo::Error;

    fn size(&self) -> Size {
        self.size
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Srgba<f64>,
    ) -> Result<(), cairo::Error> {
        self.set_color(color);
        self.cr.arc(center.x, center.y, radius.max(0.0), 0.0, 2.0 * PI);
        self.cr.fill()
    }

    fn draw_centered_text(
        &mut self,
        text: &str,
        position: Point,
        color: Srgba<f64>,
        font: &LabelFont,
    ) -> Result<(), cairo::Error> {
        let weight = if font.bold {
            cairo::FontWeight::Bold
        } else {
            cairo::FontWeight::Normal
        };
        self.set_color(color);
        self.cr
            .select_font_face(font.family, cairo::FontSlant::Normal, weight);
        self.cr.set_font_size(font.size);
        let ext = self.cr.text_extents(text)?;
        self.cr.move_to(
            position.x - ext.width() / 2.0 - ext.x_bearing(),
            position.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        self.cr.show_text(text)
    }
}

/// Draws one frame of the dial without touching its state.
pub struct DialRenderer<'a, L: LabelResolver + ?Sized> {
    dial: &'a Dial,
    labels: &'a L,
}

impl<'a, L: LabelResolver + ?Sized> DialRenderer<'a, L> {
    pub fn new(dial: &'a Dial, labels: &'a L) -> Self {
        Self { dial, labels }
    }

    pub fn draw<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let size = surface.size();
        self.draw_body(surface, size)?;
        self.draw_indicator(surface, size)?;
        self.draw_labels(surface, size)
    }

    fn draw_body<S: DrawSurface>(&self, surface: &mut S, size: Size) -> Result<(), S::Error> {
        surface.fill_circle(size.center(), self.dial.radius(), self.dial.fill_color())
    }

    fn draw_indicator<S: DrawSurface>(&self, surface: &mut S, size: Size) -> Result<(), S::Error> {
        let radius = self.dial.radius();
        let position = position_for_speed(self.dial.speed(), radius + INDICATOR_OFFSET, size);
        surface.fill_circle(position, radius / INDICATOR_DIVISOR, marker_color())
    }

    fn draw_labels<S: DrawSurface>(&self, surface: &mut S, size: Size) -> Result<(), S::Error> {
        let label_radius = self.dial.radius() + LABEL_OFFSET;
        for speed in FanSpeed::iter() {
            let position = position_for_speed(speed, label_radius, size);
            let text = self.labels.resolve(&speed.label());
            surface.draw_centered_text(&text, position, marker_color(), &LABEL_FONT)?;
        }
        Ok(())
    }
}

pub fn draw<S, L>(surface: &mut S, dial: &Dial, labels: &L) -> Result<(), S::Error>
where
    S: DrawSurface,
    L: LabelResolver + ?Sized,
{
    DialRenderer::new(dial, labels).draw(surface)
}
