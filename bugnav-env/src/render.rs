//! Drawing of the arena.
//!
//! Scenarios draw themselves on a [`Canvas`] in arena units. [`ImageCanvas`]
//! rasterizes the drawing into an RGB image, owning the conversion to pixels.
use crate::{
    error::{BugNavError, Result},
    geometry::Point,
};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, path::Path};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Palette of the drawings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Background.
    White,
    /// Walls.
    Black,
    /// Initial direction to the goal.
    Yellow,
    /// Obstacles.
    Blue,
    /// The robot.
    Green,
    /// The goal.
    Red,
}

impl Color {
    /// RGB value of the color.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Color::White => [255, 255, 255],
            Color::Black => [0, 0, 0],
            Color::Yellow => [255, 255, 0],
            Color::Blue => [0, 0, 255],
            Color::Green => [0, 255, 0],
            Color::Red => [255, 0, 0],
        }
    }
}

/// A drawing surface in arena units.
pub trait Canvas {
    /// Paints the whole surface.
    fn fill(&mut self, color: Color);

    /// Draws a segment.
    fn line(&mut self, start: Point, end: Point, color: Color);

    /// Draws a filled disc.
    fn circle(&mut self, center: Point, radius: f64, color: Color);
}

/// How to map the arena onto pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Pixels per arena unit.
    pub resolution: f64,

    /// Margin around the arena in pixels.
    pub offset: u32,

    /// Side of the square area to show, in arena units.
    pub arena_size: f64,

    /// Width of lines in pixels.
    pub line_width: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            resolution: 30.0,
            offset: 20,
            arena_size: 20.0,
            line_width: 3,
        }
    }
}

/// A [`Canvas`] rasterized by [`tiny_skia`].
///
/// Drawing is not anti-aliased, so every pixel of a frame holds one of the
/// colors of the palette.
pub struct ImageCanvas {
    config: CanvasConfig,
    arena_px: i64,
    pixmap: Pixmap,
}

impl ImageCanvas {
    /// Creates a white canvas.
    ///
    /// # Errors
    ///
    /// Fails with [`BugNavError::InvalidCanvas`] if the configuration gives an
    /// empty image.
    pub fn new(config: CanvasConfig) -> Result<Self> {
        let arena_px = (config.arena_size * config.resolution).round() as i64;
        let side = arena_px + 2 * config.offset as i64;
        let mut pixmap = u32::try_from(side)
            .ok()
            .and_then(|side| Pixmap::new(side, side))
            .ok_or(BugNavError::InvalidCanvas(side))?;
        pixmap.fill(to_skia(Color::White));

        Ok(Self {
            config,
            arena_px,
            pixmap,
        })
    }

    /// Converts a point in arena units to pixel coordinates.
    ///
    /// The y axis is flipped, as images grow downward.
    pub fn convert_point(&self, point: &Point) -> (i64, i64) {
        let offset = self.config.offset as i64;
        let x = (point.x * self.config.resolution).round() as i64 + offset;
        let y = self.arena_px - (point.y * self.config.resolution).round() as i64 + offset;
        (x, y)
    }

    // The center of the pixel of `point`.
    fn to_pixmap(&self, point: &Point) -> (f32, f32) {
        let (x, y) = self.convert_point(point);
        (x as f32 + 0.5, y as f32 + 0.5)
    }

    /// The rendered image.
    pub fn to_image(&self) -> RgbImage {
        // Colors are opaque, so premultiplied RGBA holds the plain color.
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let i = 4 * (y * width + x) as usize;
            Rgb([data[i], data[i + 1], data[i + 2]])
        })
    }

    /// Writes the image to a file; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}

fn to_skia(color: Color) -> tiny_skia::Color {
    let [r, g, b] = color.rgb();
    tiny_skia::Color::from_rgba8(r, g, b, 255)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    paint.anti_alias = false;
    paint
}

impl Canvas for ImageCanvas {
    fn fill(&mut self, color: Color) {
        self.pixmap.fill(to_skia(color));
    }

    fn line(&mut self, start: Point, end: Point, color: Color) {
        let (x0, y0) = self.to_pixmap(&start);
        let (x1, y1) = self.to_pixmap(&end);
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: self.config.line_width.max(1) as f32,
                line_cap: LineCap::Square,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    fn circle(&mut self, center: Point, radius: f64, color: Color) {
        let (cx, cy) = self.to_pixmap(&center);
        let r = (radius * self.config.resolution) as f32;

        if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}
