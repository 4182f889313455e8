//! tiny-skia scene renderer
//!
//! Rasterizes the ring stroke and the inner rounded rect into a pixmap.
//! Scene coordinates are mapped so the scene bounds fill the pixmap.

use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::application::ports::{RenderError, SceneRenderer};
use crate::application::scene::{InnerFill, RingStroke, Scene};
use crate::domain::geometry::RoundedRect;
use crate::domain::style::Color;

/// Bezier handle length for a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Renders scenes into tiny-skia pixmaps
#[derive(Debug, Clone)]
pub struct PixmapRenderer {
    scale: f32,
    background: Color,
}

impl PixmapRenderer {
    /// Renderer at 1 pixel per point on a transparent background
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            background: Color::TRANSPARENT,
        }
    }

    /// Pixels per scene point
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

impl Default for PixmapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer for PixmapRenderer {
    type Frame = Pixmap;

    fn render(&mut self, scene: &Scene) -> Result<Pixmap, RenderError> {
        let width = pixel_len(scene.bounds.width * self.scale);
        let height = pixel_len(scene.bounds.height * self.scale);
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;

        pixmap.fill(skia_color(self.background));

        let transform = Transform::from_translate(-scene.bounds.x, -scene.bounds.y)
            .post_scale(self.scale, self.scale);

        if let Some(ring) = scene.ring.as_ref() {
            draw_ring(&mut pixmap, ring, transform);
        }
        if let Some(inner) = scene.inner.as_ref() {
            draw_inner(&mut pixmap, inner, transform);
        }

        Ok(pixmap)
    }
}

/// Encode a frame as PNG and write it to `path`
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), RenderError> {
    let data = pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    std::fs::write(path, data)?;
    Ok(())
}

fn draw_ring(pixmap: &mut Pixmap, ring: &RingStroke, transform: Transform) {
    if !(ring.line_width > 0.0) || ring.rect.is_empty() {
        return;
    }
    let Some(oval) = skia_rect(&ring.rect).and_then(PathBuilder::from_oval) else {
        return;
    };

    let stroke = Stroke {
        width: ring.line_width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&oval, &paint(ring.color), &stroke, transform, None);
}

fn draw_inner(pixmap: &mut Pixmap, inner: &InnerFill, transform: Transform) {
    let Some(path) = rounded_rect_path(&inner.shape) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &paint(inner.color),
        FillRule::Winding,
        transform,
        None,
    );
}

fn rounded_rect_path(shape: &RoundedRect) -> Option<tiny_skia::Path> {
    let rect = shape.rect;
    if rect.is_empty() {
        return None;
    }

    let radius = shape.corner_radius.clamp(0.0, rect.min_side() / 2.0);
    if !(radius > 0.0) {
        return Some(PathBuilder::from_rect(skia_rect(&rect)?));
    }

    let (left, top, right, bottom) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
    let k = radius * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(left + radius, top);
    pb.line_to(right - radius, top);
    pb.cubic_to(right - radius + k, top, right, top + radius - k, right, top + radius);
    pb.line_to(right, bottom - radius);
    pb.cubic_to(right, bottom - radius + k, right - radius + k, bottom, right - radius, bottom);
    pb.line_to(left + radius, bottom);
    pb.cubic_to(left + radius - k, bottom, left, bottom - radius + k, left, bottom - radius);
    pb.line_to(left, top + radius);
    pb.cubic_to(left, top + radius - k, left + radius - k, top, left + radius, top);
    pb.close();
    pb.finish()
}

fn skia_rect(rect: &crate::domain::geometry::Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn pixel_len(len: f32) -> u32 {
    if len.is_finite() && len > 0.0 {
        len.ceil().min(u32::MAX as f32) as u32
    } else {
        0
    }
}
