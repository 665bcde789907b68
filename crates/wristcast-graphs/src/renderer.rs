//! Sparkline rasterization into PNG bytes.

use crate::types::{CanvasSize, GraphStyle, Point};
use async_trait::async_trait;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;
use tracing::info;
use wristcast_common::{Result, WristcastError};

/// Renders a mapped point sequence into encoded image bytes.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// Strokes `points` onto a canvas of the given size and returns the
    /// result as PNG bytes.
    async fn render_to_bytes(
        &self,
        points: &[Point],
        canvas: CanvasSize,
        style: &GraphStyle,
    ) -> Result<Vec<u8>>;
}

/// Polyline sparkline renderer backed by an offscreen RGB buffer.
///
/// Rendering is synchronous per invocation; the async trait surface
/// exists so callers can await rendering alongside other work.
#[derive(Debug, Default, Clone, Copy)]
pub struct SparklineRenderer;

impl SparklineRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GraphRenderer for SparklineRenderer {
    async fn render_to_bytes(
        &self,
        points: &[Point],
        canvas: CanvasSize,
        style: &GraphStyle,
    ) -> Result<Vec<u8>> {
        let bytes = rasterize(points, canvas, style)?;
        info!(
            points = points.len(),
            bytes = bytes.len(),
            "rendered sparkline"
        );
        Ok(bytes)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rasterize(points: &[Point], canvas: CanvasSize, style: &GraphStyle) -> Result<Vec<u8>> {
    canvas.validate()?;
    if points.is_empty() {
        return Err(WristcastError::empty_series("sparkline rendering"));
    }

    let line = style.line_rgb()?;
    let background = style.background_rgb()?;

    let width = canvas.width.round() as u32;
    let height = canvas.height.round() as u32;
    let mut buf = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&background)
            .map_err(|err| WristcastError::graph_with_source("failed to fill background", err))?;

        let pixels: Vec<(i32, i32)> = points
            .iter()
            .map(|point| (point.x.round() as i32, point.y.round() as i32))
            .collect();

        if let [only] = pixels.as_slice() {
            // A single sample has no polyline to stroke; draw a dot.
            let radius = style.line_width.max(2) as i32;
            root.draw(&Circle::new(*only, radius, line.filled()))
                .map_err(|err| WristcastError::graph_with_source("failed to draw point", err))?;
        } else {
            root.draw(&PathElement::new(
                pixels,
                line.stroke_width(style.line_width),
            ))
            .map_err(|err| WristcastError::graph_with_source("failed to stroke polyline", err))?;
        }

        root.present()
            .map_err(|err| WristcastError::graph_with_source("failed to present canvas", err))?;
    }

    encode_rgb_to_png(&buf, width, height)
}

/// Encodes a raw RGB pixel buffer to PNG bytes.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ColorType::Rgb8)
        .map_err(|err| WristcastError::graph_with_source("PNG encoding failed", err))?;
    Ok(png)
}
