use glam::Vec2;
use orbitmap_common::Color;
use orbitmap_trace::Segment;

/// Presentation style for a sampled trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    /// Color of the first segment.
    pub start_color: Color,
    /// Color the final segment approaches.
    pub end_color: Color,
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            start_color: Color::RED,
            end_color: Color::BLUE,
        }
    }
}

impl TraceStyle {
    /// Color for a segment at the given fraction.
    pub fn color_at(&self, fraction: f32) -> Color {
        Color::lerp(self.start_color, self.end_color, fraction)
    }
}

/// Renderer-agnostic interface. All trajectory renderers implement this.
///
/// A renderer reads sampled segments and a style, then produces output.
/// It never mutates orbit state; segments are already a finished value.
pub trait TraceRenderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one trajectory from the given segments and style.
    fn render(&self, segments: &[Segment], style: &TraceStyle) -> Self::Output;
}

/// Plain-text renderer: one line per segment.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TraceRenderer for TextRenderer {
    type Output = String;

    fn render(&self, segments: &[Segment], style: &TraceStyle) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Trajectory ({} segments) ===\n", segments.len()));
        for (i, seg) in segments.iter().enumerate() {
            out.push_str(&format!(
                "  [{i:3}] ({:.4}, {:.4}) -> ({:.4}, {:.4}) {}\n",
                seg.from.re,
                seg.from.im,
                seg.to.re,
                seg.to.im,
                style.color_at(seg.fraction).to_hex()
            ));
        }
        out
    }
}

/// SVG line renderer: one `<line>` per segment, stroke color lerped between
/// the style's endpoint colors by segment fraction.
///
/// The viewBox is fitted to the trajectory bounds with a small margin. The
/// imaginary axis points up, so y is flipped into SVG's downward axis.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Stroke width in pixels.
    pub stroke_width: f32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            stroke_width: 1.0,
        }
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Bounding box over all segment endpoints.
    fn bounds(segments: &[Segment]) -> (Vec2, Vec2) {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for seg in segments {
            for p in [seg.from.to_vec2(), seg.to.to_vec2()] {
                min = min.min(p);
                max = max.max(p);
            }
        }
        (min, max)
    }

    /// Map a world point into pixel coordinates, flipping y.
    fn to_pixel(&self, p: Vec2, min: Vec2, extent: Vec2) -> Vec2 {
        let margin = 0.05;
        let usable = Vec2::new(self.width as f32, self.height as f32) * (1.0 - 2.0 * margin);
        let offset = Vec2::new(self.width as f32, self.height as f32) * margin;
        let t = (p - min) / extent;
        Vec2::new(
            offset.x + t.x * usable.x,
            self.height as f32 - (offset.y + t.y * usable.y),
        )
    }
}

impl TraceRenderer for SvgRenderer {
    type Output = String;

    fn render(&self, segments: &[Segment], style: &TraceStyle) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );

        if !segments.is_empty() {
            let (min, max) = Self::bounds(segments);
            // Degenerate trajectories (a fixed point) still get a finite box.
            let extent = (max - min).max(Vec2::splat(f32::EPSILON));
            tracing::debug!(
                ?min,
                ?max,
                segments = segments.len(),
                "fitting svg viewBox to trajectory bounds"
            );

            for seg in segments {
                let a = self.to_pixel(seg.from.to_vec2(), min, extent);
                let b = self.to_pixel(seg.to.to_vec2(), min, extent);
                out.push_str(&format!(
                    "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    a.x,
                    a.y,
                    b.x,
                    b.y,
                    style.color_at(seg.fraction).to_hex(),
                    self.stroke_width
                ));
            }
        }

        out.push_str("</svg>\n");
        out
    }
}
