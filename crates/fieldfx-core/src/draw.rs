//! Frame output: an ordered list of 2D draw commands plus a packed
//! per-particle vertex export.
//!
//! The engine never touches a real canvas. Hosts replay the [`DrawList`]
//! onto whatever 2D context they own (the wasm front uses
//! `CanvasRenderingContext2d`), or read [`ParticleVertex`] data directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Color {
    pub const TRANSPARENT: Color = Color::Rgba { r: 0, g: 0, b: 0, a: 0.0 };
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a: alpha },
            Color::Hsla { h, s, l, .. } => Color::Hsla { h, s, l, a: alpha },
        }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    /// CSS colour string accepted by canvas `fillStyle` / `addColorStop`.
    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {})", a.clamp(0.0, 1.0)),
            Color::Hsla { h, s, l, a } => {
                format!("hsla({h:.1}, {s:.0}%, {l:.0}%, {})", a.clamp(0.0, 1.0))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Erase the whole surface to transparent.
    Clear,
    /// Fill the whole surface; a translucent colour leaves motion trails.
    Fill { color: Color },
    /// Solid disc.
    Circle { center: Vec2, radius: f32, color: Color },
    /// Disc of `outer_radius` filled with a radial gradient that starts at
    /// `inner_radius`.
    Glow {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<GradientStop>,
    },
    /// Round-capped polyline whose stroke fades linearly from `from` at the
    /// oldest point to `to` at the newest.
    Trail {
        points: Vec<Vec2>,
        width: f32,
        from: Color,
        to: Color,
    },
}

#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius > 0.0 {
            self.push(DrawCommand::Circle { center, radius, color });
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Packed particle record for hosts that render from linear memory:
/// 16 bytes, `[x, y, size, alpha]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub alpha: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        assert_eq!(Color::rgb(168, 85, 247).to_css(), "rgba(168, 85, 247, 1)");
        assert_eq!(Color::rgba(15, 15, 26, 0.15).to_css(), "rgba(15, 15, 26, 0.15)");
        assert_eq!(Color::hsla(220.0, 80.0, 60.0, 0.5).to_css(), "hsla(220.0, 80%, 60%, 0.5)");
    }

    #[test]
    fn zero_radius_circles_are_skipped() {
        let mut list = DrawList::new();
        list.circle(Vec2::ZERO, 0.0, Color::WHITE);
        list.circle(Vec2::ZERO, -1.0, Color::WHITE);
        assert!(list.is_empty());
        list.circle(Vec2::ZERO, 2.0, Color::WHITE);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn vertex_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<ParticleVertex>(), 16);
    }
}
