//! Shape generation for 2D primitives
//!
//! Glow is layered geometry: translucent inflated copies beneath an opaque
//! core, composited additively by the pipeline.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Append a filled axis-aligned quad centered on `center`
pub fn quad(out: &mut Vec<Vertex>, center: Vec2, size: Vec2, color: [f32; 4]) {
    let h = size * 0.5;
    let (x0, y0) = (center.x - h.x, center.y - h.y);
    let (x1, y1) = (center.x + h.x, center.y + h.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Append a filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Quad with `glow` translucent halo layers behind the opaque core
pub fn glow_quad(out: &mut Vec<Vertex>, center: Vec2, size: Vec2, color: [f32; 4], glow: u32) {
    for i in (1..=glow).rev() {
        let alpha = 16.0 * i as f32 / 255.0;
        let halo = [color[0], color[1], color[2], alpha];
        quad(out, center, size + Vec2::splat(i as f32 * 6.0), halo);
    }
    quad(out, center, size, color);
}

/// Circle with `glow` translucent halo layers behind the opaque core
pub fn glow_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], glow: u32) {
    for i in (1..=glow).rev() {
        let alpha = 18.0 * i as f32 / 255.0;
        let halo = [color[0], color[1], color[2], alpha];
        circle(out, center, radius + i as f32 * 3.0, halo, 20);
    }
    circle(out, center, radius, color, 20);
}
