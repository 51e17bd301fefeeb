//! Parallax starfield background
//!
//! Pure decoration: scrolls on the frame clock, never touches the sim.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes::quad;
use super::vertex::Vertex;

struct Layer {
    stars: Vec<Vec2>,
    speed: f32,
    size: f32,
    color: [f32; 4],
}

/// Multi-layer scrolling starfield; deeper layers are denser and faster
pub struct Starfield {
    layers: Vec<Layer>,
    width: f32,
    height: f32,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(width: f32, height: f32, layer_count: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(0x5747_4c4f);
        let mut layers = Vec::with_capacity(layer_count as usize);
        for i in 0..layer_count {
            let count = 80 * (i + 1);
            let stars = (0..count)
                .map(|_| {
                    Vec2::new(
                        rng.random::<f32>() * width,
                        rng.random::<f32>() * height,
                    )
                })
                .collect();
            layers.push(Layer {
                stars,
                speed: 20.0 * (i + 1) as f32,
                size: 1.0 + i as f32,
                color: [
                    (80.0 + 40.0 * i as f32) / 255.0,
                    (120.0 + 45.0 * i as f32) / 255.0,
                    (200.0 + 20.0 * i as f32) / 255.0,
                    1.0,
                ],
            });
        }
        Self {
            layers,
            width,
            height,
            rng,
        }
    }

    /// Scroll stars downward, recycling any that leave the bottom edge
    pub fn update(&mut self, dt: f32) {
        for layer in &mut self.layers {
            for star in &mut layer.stars {
                star.y += layer.speed * dt;
                if star.y > self.height {
                    star.x = self.rng.random::<f32>() * self.width;
                    star.y = -5.0;
                }
            }
        }
    }

    pub fn vertices(&self, out: &mut Vec<Vertex>) {
        for layer in &self.layers {
            for star in &layer.stars {
                quad(out, *star, Vec2::splat(layer.size), layer.color);
            }
        }
    }
}
