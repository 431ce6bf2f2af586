//! Oblique projection of the view cube onto the image plane.
//!
//! World X runs right, world Y (vertical) runs up, and world Z recedes up
//! and to the right at a fixed angle, foreshortened by half.

use glam::DVec2;

use swarm_core::types::Vec3;

/// Angle of the receding Z axis on screen, in degrees.
const DEPTH_ANGLE_DEG: f64 = 30.0;

/// Foreshortening applied along the receding axis.
const DEPTH_SCALE: f64 = 0.5;

/// Maps world positions inside `[0, extent]^3` to pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    extent: f64,
    scale: f64,
    /// Screen position of the world origin.
    origin: DVec2,
    depth: DVec2,
}

impl Projection {
    /// Fit the cube `[0, extent]^3` into a `width x height` image, leaving
    /// `margin` pixels on every side.
    pub fn fit(extent: f64, width: u32, height: u32, margin: u32) -> Self {
        let angle = DEPTH_ANGLE_DEG.to_radians();
        let depth = DVec2::new(angle.cos(), angle.sin()) * DEPTH_SCALE;

        let usable_w = width.saturating_sub(2 * margin).max(1) as f64;
        let usable_h = height.saturating_sub(2 * margin).max(1) as f64;
        let scale = (usable_w / (extent * (1.0 + depth.x)))
            .min(usable_h / (extent * (1.0 + depth.y)));

        let origin = DVec2::new(margin as f64, (height - margin.min(height)) as f64);

        Self {
            extent,
            scale,
            origin,
            depth,
        }
    }

    /// Whether a world position lies inside the view cube.
    pub fn contains(&self, p: Vec3) -> bool {
        let inside = |c: f64| (0.0..=self.extent).contains(&c);
        inside(p.x) && inside(p.y) && inside(p.z)
    }

    /// Pixel coordinates of a world position. Screen Y grows downward.
    pub fn project(&self, p: Vec3) -> DVec2 {
        let planar = DVec2::new(p.x + p.z * self.depth.x, p.y + p.z * self.depth.y);
        DVec2::new(
            self.origin.x + planar.x * self.scale,
            self.origin.y - planar.y * self.scale,
        )
    }

    /// The eight corners of the view cube.
    pub fn cube_corners(&self) -> [Vec3; 8] {
        let e = self.extent;
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(e, 0.0, 0.0),
            Vec3::new(e, 0.0, e),
            Vec3::new(0.0, 0.0, e),
            Vec3::new(0.0, e, 0.0),
            Vec3::new(e, e, 0.0),
            Vec3::new(e, e, e),
            Vec3::new(0.0, e, e),
        ]
    }
}

/// Index pairs into `Projection::cube_corners` forming the twelve edges.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];
