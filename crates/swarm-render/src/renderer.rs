//! Snapshot renderer: one raster image per swarm snapshot.

use image::{Rgba, RgbaImage};

use swarm_core::constants::VIEW_EXTENT;
use swarm_core::state::{SwarmSnapshot, UnitView};
use swarm_core::types::grounded;

use crate::projection::{Projection, CUBE_EDGES};
use crate::raster;

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const WIREFRAME: Rgba<u8> = Rgba([170, 170, 170, 255]);
pub const ALIVE: Rgba<u8> = Rgba([31, 119, 180, 255]);
pub const DESTROYED: Rgba<u8> = Rgba([214, 39, 40, 255]);
/// Ground trace under airborne units.
pub const SHADOW: Rgba<u8> = Rgba([215, 215, 215, 255]);

/// Image size and marker style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Blank border around the view cube, in pixels.
    pub margin: u32,
    /// View volume is `[0, extent]^3`.
    pub extent: f64,
    pub marker_radius: u32,
    /// Draw a faint marker on the ground below every live unit.
    pub shadows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 400,
            margin: 16,
            extent: VIEW_EXTENT,
            marker_radius: 3,
            shadows: true,
        }
    }
}

pub struct Renderer {
    config: RenderConfig,
    projection: Projection,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let projection = Projection::fit(config.extent, config.width, config.height, config.margin);
        Self { config, projection }
    }

    /// Draw the view cube and every unit inside it.
    ///
    /// Units are drawn back to front so nearer markers cover farther ones.
    /// Units outside the view cube are skipped.
    pub fn render(&self, snapshot: &SwarmSnapshot) -> RgbaImage {
        let mut image = RgbaImage::from_pixel(self.config.width, self.config.height, BACKGROUND);
        self.draw_wireframe(&mut image);

        let mut visible: Vec<&UnitView> = snapshot
            .units
            .iter()
            .filter(|unit| self.projection.contains(unit.position))
            .collect();
        visible.sort_by(|a, b| b.position.z.total_cmp(&a.position.z));

        if self.config.shadows {
            for unit in visible.iter().filter(|unit| !unit.destroyed) {
                let ground = self.projection.project(grounded(unit.position));
                raster::fill_disc(&mut image, ground, 1, SHADOW);
            }
        }

        for unit in visible {
            let at = self.projection.project(unit.position);
            if unit.destroyed {
                raster::draw_cross(&mut image, at, self.config.marker_radius, DESTROYED);
            } else {
                raster::fill_disc(&mut image, at, self.config.marker_radius, ALIVE);
            }
        }

        image
    }

    fn draw_wireframe(&self, image: &mut RgbaImage) {
        let corners = self.projection.cube_corners().map(|c| self.projection.project(c));
        for (a, b) in CUBE_EDGES {
            raster::draw_line(image, corners[a], corners[b], WIREFRAME);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
