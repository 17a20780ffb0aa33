//! Point cloud for the background starfield.
//!
//! Only the data is produced here; a renderer turns it into a points mesh.

use rand::Rng;

use crate::constants::{STARFIELD_EXTENT, STAR_COUNT};
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vector3D,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub extent: f64,
}

impl Starfield {
    /// Scatters `count` stars uniformly through a cube of side `extent`
    /// centred on the origin, each with a random RGB color.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f64) -> Self {
        let half = extent / 2.0;
        let stars = (0..count)
            .map(|_| Star {
                position: Vector3D::new(
                    (rng.gen::<f64>() - 0.5) * extent,
                    (rng.gen::<f64>() - 0.5) * extent,
                    (rng.gen::<f64>() - 0.5) * extent,
                ),
                color: [rng.gen(), rng.gen(), rng.gen()],
            })
            .collect();

        log::debug!("Generated {} stars within +/-{}", count, half);
        Starfield { stars, extent }
    }

    pub fn with_defaults<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate(rng, STAR_COUNT, STARFIELD_EXTENT)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Flattened `[x, y, z, x, y, z, ...]` buffer, the layout GPU point meshes expect.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.stars
            .iter()
            .flat_map(|star| {
                [
                    star.position.x as f32,
                    star.position.y as f32,
                    star.position.z as f32,
                ]
            })
            .collect()
    }

    pub fn color_buffer(&self) -> Vec<f32> {
        self.stars.iter().flat_map(|star| star.color).collect()
    }
}
