use glam::{Vec2, Vec3, vec2, vec3};

use crate::renderer::Rgba;

/// Height of every wall in the demo map (map units).
pub const WALL_HEIGHT: f32 = 40.0;

/*----------------------------- walls --------------------------------*/

/// A vertical line segment extruded between two heights.
///
/// Immutable after construction; colours are decoded once here so the
/// draw passes never touch packed integers.
#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub x: [f32; 2],
    pub y: [f32; 2],
    pub z: [f32; 2], // [low, high]
    pub colours: [Rgba; 3],
}

impl Wall {
    /// Build a wall from `0xRRGGBBAA` packed colours.
    pub fn new(x: [f32; 2], y: [f32; 2], z: [f32; 2], packed: [u32; 3]) -> Self {
        Self {
            x,
            y,
            z,
            colours: packed.map(Rgba::from_packed),
        }
    }

    /// Edge colour used by both the minimap and the 3-D pass.
    #[inline]
    pub fn colour(&self) -> Rgba {
        self.colours[0]
    }

    /// Top-down footprint `(start, end)`.
    #[inline]
    pub fn footprint(&self) -> (Vec2, Vec2) {
        (vec2(self.x[0], self.y[0]), vec2(self.x[1], self.y[1]))
    }

    /// The four corners in loop order:
    /// low start, low end, high end, high start.
    pub fn corners(&self) -> [Vec3; 4] {
        let [lo, hi] = self.z;
        [
            vec3(self.x[0], self.y[0], lo),
            vec3(self.x[1], self.y[1], lo),
            vec3(self.x[1], self.y[1], hi),
            vec3(self.x[0], self.y[0], hi),
        ]
    }
}

/*---------------------------- sections ------------------------------*/

/// Named group of walls sharing a local offset.
///
/// The offset is carried but not yet applied: every demo wall lives in
/// world coordinates.
#[derive(Clone, Debug, Default)]
pub struct Section {
    pub name: String,
    pub offset: Vec3,
    pub walls: Vec<Wall>,
}

/*------------------------------- map --------------------------------*/

/// Ordered sequence of sections; iteration order is draw order.
#[derive(Clone, Debug, Default)]
pub struct Map {
    pub sections: Vec<Section>,
}

impl Map {
    /// Built-in map: a four-wall box ahead of the start pose plus one long
    /// wall off to the side.
    pub fn demo() -> Self {
        let walls = vec![
            Wall::new([175.0, 175.0], [125.0, 75.0], [10.0, 40.0], [0xFF0000FF, 0x00FF00FF, 0x0000FFFF]),
            Wall::new([175.0, 225.0], [75.0, 75.0], [10.0, 40.0], [0x00FF00FF, 0x00FF00FF, 0x0000FFFF]),
            Wall::new([225.0, 225.0], [75.0, 125.0], [10.0, 40.0], [0x0000FFFF, 0x00FF00FF, 0x0000FFFF]),
            Wall::new([225.0, 175.0], [125.0, 125.0], [10.0, 40.0], [0xFFFF00FF, 0x00FF00FF, 0x0000FFFF]),
            Wall::new([40.0, 40.0], [10.0, 290.0], [0.0, WALL_HEIGHT], [0xFF00FFFF, 0x00FF00FF, 0x0000FFFF]),
        ];
        Map {
            sections: vec![Section {
                name: "origin".into(),
                offset: Vec3::ZERO,
                walls,
            }],
        }
    }

    /// Every wall, section by section.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.sections.iter().flat_map(|s| s.walls.iter())
    }

    /// Top-down bounding box `(min, max)` of every footprint, or `None`
    /// for a map without walls.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        self.walls()
            .flat_map(|w| {
                let (a, b) = w.footprint();
                [a, b]
            })
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
}
