//! # Cube Faces
//!
//! The six axis-aligned faces of a cell's cube and their quad geometry.
//!
//! World axes are Y-up: grid column `x` runs along world X and grid row `y`
//! runs along world Z.

use glam::DVec3;

/// One face of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Facing -X (towards column `x - 1`)
    Left,
    /// Facing +X (towards column `x + 1`)
    Right,
    /// Facing -Z (towards row `y - 1`)
    Front,
    /// Facing +Z (towards row `y + 1`)
    Back,
    /// Facing +Y
    Top,
    /// Facing -Y
    Bottom,
}

impl Face {
    /// All six faces in emission order.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    /// Outward unit normal.
    pub fn normal(self) -> DVec3 {
        match self {
            Face::Left => DVec3::NEG_X,
            Face::Right => DVec3::X,
            Face::Front => DVec3::NEG_Z,
            Face::Back => DVec3::Z,
            Face::Top => DVec3::Y,
            Face::Bottom => DVec3::NEG_Y,
        }
    }

    /// Grid offset `(dx, dy)` of the neighbouring cell this face touches.
    ///
    /// `None` for top and bottom: the grid is a single layer.
    pub fn neighbor_offset(self) -> Option<(isize, isize)> {
        match self {
            Face::Left => Some((-1, 0)),
            Face::Right => Some((1, 0)),
            Face::Front => Some((0, -1)),
            Face::Back => Some((0, 1)),
            Face::Top | Face::Bottom => None,
        }
    }

    /// Corner signs of the face on a unit cube centered at the origin,
    /// counter-clockwise seen from outside.
    pub fn corner_signs(self) -> [DVec3; 4] {
        let c = |x: f64, y: f64, z: f64| DVec3::new(x, y, z);
        match self {
            Face::Left => [c(-1., -1., -1.), c(-1., -1., 1.), c(-1., 1., 1.), c(-1., 1., -1.)],
            Face::Right => [c(1., -1., 1.), c(1., -1., -1.), c(1., 1., -1.), c(1., 1., 1.)],
            Face::Front => [c(1., -1., -1.), c(-1., -1., -1.), c(-1., 1., -1.), c(1., 1., -1.)],
            Face::Back => [c(-1., -1., 1.), c(1., -1., 1.), c(1., 1., 1.), c(-1., 1., 1.)],
            Face::Top => [c(-1., 1., 1.), c(1., 1., 1.), c(1., 1., -1.), c(-1., 1., -1.)],
            Face::Bottom => [c(-1., -1., -1.), c(1., -1., -1.), c(1., -1., 1.), c(-1., -1., 1.)],
        }
    }

    /// Quad corners for a box with the given center and half extents.
    pub fn quad(self, center: DVec3, half: DVec3) -> [DVec3; 4] {
        self.corner_signs().map(|sign| center + sign * half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_winding_matches_normal() {
        for face in Face::ALL {
            let [a, b, c, d] = face.quad(DVec3::ZERO, DVec3::ONE);
            let n1 = (b - a).cross(c - a).normalize();
            let n2 = (c - a).cross(d - a).normalize();
            assert_eq!(n1, face.normal(), "{face:?} first triangle");
            assert_eq!(n2, face.normal(), "{face:?} second triangle");
        }
    }

    #[test]
    fn test_quad_lies_on_face_plane() {
        for face in Face::ALL {
            let half = DVec3::new(1.0, 2.0, 3.0);
            for corner in face.quad(DVec3::ZERO, half) {
                assert_eq!(corner.dot(face.normal()), half.dot(face.normal().abs()));
            }
        }
    }

    #[test]
    fn test_vertical_faces_have_no_neighbor() {
        assert_eq!(Face::Top.neighbor_offset(), None);
        assert_eq!(Face::Bottom.neighbor_offset(), None);
        assert_eq!(Face::Left.neighbor_offset(), Some((-1, 0)));
        assert_eq!(Face::Back.neighbor_offset(), Some((0, 1)));
    }
}
