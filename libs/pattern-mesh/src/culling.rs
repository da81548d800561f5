//! # Occlusion Culling
//!
//! Decides which faces of an occupied cell's cube can be seen.

use crate::face::Face;
use crate::grid::PatternGrid;

/// Exposure flags for the six faces of one cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposedFaces {
    pub left: bool,
    pub right: bool,
    pub front: bool,
    pub back: bool,
    pub top: bool,
    pub bottom: bool,
}

impl ExposedFaces {
    /// All six faces exposed.
    pub const ALL: ExposedFaces = ExposedFaces {
        left: true,
        right: true,
        front: true,
        back: true,
        top: true,
        bottom: true,
    };

    /// Returns the flag for one face.
    pub fn contains(&self, face: Face) -> bool {
        match face {
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }

    /// Exposed faces in [`Face::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Face> + '_ {
        Face::ALL
            .into_iter()
            .filter(move |face| self.contains(*face))
    }

    /// Number of exposed faces.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Computes the exposed faces of the cell at `(x, y)`.
///
/// A side face is hidden only when the neighbouring cell exists and is
/// occupied. Top and bottom are always exposed.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::{culling::exposed_faces, PatternGrid};
///
/// let grid = PatternGrid::from_rows(vec![vec![true, true]]).unwrap();
/// let faces = exposed_faces(&grid, 0, 0);
/// assert!(faces.left);
/// assert!(!faces.right);
/// assert_eq!(faces.count(), 5);
/// ```
pub fn exposed_faces(grid: &PatternGrid, x: usize, y: usize) -> ExposedFaces {
    let open = |face: Face| match face.neighbor_offset() {
        Some((dx, dy)) => !grid.is_occupied(x as isize + dx, y as isize + dy),
        None => true,
    };

    ExposedFaces {
        left: open(Face::Left),
        right: open(Face::Right),
        front: open(Face::Front),
        back: open(Face::Back),
        top: open(Face::Top),
        bottom: open(Face::Bottom),
    }
}
