//! Rooms
//!
//! A room is an axis-aligned rectangle with its origin at the bottom-left
//! corner. It covers the half-open cell range `[x, x + width) × [y, y + height)`.

use serde::{Deserialize, Serialize};

/// An accepted room rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width in cells
    pub width: i32,
    /// Height in cells
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center cell, using truncating division.
    ///
    /// Corridor endpoints are derived from this, so it must stay exactly
    /// `(x + width / 2, y + height / 2)` for seeds to reproduce.
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// This rectangle grown by `n` cells on every side
    pub const fn padded(&self, n: i32) -> Room {
        Room::new(self.x - n, self.y - n, self.width + 2 * n, self.height + 2 * n)
    }

    /// Standard rectangle overlap: true iff the rectangles share area on both
    /// axes. Rectangles that only touch along an edge do not overlap.
    pub const fn overlaps(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Check if a cell is inside this room
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Number of cells covered
    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Every cell of the room, row by row from the bottom
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let Room {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |cy| (x..x + width).map(move |cx| (cx, cy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_center_truncates() {
        assert_eq!(Room::new(10, 10, 5, 5).center(), (12, 12));
        assert_eq!(Room::new(1, 2, 4, 3).center(), (3, 3));
        assert_eq!(Room::new(0, 0, 1, 1).center(), (0, 0));
    }

    #[test]
    fn test_room_overlap() {
        let room1 = Room::new(5, 5, 5, 5);
        let room2 = Room::new(8, 8, 5, 5);
        let room3 = Room::new(15, 15, 5, 5);

        assert!(room1.overlaps(&room2));
        assert!(room2.overlaps(&room1));
        assert!(!room1.overlaps(&room3));
    }

    #[test]
    fn test_touching_rooms_do_not_overlap() {
        let a = Room::new(0, 0, 3, 3);
        let b = Room::new(3, 0, 3, 3);
        assert!(!a.overlaps(&b));
        // One cell of padding turns touching into overlapping
        assert!(a.padded(1).overlaps(&b));
    }

    #[test]
    fn test_padding_enforces_gap() {
        let a = Room::new(1, 1, 3, 3);
        // Directly adjacent, no gap
        let b = Room::new(4, 1, 3, 3);
        assert!(a.padded(1).overlaps(&b));
        // One free column between them is enough
        let c = Room::new(5, 1, 3, 3);
        assert!(!a.padded(1).overlaps(&c));
        // Diagonal neighbours need the gap too
        let d = Room::new(4, 4, 2, 2);
        assert!(a.padded(1).overlaps(&d));
    }

    #[test]
    fn test_padded() {
        assert_eq!(Room::new(4, 5, 3, 2).padded(1), Room::new(3, 4, 5, 4));
    }

    #[test]
    fn test_cells_cover_area() {
        let room = Room::new(2, 3, 4, 2);
        let cells: Vec<_> = room.cells().collect();
        assert_eq!(cells.len() as i32, room.area());
        assert!(cells.iter().all(|&(x, y)| room.contains(x, y)));
        assert_eq!(cells[0], (2, 3));
        assert_eq!(cells[cells.len() - 1], (5, 4));
    }
}
