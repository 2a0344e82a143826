//! Default generation parameters

/// Default map dimensions
pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 50;

/// Default number of room placement attempts
pub const DEFAULT_MAX_ROOMS: u32 = 10;

/// Default room size bounds (inclusive)
pub const DEFAULT_MIN_ROOM_SIZE: u32 = 4;
pub const DEFAULT_MAX_ROOM_SIZE: u32 = 10;

/// Cells kept clear between the map edge and any room
pub const BORDER: i32 = 1;

/// Minimum gap enforced between two rooms
pub const ROOM_PADDING: i32 = 1;
