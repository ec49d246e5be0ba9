/// Side length used when the caller does not pick one.
pub const DEFAULT_SIDE_LENGTH: usize = 3;

/// Glyph used when rendering a cell nobody has claimed.
pub const EMPTY_GLYPH: char = '_';
