//! Exit code registry for the `raggrid` binary (single source of truth).

/// Run completed.
pub const EXIT_SUCCESS: u8 = 0;

/// A grid operation failed (empty grid, etc.).
pub const EXIT_ERROR: u8 = 1;

/// Bad arguments: unparseable sizes, negative row length, inverted
/// fill bounds.
pub const EXIT_USAGE: u8 = 2;
