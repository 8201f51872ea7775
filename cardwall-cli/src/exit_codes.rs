//! Process exit codes

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;

/// Command failed
pub const EXIT_ERROR: i32 = 1;

/// A drag gesture was replayed but the drop did not apply
pub const EXIT_IGNORED: i32 = 2;
