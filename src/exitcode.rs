//! Standard exit codes (BSD sysexits.h compatible)

/// Data format error (rejected edge, full buffer)
pub const DATAERR: i32 = 65;

/// Configuration error
pub const CONFIG: i32 = 78;
