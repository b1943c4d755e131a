//! Configuration and constants for the CLI.

/// Directory scanned when no directory argument is given
pub const DEFAULT_CURVE_DIR: &str = "curves";

/// Suffix identifying learning-curve result files
pub const RESULT_FILE_EXTENSION: &str = ".matlab";

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// One record per line: randomSize randomAccuracy selectiveSize selectiveAccuracy
pub const FIELDS_PER_LINE: usize = 4;

// Printed areas use the same precision as the legacy report (%.12g)
pub const FLOAT_SIGNIFICANT_DIGITS: usize = 12;
