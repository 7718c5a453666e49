//! Configuration and constants for chart generation.

/// Default number of heatmap bins across the binary address space
pub const DEFAULT_BIN_COUNT: usize = 50;

/// Block type label applied when a block carries none
pub const DEFAULT_NODE_KIND: &str = "basic_block";

/// Edge type label applied when a control transfer carries none
pub const DEFAULT_EDGE_KIND: &str = "flow";

// Scores arrive in [0, 1]; the confidence chart displays percentages
pub const CONFIDENCE_SCALE: f64 = 100.0;

/// Number format hint passed through to the charting front end
pub const CONFIDENCE_FORMAT: &str = ".1f";
