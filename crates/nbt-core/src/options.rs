//! Decoder configuration.

/// Default nesting limit for lists and compounds.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling how a stream is decoded.
///
/// ```
/// use nbt_core::DecodeOptions;
///
/// let options = DecodeOptions::default().with_max_depth(64);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested lists/compounds, the root included. Deeper
    /// input fails with `NbtError::DepthLimitExceeded` instead of exhausting
    /// the stack.
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
