use crate::config::InputRanges;

/// Shared, read-only server state.
pub struct AppState {
    pub ranges: InputRanges,
}

impl AppState {
    pub fn new(ranges: InputRanges) -> Self {
        Self { ranges }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InputRanges::default())
    }
}
