//! Builders for instruction words and processor state.
