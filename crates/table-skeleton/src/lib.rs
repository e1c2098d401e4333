//! Table skeleton components for Dioxus.
//!
//! Renders a `tbody` of shimmering placeholder bars while real table data
//! loads. The component owns only the body subtree, so the host keeps its
//! own `table` element and header. Shimmer animation and bar appearance are
//! driven by the co-located stylesheet through CSS custom properties.

pub mod columns;
pub mod components;
pub mod size;

pub use columns::{ColumnSpec, Columns, NormalizedColumn};
pub use components::*;
pub use size::Size;
