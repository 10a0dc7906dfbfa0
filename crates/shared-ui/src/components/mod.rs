// Overlay wrappers
pub mod tooltip;

// Date rendering, depends on tooltip
pub mod date_display;

// Re-exports for convenience
pub use date_display::*;
pub use tooltip::*;
