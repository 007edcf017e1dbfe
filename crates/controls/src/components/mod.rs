pub mod button;

// Re-exports for convenience
pub use button::*;
