//! Theme - Color Palette

pub mod colors;

pub use colors::GridColors;
