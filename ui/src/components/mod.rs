//! Shared components, the building blocks the screens are assembled from.

pub mod pico;
