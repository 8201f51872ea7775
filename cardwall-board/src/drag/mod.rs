//! Drag gesture tracking and drop-zone geometry

pub mod session;
pub mod zones;
