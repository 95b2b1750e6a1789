//! Solid shapes supporting point-to-surface distance queries

pub mod cylinder;

pub use cylinder::RightCircularCylinder;
