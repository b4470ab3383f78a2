//! Common utilities and types for drawing markers

/// Common types and utilities used across the codebase
pub mod types {
    use nalgebra::{Matrix4, Point3};

    /// A 3D point
    pub type Point = Point3<f64>;

    /// A 4x4 homogeneous pose matrix
    pub type PoseMatrix = Matrix4<f64>;

    /// An RGBA color, channels in [0, 1]
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Color {
        pub r: f32,
        pub g: f32,
        pub b: f32,
        pub a: f32,
    }

    impl Color {
        pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
        pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
        pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

        /// Opaque color from its RGB channels
        pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
            Color { r, g, b, a: 1.0 }
        }

        /// Same color with alpha replaced
        pub const fn with_alpha(self, a: f32) -> Self {
            Color { a, ..self }
        }
    }

    impl Default for Color {
        fn default() -> Self {
            Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.0,
            }
        }
    }
}
