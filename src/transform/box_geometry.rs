//! Box extents given as corners or as dimensions

use crate::common::types::Point;
use crate::error::{Result, VizError};
use nalgebra::Vector3;

/// Extent of an axis-aligned box in its own frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxExtent {
    /// Opposite corners of the box
    Corners { min: Point, max: Point },
    /// Edge lengths of a box centered on the frame origin
    Dimensions(Vector3<f64>),
}

impl BoxExtent {
    pub fn corners(min: Point, max: Point) -> Self {
        BoxExtent::Corners { min, max }
    }

    pub fn dimensions(x: f64, y: f64, z: f64) -> Self {
        BoxExtent::Dimensions(Vector3::new(x, y, z))
    }

    /// Parse a flat range spec: 6 values are `min` then `max` corners,
    /// 3 values are dimensions.
    pub fn from_slice(ranges: &[f64]) -> Result<Self> {
        match *ranges {
            [x0, y0, z0, x1, y1, z1] => Ok(BoxExtent::corners(
                Point::new(x0, y0, z0),
                Point::new(x1, y1, z1),
            )),
            [x, y, z] => Ok(BoxExtent::dimensions(x, y, z)),
            _ => Err(VizError::invalid(format!(
                "box range spec needs 6 corner values or 3 dimensions, got {} values",
                ranges.len()
            ))),
        }
    }

    /// Center of the box in its own frame
    pub fn center(&self) -> Point {
        match self {
            BoxExtent::Corners { min, .. } => *min + self.dims() / 2.0,
            BoxExtent::Dimensions(_) => Point::origin(),
        }
    }

    /// Edge lengths along x, y and z
    pub fn dims(&self) -> Vector3<f64> {
        match self {
            BoxExtent::Corners { min, max } => *max - *min,
            BoxExtent::Dimensions(dims) => *dims,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_give_center_and_dims() {
        let extent = BoxExtent::corners(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 4.0, 6.0));
        assert_relative_eq!(extent.dims(), Vector3::new(2.0, 4.0, 6.0));
        assert_relative_eq!(extent.center(), Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn offset_corners() {
        let extent = BoxExtent::corners(Point::new(-1.0, 1.0, 0.5), Point::new(1.0, 2.0, 0.75));
        assert_relative_eq!(extent.dims(), Vector3::new(2.0, 1.0, 0.25));
        assert_relative_eq!(extent.center(), Point::new(0.0, 1.5, 0.625));
    }

    #[test]
    fn dimensions_are_centered_on_origin() {
        let extent = BoxExtent::dimensions(1.0, 1.0, 1.0);
        assert_relative_eq!(extent.dims(), Vector3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(extent.center(), Point::origin());
    }

    #[test]
    fn from_slice_dispatches_on_arity() {
        assert_eq!(
            BoxExtent::from_slice(&[0.0, 0.0, 0.0, 2.0, 4.0, 6.0]),
            Ok(BoxExtent::corners(Point::origin(), Point::new(2.0, 4.0, 6.0)))
        );
        assert_eq!(
            BoxExtent::from_slice(&[0.1, 0.2, 0.3]),
            Ok(BoxExtent::dimensions(0.1, 0.2, 0.3))
        );
        assert!(matches!(
            BoxExtent::from_slice(&[1.0, 2.0]),
            Err(VizError::InvalidInput(_))
        ));
    }
}
