//! Drawing options
//!
//! Every draw call takes one of these option structs instead of a long list
//! of positional defaults. Each struct documents its defaults, offers
//! builder-style setters, and can be tuned from a parameter map with
//! `configure`, the same way the rest of the stack takes its parameters.

use crate::common::types::Color;
use crate::error::{Result, VizError};
use std::collections::HashMap;
use std::time::Duration;

/// Frame used when a caller does not name one
pub const DEFAULT_FRAME: &str = "katana_base_link";

/// Frame the points helper draws in by default
pub const DEFAULT_POINTS_FRAME: &str = "kinect_link";

/// Upper bound on grasp ids cleared by `clear_grasps`
pub const DEFAULT_CLEAR_COUNT: usize = 150;

/// Convert seconds to a lifetime, rejecting negative, non-finite and
/// out-of-range values
pub fn lifetime_from_secs(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|e| {
        VizError::invalid(format!(
            "lifetime must be a non-negative number of seconds, got {}: {}",
            secs, e
        ))
    })
}

fn id_from_param(value: f64) -> Result<i32> {
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(VizError::invalid(format!(
            "marker id must be an integer in i32 range, got {}",
            value
        )));
    }
    Ok(value as i32)
}

fn unit_interval(name: &str, value: f64) -> Result<f32> {
    if !(0.0..=1.0).contains(&value) {
        return Err(VizError::invalid(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(value as f32)
}

pub(crate) fn positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(VizError::invalid(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// Options shared by single-shape markers
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    /// Reference frame the marker pose is expressed in
    pub frame: String,
    pub ns: String,
    /// Id within `ns`
    pub id: i32,
    /// How long rviz keeps the marker; zero keeps it forever
    pub lifetime: Duration,
    /// RGB channels; alpha comes from `opacity`
    pub color: Color,
    pub opacity: f32,
}

impl Default for MarkerOptions {
    /// `katana_base_link`, ns `markers`, with the `new` defaults
    fn default() -> Self {
        MarkerOptions::new(DEFAULT_FRAME, "markers")
    }
}

impl MarkerOptions {
    /// Options in `frame`/`ns` with id 0, a 60 s lifetime, red, half opaque
    pub fn new(frame: &str, ns: &str) -> Self {
        MarkerOptions {
            frame: frame.to_string(),
            ns: ns.to_string(),
            id: 0,
            lifetime: Duration::from_secs(60),
            color: Color::RED,
            opacity: 0.5,
        }
    }

    pub fn spheres() -> Self {
        MarkerOptions::new(DEFAULT_FRAME, "spheres")
    }

    pub fn boxes() -> Self {
        MarkerOptions::new(DEFAULT_FRAME, "boxes")
    }

    pub fn cylinders() -> Self {
        MarkerOptions::new(DEFAULT_FRAME, "cylinders")
    }

    pub fn with_frame(mut self, frame: &str) -> Self {
        self.frame = frame.to_string();
        self
    }

    pub fn with_ns(mut self, ns: &str) -> Self {
        self.ns = ns.to_string();
        self
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Final RGBA color of the marker
    pub fn rgba(&self) -> Color {
        self.color.with_alpha(self.opacity)
    }

    /// Check color channels and opacity are within [0, 1]
    pub fn validate(&self) -> Result<()> {
        let channels = [
            ("red", self.color.r),
            ("green", self.color.g),
            ("blue", self.color.b),
            ("opacity", self.opacity),
        ];
        for (name, value) in channels {
            unit_interval(name, value as f64)?;
        }
        Ok(())
    }

    /// Configure from parameters: `id`, `lifetime`, `r`, `g`, `b`, `opacity`
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        if let Some(&id) = params.get("id") {
            self.id = id_from_param(id)?;
        }

        if let Some(&lifetime) = params.get("lifetime") {
            self.lifetime = lifetime_from_secs(lifetime)?;
        }

        if let Some(&r) = params.get("r") {
            self.color.r = unit_interval("red", r)?;
        }

        if let Some(&g) = params.get("g") {
            self.color.g = unit_interval("green", g)?;
        }

        if let Some(&b) = params.get("b") {
            self.color.b = unit_interval("blue", b)?;
        }

        if let Some(&opacity) = params.get("opacity") {
            self.opacity = unit_interval("opacity", opacity)?;
        }

        Ok(())
    }
}

/// Options for a points marker
#[derive(Debug, Clone, PartialEq)]
pub struct PointsOptions {
    pub marker: MarkerOptions,
    /// Edge length of each rendered point
    pub size: f64,
}

impl Default for PointsOptions {
    /// `kinect_link`, ns `points`, 20 s lifetime, opaque blue, 5 mm points
    fn default() -> Self {
        PointsOptions {
            marker: MarkerOptions::new(DEFAULT_POINTS_FRAME, "points")
                .with_lifetime(Duration::from_secs(20))
                .with_color(Color::BLUE)
                .with_opacity(1.0),
            size: 0.005,
        }
    }
}

impl PointsOptions {
    pub fn with_marker(mut self, marker: MarkerOptions) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        positive("point size", self.size)?;
        self.marker.validate()
    }

    /// Configure from parameters: `size` plus the `MarkerOptions` keys
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        if let Some(&size) = params.get("size") {
            self.size = positive("point size", size)?;
        }
        self.marker.configure(params)
    }
}

/// Options for a coordinate-axes triad
#[derive(Debug, Clone, PartialEq)]
pub struct AxesOptions {
    pub frame: String,
    pub ns: String,
    /// Id of the x arrow; y and z take the next two
    pub id: i32,
    pub lifetime: Duration,
    /// Arrow lengths along x, y and z
    pub lengths: [f64; 3],
}

impl AxesOptions {
    /// Axes in `frame`, ns `axes`, id 0, 300 s lifetime, lengths .05/.01/.01
    pub fn new(frame: &str) -> Self {
        AxesOptions {
            frame: frame.to_string(),
            ns: "axes".to_string(),
            id: 0,
            lifetime: Duration::from_secs(300),
            lengths: [0.05, 0.01, 0.01],
        }
    }

    pub fn with_ns(mut self, ns: &str) -> Self {
        self.ns = ns.to_string();
        self
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_lengths(mut self, lengths: [f64; 3]) -> Self {
        self.lengths = lengths;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for length in self.lengths {
            positive("axis length", length)?;
        }
        if self.id.checked_add(2).is_none() {
            return Err(VizError::invalid(format!(
                "axes id {} leaves no room for the y and z arrows",
                self.id
            )));
        }
        Ok(())
    }

    /// Configure from parameters: `id`, `lifetime`, `length_x`, `length_y`, `length_z`
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        if let Some(&id) = params.get("id") {
            self.id = id_from_param(id)?;
        }

        if let Some(&lifetime) = params.get("lifetime") {
            self.lifetime = lifetime_from_secs(lifetime)?;
        }

        for (i, key) in ["length_x", "length_y", "length_z"].iter().enumerate() {
            if let Some(&length) = params.get(*key) {
                self.lengths[i] = positive("axis length", length)?;
            }
        }

        Ok(())
    }
}

impl Default for AxesOptions {
    fn default() -> Self {
        AxesOptions::new(DEFAULT_FRAME)
    }
}

/// Options for drawing a grasp sequence
#[derive(Debug, Clone, PartialEq)]
pub struct GraspOptions {
    pub frame: String,
    pub ns: String,
}

impl GraspOptions {
    pub fn new(frame: &str) -> Self {
        GraspOptions {
            frame: frame.to_string(),
            ns: "grasps".to_string(),
        }
    }

    pub fn with_ns(mut self, ns: &str) -> Self {
        self.ns = ns.to_string();
        self
    }
}

impl Default for GraspOptions {
    /// `katana_base_link`, ns `grasps`
    fn default() -> Self {
        GraspOptions::new(DEFAULT_FRAME)
    }
}

/// Options for clearing a block of marker ids
#[derive(Debug, Clone, PartialEq)]
pub struct ClearOptions {
    pub frame: String,
    pub ns: String,
    /// Ids `0..num` are deleted
    pub num: usize,
}

impl ClearOptions {
    pub fn with_frame(mut self, frame: &str) -> Self {
        self.frame = frame.to_string();
        self
    }

    pub fn with_ns(mut self, ns: &str) -> Self {
        self.ns = ns.to_string();
        self
    }

    pub fn with_num(mut self, num: usize) -> Self {
        self.num = num;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num > i32::MAX as usize {
            return Err(VizError::invalid(format!(
                "cannot clear {} ids, marker ids are i32",
                self.num
            )));
        }
        Ok(())
    }

    /// Configure from parameters: `num`
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        if let Some(&num) = params.get("num") {
            if num.fract() != 0.0 || num < 0.0 || num > i32::MAX as f64 {
                return Err(VizError::invalid(format!(
                    "clear count must be a non-negative integer, got {}",
                    num
                )));
            }
            self.num = num as usize;
        }
        Ok(())
    }
}

impl Default for ClearOptions {
    /// `katana_base_link`, ns `grasps`, 150 ids
    fn default() -> Self {
        ClearOptions {
            frame: DEFAULT_FRAME.to_string(),
            ns: "grasps".to_string(),
            num: DEFAULT_CLEAR_COUNT,
        }
    }
}
