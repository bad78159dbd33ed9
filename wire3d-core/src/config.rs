/// Named configuration values supplied by the host UI
use crate::color::Color;
use crate::error::ConfigError;
use crate::projection::{Projection, ProjectionMode};

/// Field names the core reads from a [`ConfigSource`]
pub mod fields {
    pub const TX: &str = "tx";
    pub const TY: &str = "ty";
    pub const TZ: &str = "tz";
    pub const SX: &str = "sx";
    pub const SY: &str = "sy";
    pub const SZ: &str = "sz";
    /// Rotations are in degrees
    pub const RX: &str = "rx";
    pub const RY: &str = "ry";
    pub const RZ: &str = "rz";
    pub const FOV: &str = "fov";
    pub const COLOR: &str = "objColor";
    pub const BACKGROUND: &str = "bgColor";
    pub const PROJECTION: &str = "projection";

    pub const TRANSFORM: [&str; 9] = [TX, TY, TZ, SX, SY, SZ, RX, RY, RZ];
}

/// Source of toolbar values, looked up by name.
///
/// Values are expected to be already coerced; the core does not validate
/// numbers. Visibility flags are keyed by shape name.
pub trait ConfigSource {
    fn number(&self, name: &str) -> f64;

    fn text(&self, name: &str) -> String;

    fn flag(&self, name: &str) -> bool;

    fn projection_mode(&self) -> Result<ProjectionMode, ConfigError> {
        self.text(fields::PROJECTION).parse()
    }

    /// Projection mode together with the field-of-view distance
    fn projection(&self) -> Result<Projection, ConfigError> {
        Ok(Projection::new(self.projection_mode()?, self.number(fields::FOV)))
    }

    fn background(&self) -> Result<Color, ConfigError> {
        Ok(Color::parse(&self.text(fields::BACKGROUND))?)
    }
}
