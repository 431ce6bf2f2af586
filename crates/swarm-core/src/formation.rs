//! Formation specifications.
//!
//! `FormationSpec` is the resolved, typed form the planner consumes.
//! `FormationRequest` is the loosely-typed form formations arrive in from
//! scenario files: a kind name plus optional parameters, with defaults
//! filled in on resolution.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::FormationKind;
use crate::error::{SimError, SimResult};

/// A fully-parameterised formation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormationSpec {
    /// Evenly spaced along Z at `(x_coord, height)`.
    Linear { height: f64, x_coord: f64, length: f64 },
    /// Evenly spaced on a circle of `radius` around `center_xz` at `height`.
    Circular {
        height: f64,
        radius: f64,
        center_xz: [f64; 2],
    },
}

impl FormationSpec {
    /// Linear formation with default parameters.
    pub fn linear() -> Self {
        FormationSpec::Linear {
            height: LINEAR_DEFAULT_HEIGHT,
            x_coord: LINEAR_DEFAULT_X_COORD,
            length: LINEAR_DEFAULT_LENGTH,
        }
    }

    /// Circular formation with default parameters.
    pub fn circular() -> Self {
        FormationSpec::Circular {
            height: CIRCULAR_DEFAULT_HEIGHT,
            radius: CIRCULAR_DEFAULT_RADIUS,
            center_xz: CIRCULAR_DEFAULT_CENTER_XZ,
        }
    }

    pub fn kind(&self) -> FormationKind {
        match self {
            FormationSpec::Linear { .. } => FormationKind::Linear,
            FormationSpec::Circular { .. } => FormationKind::Circular,
        }
    }

    fn check_finite(&self) -> SimResult<()> {
        let params: Vec<(&str, f64)> = match *self {
            FormationSpec::Linear {
                height,
                x_coord,
                length,
            } => vec![("height", height), ("x_coord", x_coord), ("length", length)],
            FormationSpec::Circular {
                height,
                radius,
                center_xz,
            } => vec![
                ("height", height),
                ("radius", radius),
                ("center_xz[0]", center_xz[0]),
                ("center_xz[1]", center_xz[1]),
            ],
        };
        match params.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(SimError::InvalidConfig(format!(
                "{} formation parameter `{name}` must be finite, got {value}",
                self.kind()
            ))),
            None => Ok(()),
        }
    }
}

/// A formation as named in a scenario: kind plus optional overrides.
///
/// Parameters that do not apply to the requested kind are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationRequest {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_coord: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_xz: Option<[f64; 2]>,
}

impl FormationRequest {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_x_coord(mut self, x_coord: f64) -> Self {
        self.x_coord = Some(x_coord);
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_center_xz(mut self, center_xz: [f64; 2]) -> Self {
        self.center_xz = Some(center_xz);
        self
    }

    /// Resolve into a typed spec, filling in defaults for missing parameters.
    pub fn resolve(&self) -> SimResult<FormationSpec> {
        let kind =
            FormationKind::from_name(&self.kind).ok_or_else(|| SimError::UnknownFormation {
                kind: self.kind.clone(),
            })?;

        let spec = match kind {
            FormationKind::Linear => FormationSpec::Linear {
                height: self.height.unwrap_or(LINEAR_DEFAULT_HEIGHT),
                x_coord: self.x_coord.unwrap_or(LINEAR_DEFAULT_X_COORD),
                length: self.length.unwrap_or(LINEAR_DEFAULT_LENGTH),
            },
            FormationKind::Circular => FormationSpec::Circular {
                height: self.height.unwrap_or(CIRCULAR_DEFAULT_HEIGHT),
                radius: self.radius.unwrap_or(CIRCULAR_DEFAULT_RADIUS),
                center_xz: self.center_xz.unwrap_or(CIRCULAR_DEFAULT_CENTER_XZ),
            },
        };
        spec.check_finite()?;
        Ok(spec)
    }
}

impl From<FormationSpec> for FormationRequest {
    fn from(spec: FormationSpec) -> Self {
        match spec {
            FormationSpec::Linear {
                height,
                x_coord,
                length,
            } => FormationRequest::new(FormationKind::Linear.as_str())
                .with_height(height)
                .with_x_coord(x_coord)
                .with_length(length),
            FormationSpec::Circular {
                height,
                radius,
                center_xz,
            } => FormationRequest::new(FormationKind::Circular.as_str())
                .with_height(height)
                .with_radius(radius)
                .with_center_xz(center_xz),
        }
    }
}
