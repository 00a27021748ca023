use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, Orientation};
use crate::error::{ViewportError, ViewportResult};

use super::PlotViewport;

pub const VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Persisted bounds of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRangeSnapshot {
    pub lower: f64,
    pub upper: f64,
    pub auto_lower: f64,
    pub auto_upper: f64,
}

/// Serializable view of the viewport geometry and every axis range,
/// so hosts can persist and later restore the zoom state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub draw_width: f64,
    pub draw_height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub orientation: Orientation,
    pub domain_axes: Vec<AxisRangeSnapshot>,
    pub range_axes: Vec<AxisRangeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ViewportSnapshotJsonContractV1 {
    schema_version: u32,
    snapshot: ViewportSnapshot,
}

impl ViewportSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ViewportResult<String> {
        let payload = ViewportSnapshotJsonContractV1 {
            schema_version: VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewportError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ViewportResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewportSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewportSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewportError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewportError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl PlotViewport {
    /// Captures the current viewport geometry and all axis ranges.
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        let (draw_width, draw_height) = self.viewport().draw_size();
        let collect = |kind: AxisKind| {
            self.registry()
                .axes(kind)
                .iter()
                .map(|axis| {
                    let (lower, upper) = axis.bounds();
                    let (auto_lower, auto_upper) = axis.auto_bounds();
                    AxisRangeSnapshot {
                        lower,
                        upper,
                        auto_lower,
                        auto_upper,
                    }
                })
                .collect()
        };
        ViewportSnapshot {
            draw_width,
            draw_height,
            scale_x: self.viewport().scale_x(),
            scale_y: self.viewport().scale_y(),
            orientation: self.registry().orientation(),
            domain_axes: collect(AxisKind::Domain),
            range_axes: collect(AxisKind::Range),
        }
    }

    /// Restores axis ranges from a snapshot taken on a matching axis layout.
    ///
    /// The axis counts and orientation must match the current registry and
    /// every snapshot bound must be finite; validation happens before any
    /// axis is touched, so a rejected snapshot leaves the registry unchanged.
    /// Viewport geometry fields in the snapshot are informational only.
    pub fn apply_snapshot(&mut self, snapshot: &ViewportSnapshot) -> ViewportResult<()> {
        if snapshot.orientation != self.registry().orientation() {
            return Err(ViewportError::InvalidData(
                "snapshot orientation does not match the registry".to_owned(),
            ));
        }
        if snapshot.domain_axes.len() != self.registry().domain_axis_count()
            || snapshot.range_axes.len() != self.registry().range_axis_count()
        {
            return Err(ViewportError::InvalidData(format!(
                "snapshot axis counts ({}/{}) do not match the registry ({}/{})",
                snapshot.domain_axes.len(),
                snapshot.range_axes.len(),
                self.registry().domain_axis_count(),
                self.registry().range_axis_count()
            )));
        }

        for entry in snapshot.domain_axes.iter().chain(&snapshot.range_axes) {
            if !entry.lower.is_finite()
                || !entry.upper.is_finite()
                || !entry.auto_lower.is_finite()
                || !entry.auto_upper.is_finite()
            {
                return Err(ViewportError::InvalidData(
                    "snapshot axis bounds must be finite".to_owned(),
                ));
            }
        }

        for (kind, entries) in [
            (AxisKind::Domain, &snapshot.domain_axes),
            (AxisKind::Range, &snapshot.range_axes),
        ] {
            for (axis, entry) in self.registry_mut().axes_mut(kind).iter_mut().zip(entries) {
                axis.set_auto_bounds(entry.auto_lower, entry.auto_upper)?;
                axis.set_bounds(entry.lower, entry.upper);
            }
        }
        Ok(())
    }
}
