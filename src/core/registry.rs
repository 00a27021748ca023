use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::axis::AxisRange;
use crate::error::ViewportResult;

/// Plot orientation: which screen axis the domain axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Domain along screen X, range along screen Y (the common case).
    Vertical,
    /// Domain along screen Y, range along screen X.
    Horizontal,
}

impl Orientation {
    /// Resolves which screen axis a logical axis kind maps to.
    #[must_use]
    pub fn screen_axis(self, kind: AxisKind) -> ScreenAxis {
        match (self, kind) {
            (Self::Vertical, AxisKind::Domain) | (Self::Horizontal, AxisKind::Range) => {
                ScreenAxis::X
            }
            (Self::Vertical, AxisKind::Range) | (Self::Horizontal, AxisKind::Domain) => {
                ScreenAxis::Y
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    Domain,
    Range,
}

impl AxisKind {
    pub const BOTH: [AxisKind; 2] = [AxisKind::Domain, AxisKind::Range];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAxis {
    X,
    Y,
}

/// Capability flags supplied by the plot abstraction, fixed at construction.
///
/// A non-zoomable kind silently ignores zoom requests; a non-pannable kind
/// silently ignores pan requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisCapabilities {
    pub domain_zoomable: bool,
    pub range_zoomable: bool,
    pub domain_pannable: bool,
    pub range_pannable: bool,
}

impl Default for AxisCapabilities {
    fn default() -> Self {
        Self {
            domain_zoomable: true,
            range_zoomable: true,
            domain_pannable: true,
            range_pannable: true,
        }
    }
}

impl AxisCapabilities {
    #[must_use]
    pub fn zoomable(self, kind: AxisKind) -> bool {
        match kind {
            AxisKind::Domain => self.domain_zoomable,
            AxisKind::Range => self.range_zoomable,
        }
    }

    #[must_use]
    pub fn pannable(self, kind: AxisKind) -> bool {
        match kind {
            AxisKind::Domain => self.domain_pannable,
            AxisKind::Range => self.range_pannable,
        }
    }
}

/// Resolved display names for one axis, usually zero to two entries.
pub type AxisNames = SmallVec<[String; 2]>;

/// Resolves axes to external display names.
///
/// Supplied by the plot abstraction: a single logical column may back more
/// than one axis in linked or faceted views, and an axis may have no
/// resolvable name yet.
pub trait AxisNameResolver {
    fn domain_axis_names(&self, index: usize) -> AxisNames;
    fn range_axis_names(&self, index: usize) -> AxisNames;
}

/// Fixed name tables, handy for hosts with static axis layouts and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticNameResolver {
    domain: Vec<Vec<String>>,
    range: Vec<Vec<String>>,
}

impl StaticNameResolver {
    #[must_use]
    pub fn new(domain: Vec<Vec<String>>, range: Vec<Vec<String>>) -> Self {
        Self { domain, range }
    }
}

impl AxisNameResolver for StaticNameResolver {
    fn domain_axis_names(&self, index: usize) -> AxisNames {
        self.domain
            .get(index)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn range_axis_names(&self, index: usize) -> AxisNames {
        self.range
            .get(index)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Ordered arenas of domain and range axes.
///
/// Axis identity is its index, stable for the registry's lifetime: axes are
/// pushed, never removed. The interaction engines are the only writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRegistry {
    domain: Vec<AxisRange>,
    range: Vec<AxisRange>,
    orientation: Orientation,
    capabilities: AxisCapabilities,
}

impl AxisRegistry {
    #[must_use]
    pub fn new(orientation: Orientation, capabilities: AxisCapabilities) -> Self {
        Self {
            domain: Vec::new(),
            range: Vec::new(),
            orientation,
            capabilities,
        }
    }

    /// Attaches a domain axis and returns its stable index.
    pub fn push_domain_axis(&mut self, lower: f64, upper: f64) -> ViewportResult<usize> {
        self.domain.push(AxisRange::new(lower, upper)?);
        Ok(self.domain.len() - 1)
    }

    /// Attaches a range axis and returns its stable index.
    pub fn push_range_axis(&mut self, lower: f64, upper: f64) -> ViewportResult<usize> {
        self.range.push(AxisRange::new(lower, upper)?);
        Ok(self.range.len() - 1)
    }

    #[must_use]
    pub fn domain_axis_count(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn range_axis_count(&self) -> usize {
        self.range.len()
    }

    #[must_use]
    pub fn domain_axis(&self, index: usize) -> Option<&AxisRange> {
        self.domain.get(index)
    }

    #[must_use]
    pub fn range_axis(&self, index: usize) -> Option<&AxisRange> {
        self.range.get(index)
    }

    pub fn domain_axis_mut(&mut self, index: usize) -> Option<&mut AxisRange> {
        self.domain.get_mut(index)
    }

    pub fn range_axis_mut(&mut self, index: usize) -> Option<&mut AxisRange> {
        self.range.get_mut(index)
    }

    #[must_use]
    pub fn axes(&self, kind: AxisKind) -> &[AxisRange] {
        match kind {
            AxisKind::Domain => &self.domain,
            AxisKind::Range => &self.range,
        }
    }

    pub fn axes_mut(&mut self, kind: AxisKind) -> &mut [AxisRange] {
        match kind {
            AxisKind::Domain => &mut self.domain,
            AxisKind::Range => &mut self.range,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn capabilities(&self) -> AxisCapabilities {
        self.capabilities
    }

    #[must_use]
    pub fn is_zoomable(&self, kind: AxisKind) -> bool {
        self.capabilities.zoomable(kind)
    }

    #[must_use]
    pub fn is_pannable(&self, kind: AxisKind) -> bool {
        self.capabilities.pannable(kind)
    }

    /// Resets every axis of both kinds to its full observed data extent.
    ///
    /// Notification batching is the caller's responsibility: this mutates all
    /// axes in one pass and the engine facade broadcasts exactly once.
    pub fn restore_auto_bounds(&mut self) {
        for axis in self.domain.iter_mut().chain(self.range.iter_mut()) {
            axis.restore_auto_bounds();
        }
    }
}
