//! Ephemeral interaction state owned by a single dashboard view.

use std::collections::BTreeMap;
use tracing::{trace, warn};

use crate::sales::RepresentativeConfig;

/// Opacity of bars that are not under the pointer while something is hovered.
pub const DIMMED_OPACITY: f64 = 0.6;

/// Which bar slot, if any, is under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<usize>,
    len: usize,
}

impl HoverTracker {
    /// Tracker for a chart with `len` slots.
    pub fn new(len: usize) -> Self {
        Self { hovered: None, len }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Focuses slot `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` when the focus actually changed.
    pub fn pointer_moved(&mut self, index: usize) -> bool {
        if index >= self.len || self.hovered == Some(index) {
            return false;
        }
        trace!(index, "Pointer focus moved");
        self.hovered = Some(index);
        true
    }

    /// Clears the focus. Returns `true` when something was focused.
    pub fn pointer_left(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Full opacity when nothing is hovered or for the hovered slot.
    pub fn opacity(&self, index: usize) -> f64 {
        match self.hovered {
            Some(hovered) if hovered != index => DIMMED_OPACITY,
            _ => 1.0,
        }
    }
}

/// Per-representative visibility for the sales chart.
///
/// Every representative starts visible. Deselecting all of them is allowed
/// and yields an empty chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesVisibility {
    visible: BTreeMap<String, bool>,
}

impl SeriesVisibility {
    pub fn new(roster: &[RepresentativeConfig]) -> Self {
        Self {
            visible: roster.iter().map(|rep| (rep.id.to_string(), true)).collect(),
        }
    }

    /// Flips one representative and returns the new value.
    ///
    /// Unknown ids leave the state untouched and return `None`.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        match self.visible.get_mut(id) {
            Some(flag) => {
                *flag = !*flag;
                trace!(id, visible = *flag, "Toggled series");
                Some(*flag)
            }
            None => {
                warn!(id, "Ignoring toggle for unknown representative");
                None
            }
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Visible representatives, in roster order.
    pub fn visible<'a>(&self, roster: &'a [RepresentativeConfig]) -> Vec<&'a RepresentativeConfig> {
        roster.iter().filter(|rep| self.is_visible(rep.id)).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.values().filter(|v| **v).count()
    }

    pub fn is_empty_selection(&self) -> bool {
        self.visible_count() == 0
    }
}
