//! Chart views and the registry holding them
use std::collections::BTreeSet;
use std::fmt;

use clusterviz::Table;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::palette::PointColorFn;
use crate::synchronizer::ViewState;

/// Identifies a view by its registration position in a [`ViewRegistry`]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub usize);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view {}", self.0)
    }
}

/// How a render pass moves the axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisTransition {
    /// Whatever transition the view normally uses
    Default,
    /// Axes jump to their final position
    Disabled,
}

/// The capabilities of a chart view driven by the synchronizer
///
/// Any capability may fail; the failure aborts the synchronization and is surfaced to the caller.
pub trait ChartView {
    /// Replaces the rows displayed by the view
    fn set_data(&mut self, data: &Table) -> Result<(), ViewError>;

    /// Redraws the view
    fn render(&mut self, transition: AxisTransition) -> Result<(), ViewError>;

    /// Rebuilds the axes from the field names of the current data
    fn create_axes(&mut self) -> Result<(), ViewError>;

    /// Replaces the per-point color function
    fn set_color(&mut self, color: PointColorFn) -> Result<(), ViewError>;

    /// Hides the axes of the given fields. Fields without an axis are ignored.
    fn hide_axis(&mut self, fields: &BTreeSet<String>) -> Result<(), ViewError>;
}

pub(crate) struct RegisteredView {
    pub(crate) view: Box<dyn ChartView>,
    pub(crate) state: ViewState,
}

/// An ordered collection of chart views
///
/// The registry is owned by the caller; a clustering run only borrows it.
#[derive(Default)]
pub struct ViewRegistry {
    views: Vec<RegisteredView>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a view, returning its identifier
    pub fn register<V: ChartView + 'static>(&mut self, view: V) -> ViewId {
        self.views.push(RegisteredView {
            view: Box::new(view),
            state: ViewState::Idle,
        });
        ViewId(self.views.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        id.0 < self.views.len()
    }

    /// Identifiers in registration order
    pub fn ids(&self) -> impl Iterator<Item = ViewId> {
        (0..self.views.len()).map(ViewId)
    }

    /// The state a view reached in the latest synchronization
    pub fn state(&self, id: ViewId) -> Option<ViewState> {
        self.views.get(id.0).map(|entry| entry.state)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut (dyn ChartView + 'static)> {
        self.views.get_mut(id.0).map(|entry| entry.view.as_mut())
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = (ViewId, &mut RegisteredView)> {
        self.views
            .iter_mut()
            .enumerate()
            .map(|(idx, entry)| (ViewId(idx), entry))
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.views.iter().map(|entry| entry.state))
            .finish()
    }
}
