//! Drives the registered views through a synchronization pass
//!
//! Views are updated in two passes over the registry, in registration order:
//!
//! 1. every view loads the data, renders and rebuilds its axes (`DataLoaded`, `AxesBuilt`)
//! 2. every coloring target receives the color function (`Colored`), then every view hides its
//!    partition axes and renders again with axis transitions disabled (`Rendered`)
//!
//! A failing capability aborts the run. Nothing is rolled back: views keep the state they
//! reached, which [`ViewRegistry::state`] reports.
use std::collections::BTreeSet;

use clusterviz::Table;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{Capability, Result, SyncError, ViewError};
use crate::palette::PointColorFn;
use crate::partition::PartitionMap;
use crate::view::{AxisTransition, ChartView, RegisteredView, ViewId, ViewRegistry};

/// Progress of one view through a synchronization
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewState {
    Idle,
    DataLoaded,
    AxesBuilt,
    Colored,
    Rendered,
}

/// One synchronization of the view registry with a labelled dataset
pub struct Synchronizer<'a> {
    data: &'a Table,
    partition: &'a PartitionMap,
    color_targets: &'a BTreeSet<ViewId>,
    color: PointColorFn,
}

impl<'a> Synchronizer<'a> {
    pub fn new(
        data: &'a Table,
        partition: &'a PartitionMap,
        color_targets: &'a BTreeSet<ViewId>,
        color: PointColorFn,
    ) -> Self {
        Synchronizer {
            data,
            partition,
            color_targets,
            color,
        }
    }

    /// Runs both passes, returning the final state of every view in registry order
    pub fn run(&self, views: &mut ViewRegistry) -> Result<Vec<(ViewId, ViewState)>> {
        for (_, entry) in views.entries_mut() {
            entry.state = ViewState::Idle;
        }

        for (id, entry) in views.entries_mut() {
            self.load(id, entry)?;
        }

        let no_hidden_fields = BTreeSet::new();
        let mut states = Vec::with_capacity(views.len());
        for (id, entry) in views.entries_mut() {
            if self.color_targets.contains(&id) {
                step(id, entry, Capability::SetColor, |view| {
                    view.set_color(self.color.clone())
                })?;
                entry.state = ViewState::Colored;
                debug!(view = id.0, "colored");
            }

            let hidden = self.partition.hidden(id).unwrap_or(&no_hidden_fields);
            step(id, entry, Capability::HideAxis, |view| view.hide_axis(hidden))?;
            step(id, entry, Capability::Render, |view| {
                view.render(AxisTransition::Disabled)
            })?;
            entry.state = ViewState::Rendered;
            debug!(view = id.0, hidden = hidden.len(), "rendered");

            states.push((id, entry.state));
        }

        Ok(states)
    }

    fn load(&self, id: ViewId, entry: &mut RegisteredView) -> Result<()> {
        step(id, entry, Capability::SetData, |view| view.set_data(self.data))?;
        entry.state = ViewState::DataLoaded;
        debug!(view = id.0, rows = self.data.nrows(), "data loaded");

        step(id, entry, Capability::Render, |view| {
            view.render(AxisTransition::Default)
        })?;
        step(id, entry, Capability::CreateAxes, |view| view.create_axes())?;
        entry.state = ViewState::AxesBuilt;
        debug!(view = id.0, "axes built");
        Ok(())
    }
}

/// Calls one capability, turning its failure into a `ViewUpdateFailure`
fn step<F>(id: ViewId, entry: &mut RegisteredView, capability: Capability, call: F) -> Result<()>
where
    F: FnOnce(&mut (dyn ChartView + 'static)) -> std::result::Result<(), ViewError>,
{
    call(entry.view.as_mut()).map_err(|source| {
        error!(
            view = id.0,
            %capability,
            reached = ?entry.state,
            error = %source,
            "view update failed"
        );
        SyncError::ViewUpdateFailure {
            view: id,
            capability,
            reached: entry.state,
            source,
        }
    })
}
