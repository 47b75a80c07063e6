//! A configuration session
//!
//! Owns the catalog and the single selection, and runs one reconciliation
//! pass and one compilation pass after every field change. Presentation
//! code reads the reconciled selection, the derived availability and the
//! compiled command back from here.

use crate::catalog::Catalog;
use crate::command::{compile, CompiledCommand, DEFAULT_BUILDER};
use crate::reconcile::{reconcile, Availability};
use crate::selection::{FieldChange, SelectionState};
use serde::Serialize;
use tracing::{debug, info};

pub struct Session {
    catalog: Catalog,
    builder: String,
    state: SelectionState,
    availability: Availability,
    command: CompiledCommand,
}

/// What the presentation layer gets back: everything it needs to redraw
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub state: &'a SelectionState,
    pub availability: &'a Availability,
    pub command: String,
    pub ready: bool,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_builder(catalog, DEFAULT_BUILDER)
    }

    pub fn with_builder(catalog: Catalog, builder: &str) -> Self {
        let reconciled = reconcile(&catalog, &SelectionState::new());
        let command = compile(&reconciled.state);
        Self {
            catalog,
            builder: builder.to_string(),
            state: reconciled.state,
            availability: reconciled.availability,
            command,
        }
    }

    /// Apply one change, then reconcile and recompile.
    /// Returns whether the selection or the command changed.
    pub fn on_field_changed(&mut self, change: FieldChange) -> bool {
        debug!(field = %change.field(), ?change, "Field changed");
        let mut next = self.state.clone();
        change.apply(&self.catalog, &mut next);

        let reconciled = reconcile(&self.catalog, &next);
        if reconciled.changed {
            debug!("Reconciliation adjusted dependent fields");
        }
        let command = compile(&reconciled.state);
        if command.ready != self.command.ready {
            info!(ready = command.ready, "Command readiness changed");
        }

        let changed = reconciled.state != self.state || command != self.command;
        self.state = reconciled.state;
        self.availability = reconciled.availability;
        self.command = command;
        changed
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn command(&self) -> &CompiledCommand {
        &self.command
    }

    /// The full command line for the builder
    pub fn command_line(&self) -> String {
        self.command.render(&self.builder)
    }

    pub fn is_ready(&self) -> bool {
        self.command.ready
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: &self.state,
            availability: &self.availability,
            command: self.command_line(),
            ready: self.command.ready,
        }
    }
}
