//! Terminal → cell attachment.
//!
//! Attachment is round-robin by index: terminal `i` attaches to cell
//! `i mod num_cells`.  Positions play no part, so the map is reproducible
//! regardless of where mobility puts the terminals.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use nr_core::{CellId, TerminalId};

/// Serving cell for every terminal, indexed by `TerminalId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMap {
    serving: Vec<CellId>,
}

impl AttachmentMap {
    pub fn round_robin(num_terminals: u32, num_cells: NonZeroU32) -> Self {
        let serving = (0..num_terminals)
            .map(|i| CellId(i % num_cells.get()))
            .collect();
        Self { serving }
    }

    /// Serving cell of `terminal`, or `None` if it is not in the scenario.
    #[inline]
    pub fn cell_of(&self, terminal: TerminalId) -> Option<CellId> {
        self.serving.get(terminal.index()).copied()
    }

    /// All terminals served by `cell`, in ascending order.
    pub fn terminals_of(&self, cell: CellId) -> impl Iterator<Item = TerminalId> + '_ {
        self.iter()
            .filter(move |&(_, c)| c == cell)
            .map(|(t, _)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TerminalId, CellId)> + '_ {
        self.serving
            .iter()
            .enumerate()
            .map(|(i, &c)| (TerminalId(i as u32), c))
    }

    pub fn len(&self) -> usize {
        self.serving.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serving.is_empty()
    }
}
