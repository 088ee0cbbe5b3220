//! Drill-down targets and selection bounds for the block view.

use super::{App, Section};
use crate::client::DataService;

/// What `Enter` on the current selection would open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DrillTarget {
    Uncle(String),
    Transaction(String),
}

impl<S: DataService> App<S> {
    /// Length of the list that currently has focus.
    pub(crate) fn focused_list_len(&self) -> usize {
        self.nav.state().current_block().map_or(0, |block| match self.ui.focus {
            Section::Uncles => block.uncles().len(),
            Section::Transactions => block.transactions.len(),
        })
    }

    /// The entity selected in the focused list, if any.
    pub(crate) fn drill_target(&self) -> Option<DrillTarget> {
        let block = self.nav.state().current_block()?;
        match self.ui.focus {
            Section::Uncles => block
                .uncles()
                .get(self.ui.uncle_index)
                .cloned()
                .map(DrillTarget::Uncle),
            Section::Transactions => block
                .transactions
                .get(self.ui.txn_index)
                .cloned()
                .map(DrillTarget::Transaction),
        }
    }

    /// Open the selected uncle or transaction.
    pub(crate) fn drill_down(&mut self) {
        match self.drill_target() {
            Some(DrillTarget::Uncle(block_id)) => {
                self.nav.open_uncle(&block_id);
            }
            Some(DrillTarget::Transaction(txn_id)) => {
                self.nav.open_transaction(&txn_id);
            }
            None => {}
        }
    }
}
