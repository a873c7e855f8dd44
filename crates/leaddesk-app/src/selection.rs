// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::LeadId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Partial,
    Checked,
}

/// Row checkboxes. Membership is independent of the current filter and sort,
/// so a selected row that gets filtered out stays selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: BTreeSet<LeadId>,
}

impl SelectionState {
    pub fn toggle(&mut self, id: &LeadId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Clears the displayed rows when all of them are selected, otherwise
    /// selects every displayed row. Rows outside `displayed` are untouched.
    pub fn toggle_all<'a>(&mut self, displayed: impl IntoIterator<Item = &'a LeadId>) {
        let displayed = displayed.into_iter().collect::<Vec<_>>();
        let all_selected =
            !displayed.is_empty() && displayed.iter().all(|id| self.selected.contains(*id));
        if all_selected {
            for id in displayed {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(displayed.into_iter().cloned());
        }
    }

    pub fn header_state<'a>(&self, displayed: impl IntoIterator<Item = &'a LeadId>) -> HeaderCheck {
        let mut total = 0usize;
        let mut hits = 0usize;
        for id in displayed {
            total += 1;
            if self.selected.contains(id) {
                hits += 1;
            }
        }
        match hits {
            0 => HeaderCheck::Unchecked,
            _ if hits == total => HeaderCheck::Checked,
            _ => HeaderCheck::Partial,
        }
    }

    pub fn is_selected(&self, id: &LeadId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeadId> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{HeaderCheck, SelectionState};
    use crate::LeadId;

    fn ids(values: &[&str]) -> Vec<LeadId> {
        values.iter().map(|value| LeadId::from(*value)).collect()
    }

    #[test]
    fn toggle_is_symmetric() {
        let mut selection = SelectionState::default();
        let id = LeadId::from("3");
        assert!(selection.toggle(&id));
        assert!(selection.is_selected(&id));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_selects_then_clears_displayed_rows() {
        let mut selection = SelectionState::default();
        let shown = ids(&["1", "2", "3"]);

        selection.toggle_all(&shown);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.header_state(&shown), HeaderCheck::Checked);

        selection.toggle_all(&shown);
        assert!(selection.is_empty());
        assert_eq!(selection.header_state(&shown), HeaderCheck::Unchecked);
    }

    #[test]
    fn partial_selection_fills_in_on_toggle_all() {
        let mut selection = SelectionState::default();
        let shown = ids(&["1", "2"]);
        selection.toggle(&shown[0]);
        assert_eq!(selection.header_state(&shown), HeaderCheck::Partial);

        selection.toggle_all(&shown);
        assert_eq!(selection.header_state(&shown), HeaderCheck::Checked);
    }

    #[test]
    fn toggle_all_leaves_hidden_selections_alone() {
        let mut selection = SelectionState::default();
        let hidden = LeadId::from("9");
        selection.toggle(&hidden);
        let shown = ids(&["1", "2"]);

        selection.toggle_all(&shown);
        selection.toggle_all(&shown);
        assert!(selection.is_selected(&hidden));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn empty_display_is_unchecked_and_toggle_all_is_a_no_op() {
        let mut selection = SelectionState::default();
        let shown: Vec<LeadId> = Vec::new();
        selection.toggle_all(&shown);
        assert!(selection.is_empty());
        assert_eq!(selection.header_state(&shown), HeaderCheck::Unchecked);
    }
}
