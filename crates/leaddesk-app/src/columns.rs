// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Column visibility and ordering for the leads table.
//!
//! The committed catalog drives rendering. Edits happen on a draft copy that
//! only replaces the committed catalog on `save`. Drag-and-drop is modeled as
//! a small message protocol so reordering can be driven by any front end.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::LeadField;

pub const DEFAULT_VISIBLE_COLUMNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: LeadField,
    pub visible: bool,
    pub order: usize,
}

impl Column {
    pub const fn label(&self) -> &'static str {
        self.id.label()
    }
}

/// Every `LeadField` exactly once, in display sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCatalog {
    columns: Vec<Column>,
}

impl Default for ColumnCatalog {
    fn default() -> Self {
        let columns = LeadField::ALL
            .into_iter()
            .enumerate()
            .map(|(index, id)| Column {
                id,
                visible: index < DEFAULT_VISIBLE_COLUMNS,
                order: index,
            })
            .collect();
        Self { columns }
    }
}

impl ColumnCatalog {
    /// Builds a catalog whose visible columns are exactly `layout`, in that
    /// order, followed by the remaining columns hidden in catalog order.
    pub fn with_visible(layout: &[LeadField]) -> Result<Self> {
        let mut columns = Vec::with_capacity(LeadField::ALL.len());
        for field in layout {
            if columns.iter().any(|column: &Column| column.id == *field) {
                bail!(
                    "column `{}` is listed more than once -- list each column at most once",
                    field.as_str()
                );
            }
            columns.push(Column {
                id: *field,
                visible: true,
                order: 0,
            });
        }
        for field in LeadField::ALL {
            if !layout.contains(&field) {
                columns.push(Column {
                    id: field,
                    visible: false,
                    order: 0,
                });
            }
        }

        let mut catalog = Self { columns };
        catalog.renumber();
        Ok(catalog)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, id: LeadField) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn position(&self, id: LeadField) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        self.sorted_by_order(true)
    }

    pub fn hidden_columns(&self) -> Vec<Column> {
        self.sorted_by_order(false)
    }

    pub fn visible_fields(&self) -> Vec<LeadField> {
        self.visible_columns()
            .into_iter()
            .map(|column| column.id)
            .collect()
    }

    fn sorted_by_order(&self, visible: bool) -> Vec<Column> {
        let mut columns = self
            .columns
            .iter()
            .copied()
            .filter(|column| column.visible == visible)
            .collect::<Vec<_>>();
        columns.sort_by_key(|column| column.order);
        columns
    }

    fn toggle(&mut self, id: LeadField) -> bool {
        match self.columns.iter_mut().find(|column| column.id == id) {
            Some(column) => {
                column.visible = !column.visible;
                true
            }
            None => false,
        }
    }

    /// Splices `dragged` into the slot `target` occupies, then renumbers every
    /// column by its index in the new sequence.
    fn reorder(&mut self, dragged: LeadField, target: LeadField) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };

        let column = self.columns.remove(from);
        self.columns.insert(to, column);
        self.renumber();
        true
    }

    fn renumber(&mut self) {
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.order = index;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMessage {
    BeginDrag(LeadField),
    HoverOver(LeadField),
    Drop(LeadField),
    CancelDrag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Started,
    Hovering,
    Reordered,
    Ignored,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDraft {
    catalog: ColumnCatalog,
    has_changes: bool,
    dragging: Option<LeadField>,
    hovering: Option<LeadField>,
}

impl ColumnDraft {
    fn from_committed(committed: &ColumnCatalog) -> Self {
        Self {
            catalog: committed.clone(),
            has_changes: false,
            dragging: None,
            hovering: None,
        }
    }

    pub fn catalog(&self) -> &ColumnCatalog {
        &self.catalog
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn dragging(&self) -> Option<LeadField> {
        self.dragging
    }

    pub fn hovering(&self) -> Option<LeadField> {
        self.hovering
    }

    pub fn toggle_visibility(&mut self, id: LeadField) -> bool {
        let toggled = self.catalog.toggle(id);
        self.has_changes |= toggled;
        toggled
    }

    pub fn reorder(&mut self, dragged: LeadField, target: LeadField) -> bool {
        let moved = self.catalog.reorder(dragged, target);
        self.has_changes |= moved;
        moved
    }

    pub fn reset_to_default(&mut self) {
        self.catalog = ColumnCatalog::default();
        self.has_changes = true;
    }

    pub fn handle_drag(&mut self, message: DragMessage) -> DragOutcome {
        match message {
            DragMessage::BeginDrag(id) => {
                self.dragging = Some(id);
                self.hovering = None;
                DragOutcome::Started
            }
            DragMessage::HoverOver(id) => {
                if self.dragging.is_none() {
                    return DragOutcome::Ignored;
                }
                self.hovering = Some(id);
                DragOutcome::Hovering
            }
            DragMessage::Drop(target) => {
                let dragged = self.dragging.take();
                self.hovering = None;
                match dragged {
                    Some(dragged) if self.reorder(dragged, target) => DragOutcome::Reordered,
                    _ => DragOutcome::Ignored,
                }
            }
            DragMessage::CancelDrag => {
                self.dragging = None;
                self.hovering = None;
                DragOutcome::Cancelled
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnPreferences {
    committed: ColumnCatalog,
    editor: Option<ColumnDraft>,
}

impl ColumnPreferences {
    pub fn new(committed: ColumnCatalog) -> Self {
        Self {
            committed,
            editor: None,
        }
    }

    pub fn committed(&self) -> &ColumnCatalog {
        &self.committed
    }

    pub fn editor(&self) -> Option<&ColumnDraft> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ColumnDraft> {
        self.editor.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Seeds a fresh draft from the committed catalog, dropping any draft
    /// left behind by an earlier session.
    pub fn open_editor(&mut self) -> &mut ColumnDraft {
        self.editor.insert(ColumnDraft::from_committed(&self.committed))
    }

    pub fn save(&mut self) -> bool {
        match self.editor.take() {
            Some(draft) => {
                self.committed = draft.catalog;
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) -> bool {
        self.editor.take().is_some()
    }
}
