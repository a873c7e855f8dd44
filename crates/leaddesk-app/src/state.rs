// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::columns::{ColumnCatalog, ColumnPreferences, DragMessage, DragOutcome};
use crate::forms::LeadFormInput;
use crate::selection::SelectionState;
use crate::store::LeadStore;
use crate::{AppMode, LeadField, LeadId, TabKind, TypeFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub active_tab: TabKind,
    pub leads: LeadStore,
    pub columns: ColumnPreferences,
    pub selection: SelectionState,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LeadStore::seeded(), ColumnCatalog::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    SelectTab(TabKind),
    SetSearch(String),
    SetTypeFilter(TypeFilter),
    CycleTypeFilter,
    SortBy(LeadField),
    AddLead {
        form: LeadFormInput,
        now: OffsetDateTime,
    },
    ToggleSelection(LeadId),
    ToggleSelectAll,
    OpenForm,
    OpenColumnEditor,
    ToggleColumn(LeadField),
    Drag(DragMessage),
    ResetColumns,
    SaveColumns,
    CancelColumns,
    EnterSearch,
    ExitToNav,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    TabChanged(TabKind),
    ProjectionChanged { rows: usize },
    LeadAdded(LeadId),
    SelectionChanged { selected: usize },
    DraftChanged { has_changes: bool },
    DragUpdated(DragOutcome),
    ColumnsSaved,
    ColumnsDiscarded,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn new(leads: LeadStore, committed: ColumnCatalog) -> Self {
        Self {
            mode: AppMode::Nav,
            active_tab: TabKind::Leads,
            leads,
            columns: ColumnPreferences::new(committed),
            selection: SelectionState::default(),
            status_line: None,
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab => self.rotate_tab(1),
            AppCommand::PrevTab => self.rotate_tab(-1),
            AppCommand::SelectTab(tab) => {
                self.active_tab = tab;
                vec![AppEvent::TabChanged(tab)]
            }
            AppCommand::SetSearch(search) => {
                self.leads.set_search(search);
                vec![self.projection_changed()]
            }
            AppCommand::SetTypeFilter(filter) => {
                self.leads.set_type_filter(filter);
                vec![self.projection_changed()]
            }
            AppCommand::CycleTypeFilter => {
                let filter = self.leads.cycle_type_filter();
                vec![
                    self.projection_changed(),
                    self.set_status(&format!("showing {}", filter.label().to_lowercase())),
                ]
            }
            AppCommand::SortBy(column) => {
                let sort = self.leads.sort_by(column);
                vec![
                    self.projection_changed(),
                    self.set_status(&format!(
                        "sorted by {} {}",
                        column.label().to_lowercase(),
                        sort.direction.as_str()
                    )),
                ]
            }
            AppCommand::AddLead { form, now } => self.add_lead(form, now),
            AppCommand::ToggleSelection(id) => {
                self.selection.toggle(&id);
                vec![self.selection_changed()]
            }
            AppCommand::ToggleSelectAll => {
                let displayed = self
                    .leads
                    .view()
                    .into_iter()
                    .map(|record| record.id.clone())
                    .collect::<Vec<_>>();
                self.selection.toggle_all(&displayed);
                vec![self.selection_changed()]
            }
            AppCommand::OpenForm => self.enter_mode(AppMode::AddLead),
            AppCommand::OpenColumnEditor => {
                self.columns.open_editor();
                let mut events = self.enter_mode(AppMode::Columns);
                events.push(AppEvent::DraftChanged { has_changes: false });
                events
            }
            AppCommand::ToggleColumn(id) => self.edit_draft(|prefs| {
                prefs
                    .editor_mut()
                    .is_some_and(|draft| draft.toggle_visibility(id))
            }),
            AppCommand::Drag(message) => {
                let Some(draft) = self.columns.editor_mut() else {
                    return Vec::new();
                };
                let outcome = draft.handle_drag(message);
                debug!(?message, ?outcome, "column drag");
                let mut events = vec![AppEvent::DragUpdated(outcome)];
                if outcome == DragOutcome::Reordered {
                    events.push(AppEvent::DraftChanged {
                        has_changes: draft.has_changes(),
                    });
                }
                events
            }
            AppCommand::ResetColumns => self.edit_draft(|prefs| match prefs.editor_mut() {
                Some(draft) => {
                    draft.reset_to_default();
                    true
                }
                None => false,
            }),
            AppCommand::SaveColumns => {
                if !self.columns.save() {
                    return Vec::new();
                }
                let layout = self
                    .columns
                    .committed()
                    .visible_fields()
                    .into_iter()
                    .map(LeadField::as_str)
                    .collect::<Vec<_>>();
                info!(visible = layout.len(), ?layout, "column layout saved");
                let mut events = vec![AppEvent::ColumnsSaved];
                events.extend(self.enter_mode(AppMode::Nav));
                events.push(self.set_status("columns saved"));
                events
            }
            AppCommand::CancelColumns => self.discard_columns(),
            AppCommand::EnterSearch => self.enter_mode(AppMode::Search),
            AppCommand::ExitToNav => {
                if self.mode == AppMode::Columns {
                    return self.discard_columns();
                }
                self.enter_mode(AppMode::Nav)
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn add_lead(&mut self, form: LeadFormInput, now: OffsetDateTime) -> Vec<AppEvent> {
        if let Err(error) = form.validate() {
            debug!(%error, "lead form rejected");
            return vec![self.set_status(&error.to_string())];
        }

        let id = LeadId::mint(now, |candidate| self.leads.contains(candidate));
        let record = form.into_record(id.clone());
        info!(lead_id = %id, name = %record.name, lead_type = record.lead_type.as_str(), "lead added");
        let name = record.name.clone();
        self.leads.append(record);

        let mut events = vec![AppEvent::LeadAdded(id), self.projection_changed()];
        events.extend(self.enter_mode(AppMode::Nav));
        events.push(self.set_status(&format!("added {name}")));
        events
    }

    fn edit_draft(&mut self, edit: impl FnOnce(&mut ColumnPreferences) -> bool) -> Vec<AppEvent> {
        if !edit(&mut self.columns) {
            return Vec::new();
        }
        self.columns
            .editor()
            .map(|draft| AppEvent::DraftChanged {
                has_changes: draft.has_changes(),
            })
            .into_iter()
            .collect()
    }

    fn discard_columns(&mut self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        if self.columns.cancel() {
            debug!("column draft discarded");
            events.push(AppEvent::ColumnsDiscarded);
        }
        events.extend(self.enter_mode(AppMode::Nav));
        events
    }

    fn enter_mode(&mut self, mode: AppMode) -> Vec<AppEvent> {
        if self.mode == mode {
            return Vec::new();
        }
        self.mode = mode;
        vec![AppEvent::ModeChanged(mode)]
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        let tabs = TabKind::ALL;
        let current = tabs
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_tab = tabs[next];
        vec![AppEvent::TabChanged(self.active_tab)]
    }

    fn projection_changed(&self) -> AppEvent {
        AppEvent::ProjectionChanged {
            rows: self.leads.view().len(),
        }
    }

    fn selection_changed(&self) -> AppEvent {
        AppEvent::SelectionChanged {
            selected: self.selection.len(),
        }
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::columns::{ColumnCatalog, DragMessage, DragOutcome};
    use crate::forms::LeadFormInput;
    use crate::{AppMode, LeadField, LeadId, LeadType, TabKind, TypeFilter};
    use time::OffsetDateTime;

    fn now() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_750_000_000).expect("valid timestamp")
    }

    fn valid_form() -> LeadFormInput {
        LeadFormInput {
            name: "Nina Park".to_owned(),
            phone: "(201) 555-0199".to_owned(),
            email: "nina@example.com".to_owned(),
            address: "Hoboken, NJ".to_owned(),
            lead_type: LeadType::Seller,
            ..LeadFormInput::blank()
        }
    }

    #[test]
    fn tab_rotation_wraps() {
        let mut state = AppState {
            active_tab: TabKind::Reports,
            ..AppState::default()
        };

        let events = state.dispatch(AppCommand::NextTab);
        assert_eq!(state.active_tab, TabKind::Dashboard);
        assert_eq!(events, vec![AppEvent::TabChanged(TabKind::Dashboard)]);

        state.dispatch(AppCommand::PrevTab);
        assert_eq!(state.active_tab, TabKind::Reports);
    }

    #[test]
    fn search_reports_row_count() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SetSearch("gmail".to_owned()));
        assert_eq!(events, vec![AppEvent::ProjectionChanged { rows: 3 }]);
    }

    #[test]
    fn cycle_type_filter_updates_status() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::CycleTypeFilter);
        assert_eq!(
            state.leads.query().type_filter,
            TypeFilter::Only(LeadType::Buyer)
        );
        assert_eq!(
            events,
            vec![
                AppEvent::ProjectionChanged { rows: 6 },
                AppEvent::StatusUpdated("showing buyers".to_owned()),
            ]
        );
    }

    #[test]
    fn add_lead_mints_id_and_returns_to_nav() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenForm);
        assert_eq!(state.mode, AppMode::AddLead);

        let events = state.dispatch(AppCommand::AddLead {
            form: valid_form(),
            now: now(),
        });
        let id = LeadId::from("1750000000000");
        assert_eq!(
            events,
            vec![
                AppEvent::LeadAdded(id.clone()),
                AppEvent::ProjectionChanged { rows: 10 },
                AppEvent::ModeChanged(AppMode::Nav),
                AppEvent::StatusUpdated("added Nina Park".to_owned()),
            ]
        );
        assert_eq!(
            state.leads.get(&id).and_then(|lead| lead.source.as_deref()),
            Some("Website")
        );
    }

    #[test]
    fn same_millisecond_leads_get_distinct_ids() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::AddLead {
            form: valid_form(),
            now: now(),
        });
        let events = state.dispatch(AppCommand::AddLead {
            form: valid_form(),
            now: now(),
        });
        assert_eq!(
            events.first(),
            Some(&AppEvent::LeadAdded(LeadId::from("1750000000001")))
        );
    }

    #[test]
    fn invalid_form_stays_open_with_status() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenForm);
        let events = state.dispatch(AppCommand::AddLead {
            form: LeadFormInput::blank(),
            now: now(),
        });
        assert_eq!(state.mode, AppMode::AddLead);
        assert_eq!(state.leads.len(), 9);
        assert!(matches!(
            events.as_slice(),
            [AppEvent::StatusUpdated(message)] if message.contains("name is required")
        ));
    }

    #[test]
    fn select_all_uses_displayed_rows() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetTypeFilter(TypeFilter::Only(LeadType::Seller)));

        let events = state.dispatch(AppCommand::ToggleSelectAll);
        assert_eq!(events, vec![AppEvent::SelectionChanged { selected: 3 }]);

        state.dispatch(AppCommand::SetTypeFilter(TypeFilter::All));
        state.dispatch(AppCommand::ToggleSelectAll);
        assert_eq!(state.selection.len(), 9);
    }

    #[test]
    fn column_editor_save_flow() {
        let mut state = AppState::default();
        let opened = state.dispatch(AppCommand::OpenColumnEditor);
        assert_eq!(
            opened,
            vec![
                AppEvent::ModeChanged(AppMode::Columns),
                AppEvent::DraftChanged { has_changes: false },
            ]
        );

        state.dispatch(AppCommand::Drag(DragMessage::BeginDrag(LeadField::Email)));
        let dropped = state.dispatch(AppCommand::Drag(DragMessage::Drop(LeadField::Name)));
        assert_eq!(
            dropped,
            vec![
                AppEvent::DragUpdated(DragOutcome::Reordered),
                AppEvent::DraftChanged { has_changes: true },
            ]
        );
        assert_eq!(state.columns.committed(), &ColumnCatalog::default());

        let saved = state.dispatch(AppCommand::SaveColumns);
        assert_eq!(
            saved,
            vec![
                AppEvent::ColumnsSaved,
                AppEvent::ModeChanged(AppMode::Nav),
                AppEvent::StatusUpdated("columns saved".to_owned()),
            ]
        );
        assert_eq!(
            state.columns.committed().visible_fields()[..2],
            [LeadField::Email, LeadField::Name]
        );
    }

    #[test]
    fn escape_from_column_editor_discards_draft() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenColumnEditor);
        state.dispatch(AppCommand::ToggleColumn(LeadField::Agent));
        state.dispatch(AppCommand::ResetColumns);

        let events = state.dispatch(AppCommand::ExitToNav);
        assert_eq!(
            events,
            vec![
                AppEvent::ColumnsDiscarded,
                AppEvent::ModeChanged(AppMode::Nav),
            ]
        );
        assert!(!state.columns.is_editing());
        assert_eq!(state.columns.committed(), &ColumnCatalog::default());
    }

    #[test]
    fn column_commands_without_editor_do_nothing() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::ToggleColumn(LeadField::Name)).is_empty());
        assert!(state.dispatch(AppCommand::ResetColumns).is_empty());
        assert!(state.dispatch(AppCommand::SaveColumns).is_empty());
        assert!(
            state
                .dispatch(AppCommand::Drag(DragMessage::CancelDrag))
                .is_empty()
        );
    }

    #[test]
    fn status_set_and_clear() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetStatus("hello".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("hello"));
        assert_eq!(
            state.dispatch(AppCommand::ClearStatus),
            vec![AppEvent::StatusCleared]
        );
        assert_eq!(state.status_line, None);
    }
}
