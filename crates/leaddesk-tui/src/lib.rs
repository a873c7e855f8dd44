// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use leaddesk_app::{
    AppCommand, AppEvent, AppMode, AppState, Column, ColumnDraft, ContactAction, ContactRequest,
    DragMessage, FormField, HeaderCheck, LeadField, LeadFormInput, LeadId, LeadRecord, SortDirection,
    TabKind,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, warn};

const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const CHECK_ON: &str = "[x]";
const CHECK_OFF: &str = "[ ]";
const CHECK_PARTIAL: &str = "[-]";
const SORT_ASC: &str = "↑";
const SORT_DESC: &str = "↓";
const CONTACT_HEADER: &str = "Contact";
const CONTACT_CELL: &str = "p e m";
const NO_COLUMNS: &str = "no columns selected -- press c to choose columns";
const NO_LEADS: &str = "no leads match -- adjust the search or type filter";

/// Host capabilities the shell needs but cannot provide itself.
pub trait AppRuntime {
    fn open_contact(&mut self, request: &ContactRequest) -> Result<()>;
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct TableUiState {
    selected_row: usize,
    selected_col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    input: LeadFormInput,
    field_index: usize,
}

impl FormUiState {
    fn blank() -> Self {
        Self {
            input: LeadFormInput::blank(),
            field_index: 0,
        }
    }

    fn field(&self) -> FormField {
        FormField::ALL[self.field_index.min(FormField::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    table: TableUiState,
    form: Option<FormUiState>,
    editor_cursor: usize,
    detail: Option<LeadId>,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    dispatch_and_refresh(
        state,
        view_data,
        AppCommand::SetStatus(message.into()),
        internal_tx,
    );
}

fn dispatch_and_refresh(
    state: &mut AppState,
    view_data: &mut ViewData,
    command: AppCommand,
    internal_tx: &Sender<InternalEvent>,
) -> Vec<AppEvent> {
    let events = state.dispatch(command);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }
    if events.iter().any(|event| {
        matches!(
            event,
            AppEvent::ProjectionChanged { .. } | AppEvent::ColumnsSaved
        )
    }) {
        clamp_table_cursor(state, view_data);
    }
    events
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.detail.is_some() {
        handle_detail_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    match state.mode {
        AppMode::Columns => {
            handle_column_editor_key(state, view_data, internal_tx, key);
            false
        }
        AppMode::AddLead => {
            handle_form_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::Search => {
            handle_search_key(state, view_data, internal_tx, key);
            false
        }
        AppMode::Nav => handle_nav_key(state, runtime, view_data, internal_tx, key),
    }
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Tab, _) => {
            dispatch_and_refresh(state, view_data, AppCommand::NextTab, internal_tx);
            return false;
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
            dispatch_and_refresh(state, view_data, AppCommand::PrevTab, internal_tx);
            return false;
        }
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
            return false;
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            view_data.form = Some(FormUiState::blank());
            dispatch_and_refresh(state, view_data, AppCommand::OpenForm, internal_tx);
            return false;
        }
        _ => {}
    }

    if state.active_tab != TabKind::Leads {
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => move_row(state, view_data, 1),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => move_row(state, view_data, -1),
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) => move_col(state, view_data, 1),
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) => move_col(state, view_data, -1),
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            let visible = state.columns.committed().visible_fields();
            match visible.get(view_data.table.selected_col) {
                Some(column) => {
                    dispatch_and_refresh(
                        state,
                        view_data,
                        AppCommand::SortBy(*column),
                        internal_tx,
                    );
                }
                None => emit_status(state, view_data, internal_tx, "no column to sort"),
            }
        }
        (KeyCode::Char('/'), _) => {
            dispatch_and_refresh(state, view_data, AppCommand::EnterSearch, internal_tx);
        }
        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            dispatch_and_refresh(state, view_data, AppCommand::CycleTypeFilter, internal_tx);
        }
        (KeyCode::Char(' '), _) => match selected_lead(state, view_data) {
            Some(lead) => {
                let id = lead.id.clone();
                dispatch_and_refresh(
                    state,
                    view_data,
                    AppCommand::ToggleSelection(id),
                    internal_tx,
                );
            }
            None => emit_status(state, view_data, internal_tx, "no lead selected"),
        },
        (KeyCode::Char('A'), _) => {
            dispatch_and_refresh(state, view_data, AppCommand::ToggleSelectAll, internal_tx);
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            view_data.editor_cursor = 0;
            dispatch_and_refresh(state, view_data, AppCommand::OpenColumnEditor, internal_tx);
        }
        (KeyCode::Char('p'), KeyModifiers::NONE) => {
            contact_selected(state, runtime, view_data, internal_tx, ContactAction::Call);
        }
        (KeyCode::Char('e'), KeyModifiers::NONE) => {
            contact_selected(state, runtime, view_data, internal_tx, ContactAction::Email);
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            contact_selected(state, runtime, view_data, internal_tx, ContactAction::Message);
        }
        (KeyCode::Enter, _) => match selected_lead(state, view_data) {
            Some(lead) => view_data.detail = Some(lead.id.clone()),
            None => emit_status(state, view_data, internal_tx, "no lead selected"),
        },
        _ => {}
    }
    false
}

fn handle_search_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let mut search = state.leads.query().search.clone();
    match key.code {
        KeyCode::Esc => {
            dispatch_and_refresh(
                state,
                view_data,
                AppCommand::SetSearch(String::new()),
                internal_tx,
            );
            dispatch_and_refresh(state, view_data, AppCommand::ExitToNav, internal_tx);
        }
        KeyCode::Enter => {
            dispatch_and_refresh(state, view_data, AppCommand::ExitToNav, internal_tx);
        }
        KeyCode::Backspace => {
            if search.pop().is_some() {
                dispatch_and_refresh(state, view_data, AppCommand::SetSearch(search), internal_tx);
            }
        }
        KeyCode::Char(ch) if is_plain_text(key.modifiers) => {
            search.push(ch);
            dispatch_and_refresh(state, view_data, AppCommand::SetSearch(search), internal_tx);
        }
        _ => {}
    }
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(form) = view_data.form.as_mut() else {
        dispatch_and_refresh(state, view_data, AppCommand::ExitToNav, internal_tx);
        return;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            view_data.form = None;
            dispatch_and_refresh(state, view_data, AppCommand::ExitToNav, internal_tx);
            emit_status(state, view_data, internal_tx, "add lead cancelled");
        }
        (KeyCode::Char('s'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            submit_form(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Enter, _) => submit_form(state, runtime, view_data, internal_tx),
        (KeyCode::Tab, _) => {
            form.field_index = (form.field_index + 1) % FormField::ALL.len();
        }
        (KeyCode::BackTab, _) => {
            form.field_index = (form.field_index + FormField::ALL.len() - 1) % FormField::ALL.len();
        }
        (KeyCode::Left, _) => {
            let field = form.field();
            form.input.cycle_choice(field, -1);
        }
        (KeyCode::Right, _) => {
            let field = form.field();
            form.input.cycle_choice(field, 1);
        }
        (KeyCode::Backspace, _) => {
            let field = form.field();
            if let Some(text) = form.input.text_mut(field) {
                text.pop();
            }
        }
        (KeyCode::Char(ch), modifiers) if is_plain_text(modifiers) => {
            let field = form.field();
            if let Some(text) = form.input.text_mut(field) {
                text.push(ch);
            }
        }
        _ => {}
    }
}

fn submit_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(form) = view_data.form.as_ref() else {
        return;
    };
    let command = AppCommand::AddLead {
        form: form.input.clone(),
        now: runtime.now(),
    };
    let events = dispatch_and_refresh(state, view_data, command, internal_tx);

    let added = events.iter().find_map(|event| match event {
        AppEvent::LeadAdded(id) => Some(id.clone()),
        _ => None,
    });
    let Some(id) = added else {
        debug!("add lead form kept open after validation failure");
        return;
    };
    view_data.form = None;
    if let Some(index) = state.leads.view().iter().position(|lead| lead.id == id) {
        view_data.table.selected_row = index;
    }
}

fn handle_column_editor_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(draft) = state.columns.editor() else {
        dispatch_and_refresh(state, view_data, AppCommand::ExitToNav, internal_tx);
        return;
    };
    let entries = editor_entries(draft);
    let dragging = draft.dragging();
    let has_changes = draft.has_changes();
    let cursor = view_data
        .editor_cursor
        .min(entries.len().saturating_sub(1));
    let Some(current) = entries.get(cursor).map(|column| column.id) else {
        return;
    };

    if let Some(dragged) = dragging {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up => {
                let delta = if matches!(key.code, KeyCode::Char('j') | KeyCode::Down) {
                    1
                } else {
                    -1
                };
                view_data.editor_cursor = step_index(cursor, delta, entries.len());
                let target = entries[view_data.editor_cursor].id;
                dispatch_and_refresh(
                    state,
                    view_data,
                    AppCommand::Drag(DragMessage::HoverOver(target)),
                    internal_tx,
                );
            }
            KeyCode::Enter => {
                dispatch_and_refresh(
                    state,
                    view_data,
                    AppCommand::Drag(DragMessage::Drop(current)),
                    internal_tx,
                );
                follow_editor_column(state, view_data, dragged);
            }
            KeyCode::Esc => {
                dispatch_and_refresh(
                    state,
                    view_data,
                    AppCommand::Drag(DragMessage::CancelDrag),
                    internal_tx,
                );
                follow_editor_column(state, view_data, dragged);
            }
            _ => {}
        }
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => {
            view_data.editor_cursor = step_index(cursor, 1, entries.len());
        }
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => {
            view_data.editor_cursor = step_index(cursor, -1, entries.len());
        }
        (KeyCode::Char(' '), _) => {
            dispatch_and_refresh(
                state,
                view_data,
                AppCommand::ToggleColumn(current),
                internal_tx,
            );
            follow_editor_column(state, view_data, current);
        }
        (KeyCode::Enter, _) => {
            dispatch_and_refresh(
                state,
                view_data,
                AppCommand::Drag(DragMessage::BeginDrag(current)),
                internal_tx,
            );
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            dispatch_and_refresh(state, view_data, AppCommand::ResetColumns, internal_tx);
            follow_editor_column(state, view_data, current);
        }
        (KeyCode::Char('s'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            dispatch_and_refresh(state, view_data, AppCommand::SaveColumns, internal_tx);
        }
        (KeyCode::Esc, _) => {
            dispatch_and_refresh(state, view_data, AppCommand::CancelColumns, internal_tx);
            if has_changes {
                emit_status(state, view_data, internal_tx, "column changes discarded");
            }
        }
        _ => {}
    }
}

fn handle_detail_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let action = match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            view_data.detail = None;
            return;
        }
        KeyCode::Char('p') => ContactAction::Call,
        KeyCode::Char('e') => ContactAction::Email,
        KeyCode::Char('m') => ContactAction::Message,
        _ => return,
    };
    let Some(lead) = view_data
        .detail
        .as_ref()
        .and_then(|id| state.leads.get(id))
        .cloned()
    else {
        view_data.detail = None;
        return;
    };
    contact_lead(state, runtime, view_data, internal_tx, action, &lead);
}

fn contact_selected<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    action: ContactAction,
) {
    let Some(lead) = selected_lead(state, view_data).cloned() else {
        emit_status(state, view_data, internal_tx, "no lead selected");
        return;
    };
    contact_lead(state, runtime, view_data, internal_tx, action, &lead);
}

fn contact_lead<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    action: ContactAction,
    lead: &LeadRecord,
) {
    let Some(request) = ContactRequest::for_lead(action, lead) else {
        let missing = match action {
            ContactAction::Call | ContactAction::Message => "phone number",
            ContactAction::Email => "email address",
        };
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("{} has no {missing}", lead.name),
        );
        return;
    };

    let message = match runtime.open_contact(&request) {
        Ok(()) => format!("{} {}: {}", action.label(), lead.name, request.uri),
        Err(error) => {
            warn!(uri = %request.uri, error = %format!("{error:#}"), "contact action failed");
            format!("{} failed: {error:#}", action.label())
        }
    };
    emit_status(state, view_data, internal_tx, message);
}

fn is_plain_text(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}

fn step_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize)
    };
    next.min(len - 1)
}

fn selected_lead<'a>(state: &'a AppState, view_data: &ViewData) -> Option<&'a LeadRecord> {
    state
        .leads
        .view()
        .get(view_data.table.selected_row)
        .copied()
}

fn move_row(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let rows = state.leads.view().len();
    view_data.table.selected_row = step_index(view_data.table.selected_row, delta, rows);
}

fn move_col(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let columns = state.columns.committed().visible_columns().len();
    view_data.table.selected_col = step_index(view_data.table.selected_col, delta, columns);
}

fn clamp_table_cursor(state: &AppState, view_data: &mut ViewData) {
    let rows = state.leads.view().len();
    let columns = state.columns.committed().visible_columns().len();
    view_data.table.selected_row = view_data.table.selected_row.min(rows.saturating_sub(1));
    view_data.table.selected_col = view_data
        .table
        .selected_col
        .min(columns.saturating_sub(1));
}

/// Visible columns first, then hidden ones, each group in display order.
fn editor_entries(draft: &ColumnDraft) -> Vec<Column> {
    let mut entries = draft.catalog().visible_columns();
    entries.extend(draft.catalog().hidden_columns());
    entries
}

fn follow_editor_column(state: &AppState, view_data: &mut ViewData, id: LeadField) {
    let Some(draft) = state.columns.editor() else {
        return;
    };
    if let Some(index) = editor_entries(draft)
        .iter()
        .position(|column| column.id == id)
    {
        view_data.editor_cursor = index;
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tab_titles = TabKind::ALL
        .iter()
        .map(|tab| tab.label().to_owned())
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title("leaddesk").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    if state.active_tab == TabKind::Leads {
        render_leads(frame, layout[1], state, view_data);
    } else {
        let body = Paragraph::new(render_placeholder_text(state.active_tab)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(state.active_tab.label()),
        );
        frame.render_widget(body, layout[1]);
    }

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if let Some(draft) = state.columns.editor() {
        let area = centered_rect(50, 70, frame.area());
        frame.render_widget(Clear, area);
        let editor = Paragraph::new(render_column_editor_text(draft, view_data.editor_cursor))
            .block(
                Block::default()
                    .title("columns")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(editor, area);
    }

    if let Some(form) = &view_data.form {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let form = Paragraph::new(render_form_text(form))
            .block(Block::default().title("add new lead").borders(Borders::ALL));
        frame.render_widget(form, area);
    }

    if let Some(lead) = view_data
        .detail
        .as_ref()
        .and_then(|id| state.leads.get(id))
    {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let detail = Paragraph::new(render_detail_text(lead))
            .block(Block::default().title("lead").borders(Borders::ALL));
        frame.render_widget(detail, area);
    }

    if view_data.help_visible {
        let area = centered_rect(80, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_leads(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(toolbar_text(state));

    if let Some(message) = empty_state_text(state) {
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let visible = state.columns.committed().visible_columns();
    let mut widths = vec![Constraint::Length(3)];
    widths.extend(visible.iter().map(|_| Constraint::Min(8)));
    widths.push(Constraint::Length(7));

    let header = Row::new(header_labels(state).into_iter().map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let view = state.leads.view();
    let rows = view.iter().enumerate().map(|(row_index, lead)| {
        let selected_row = row_index == view_data.table.selected_row;
        let cells = row_cells(state, lead)
            .into_iter()
            .enumerate()
            .map(|(cell_index, text)| {
                let mut style = Style::default();
                if selected_row {
                    style = style.bg(Color::DarkGray);
                }
                if selected_row && cell_index == view_data.table.selected_col + 1 {
                    style = Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD);
                }
                Cell::from(text).style(style)
            })
            .collect::<Vec<_>>();
        Row::new(cells)
    });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

fn toolbar_text(state: &AppState) -> String {
    let query = state.leads.query();
    let search = if query.search.is_empty() {
        "-"
    } else {
        query.search.as_str()
    };
    format!(
        "leads | search: {search} | type: {} | sort: {} {} | selected: {} | {} of {}",
        query.type_filter.label(),
        query.sort.column.as_str(),
        query.sort.direction.as_str(),
        state.selection.len(),
        state.leads.view().len(),
        state.leads.len(),
    )
}

fn empty_state_text(state: &AppState) -> Option<&'static str> {
    if state.columns.committed().visible_columns().is_empty() {
        return Some(NO_COLUMNS);
    }
    if state.leads.view().is_empty() {
        return Some(NO_LEADS);
    }
    None
}

fn header_labels(state: &AppState) -> Vec<String> {
    let sort = state.leads.query().sort;
    let displayed = state
        .leads
        .view()
        .into_iter()
        .map(|lead| lead.id.clone())
        .collect::<Vec<_>>();
    let check = match state.selection.header_state(&displayed) {
        HeaderCheck::Unchecked => CHECK_OFF,
        HeaderCheck::Partial => CHECK_PARTIAL,
        HeaderCheck::Checked => CHECK_ON,
    };

    let mut labels = vec![check.to_owned()];
    for column in state.columns.committed().visible_columns() {
        let mut label = column.label().to_owned();
        if column.id == sort.column {
            label.push(' ');
            label.push_str(match sort.direction {
                SortDirection::Asc => SORT_ASC,
                SortDirection::Desc => SORT_DESC,
            });
        }
        labels.push(label);
    }
    labels.push(CONTACT_HEADER.to_owned());
    labels
}

fn row_cells(state: &AppState, lead: &LeadRecord) -> Vec<String> {
    let check = if state.selection.is_selected(&lead.id) {
        CHECK_ON
    } else {
        CHECK_OFF
    };
    let mut cells = vec![check.to_owned()];
    cells.extend(
        state
            .columns
            .committed()
            .visible_columns()
            .into_iter()
            .map(|column| lead.display(column.id).to_owned()),
    );
    cells.push(CONTACT_CELL.to_owned());
    cells
}

fn render_placeholder_text(tab: TabKind) -> String {
    match tab.placeholder() {
        Some((headline, blurb)) => format!("{headline}\n\n{blurb}"),
        None => String::new(),
    }
}

fn render_column_editor_text(draft: &ColumnDraft, cursor: usize) -> String {
    let catalog = draft.catalog();
    let mut lines = Vec::new();
    let mut index = 0usize;
    for (title, group) in [
        ("shown", catalog.visible_columns()),
        ("hidden", catalog.hidden_columns()),
    ] {
        lines.push(format!("{title} ({})", group.len()));
        for column in group {
            let pointer = if index == cursor { ">" } else { " " };
            let check = if column.visible { CHECK_ON } else { CHECK_OFF };
            let mut line = format!("{pointer} {check} {}", column.label());
            if draft.dragging() == Some(column.id) {
                line.push_str(" (moving)");
            } else if draft.hovering() == Some(column.id) {
                line.push_str(" <- drop here");
            }
            lines.push(line);
            index += 1;
        }
        lines.push(String::new());
    }
    if draft.has_changes() {
        lines.push("* unsaved changes".to_owned());
    }
    lines.join("\n")
}

fn render_form_text(form: &FormUiState) -> String {
    let mut lines = FormField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let pointer = if index == form.field_index { ">" } else { " " };
            let required = if field.is_required() { "*" } else { "" };
            let value = form.input.display(*field);
            if field.is_choice() {
                format!("{pointer} {}{required}: < {value} >", field.label())
            } else {
                format!("{pointer} {}{required}: {value}", field.label())
            }
        })
        .collect::<Vec<_>>();
    lines.push(String::new());
    lines.push("enter or ctrl+s add lead | esc cancel".to_owned());
    lines.join("\n")
}

fn render_detail_text(lead: &LeadRecord) -> String {
    let mut lines = vec![format!("{} (id {})", lead.name, lead.id), String::new()];
    for field in LeadField::ALL {
        lines.push(format!("{}: {}", field.label(), lead.display(field)));
    }
    lines.push(format!(
        "Budget: {}",
        lead.budget.map_or("-", |budget| budget.label())
    ));
    if !lead.notes.is_empty() {
        lines.push(format!("Notes: {}", lead.notes));
    }
    lines.push(String::new());
    lines.push("p call | e email | m message | esc close".to_owned());
    lines.join("\n")
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
nav: q quit | f/b or tab/shift+tab tabs | j/k rows | h/l columns | s sort\n\
nav: / search | t type filter | space select | A select all | c columns | a add lead\n\
nav: p call | e email | m message | enter details\n\
search: type to filter | backspace | enter keep | esc clear\n\
columns: j/k move | space show/hide | enter drag, j/k hover, enter drop, esc cancel drag\n\
columns: r reset | ctrl+s save | esc discard\n\
form: tab/shift+tab field | left/right choose | ctrl+s or enter submit | esc cancel\n\
details: p/e/m contact | esc close"
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let default = match state.mode {
        AppMode::Nav if view_data.detail.is_some() => "p/e/m contact | esc close".to_owned(),
        AppMode::Nav => {
            "j/k h/l | s sort | / search | t type | space/A select | c cols | a add | p/e/m | enter | ? help | q"
                .to_owned()
        }
        AppMode::Search => "type to filter | enter keep | esc clear".to_owned(),
        AppMode::AddLead => {
            let field = view_data
                .form
                .as_ref()
                .map_or(FormField::Name, FormUiState::field);
            let index = FormField::ALL
                .iter()
                .position(|candidate| *candidate == field)
                .unwrap_or(0);
            format!(
                "field {}/{}: {} | tab/shift+tab | left/right | enter submit | esc cancel",
                index + 1,
                FormField::ALL.len(),
                field.label()
            )
        }
        AppMode::Columns => match state.columns.editor().and_then(ColumnDraft::dragging) {
            Some(dragged) => format!(
                "moving {} | j/k target | enter drop | esc cancel drag",
                dragged.label()
            ),
            None => "space show/hide | enter drag | r reset | ctrl+s save | esc cancel".to_owned(),
        },
    };
    let mode = mode_label(state.mode);
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {default}"),
        None => format!("{mode} | {default}"),
    }
}

fn mode_label(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Nav => "NAV",
        AppMode::Search => "SEARCH",
        AppMode::AddLead => "FORM",
        AppMode::Columns => "COLUMNS",
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
