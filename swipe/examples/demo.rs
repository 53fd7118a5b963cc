// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive inbox: drag a row left with the mouse to reveal its actions,
//! tap `Delete` twice to confirm it, scroll with the wheel, `q` to quit.
//!
//! ```text
//! cargo run --example demo
//! cargo run --example demo -- --log-file /tmp/swipe_demo.log
//! RUST_LOG=debug cargo run --example demo -- --log-file /tmp/swipe_demo.log
//! ```
//!
//! Painting happens here, not in the library: every frame this example reads
//! each row's `frame_x` and actions row back out of the [`ListCoordinator`]
//! and repaints with plain crossterm commands, buttons first (they sit
//! behind), then the shifted cell body over them.

use std::{io::{Write, stdout},
          sync::Arc,
          time::{Duration, Instant}};

use clap::Parser;
use crossterm::{cursor,
                event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange,
                        EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
                        KeyModifiers},
                execute, queue,
                style::{Color, Print, ResetColor, SetBackgroundColor,
                        SetForegroundColor},
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};
use futures_util::{FutureExt, StreamExt};
use miette::IntoDiagnostic;
use r3bl_swipe::{ActionSpec, CommonResult, ConfirmPolicy, EditActionsProvider,
                 EventPropagation, FrameTicker, InlineVec, ListCoordinator,
                 ListHostView, PointerButton, PointerInput, PointerInputKind, Pos,
                 RevealWidth, RowId, TextMeasure, UnicodeWidthMeasure, ok,
                 reveal_width, throws, throws_with_return, try_initialize_logging};
use tokio::sync::mpsc;

const FRAME_INTERVAL: Duration = Duration::from_millis(30);
const ROW_COUNT: u64 = 20;
const SUBJECTS: [&str; 5] = [
    "Weekly sync notes",
    "Build finished",
    "Lunch on Friday?",
    "Release checklist",
    "Photos from the trip",
];

#[derive(Debug, Parser)]
#[command(
    name = "demo",
    about = "Swipeable inbox rows in the terminal. Drag left with the mouse."
)]
struct CliArgs {
    /// Append a tracing log to this file (stdout is busy being a UI).
    #[arg(long)]
    log_file: Option<String>,
}

/// Sent from action button handlers back to the main loop, which owns the
/// data.
#[derive(Debug)]
enum AppAction {
    Delete(RowId),
    ToggleRead(RowId),
}

#[derive(Debug)]
struct DemoRow {
    id: RowId,
    title: String,
    unread: bool,
    /// Locked rows decline the swipe (`can_edit` is false for them).
    locked: bool,
    /// These rows size their delete button explicitly instead of from its
    /// title.
    wide_delete: bool,
}

#[derive(Debug)]
struct Inbox {
    rows: Vec<DemoRow>,
    scroll_offset: usize,
    terminal_width: u16,
    terminal_height: u16,
    selected: Option<RowId>,
    action_tx: mpsc::UnboundedSender<AppAction>,
}

impl Inbox {
    fn new(
        terminal_width: u16,
        terminal_height: u16,
        action_tx: mpsc::UnboundedSender<AppAction>,
    ) -> Self {
        let mut rows = Vec::new();
        for (index, id) in (0..ROW_COUNT).enumerate() {
            rows.push(DemoRow {
                id: RowId(id),
                title: format!(
                    "Message {:>2}: {}",
                    index + 1,
                    SUBJECTS[index % SUBJECTS.len()]
                ),
                unread: id % 2 == 1,
                locked: id % 5 == 4,
                wide_delete: id % 3 == 0,
            });
        }
        Self {
            rows,
            scroll_offset: 0,
            terminal_width,
            terminal_height,
            selected: None,
            action_tx,
        }
    }

    /// List rows paint between the header line and the status line.
    fn visible_height(&self) -> usize {
        usize::from(self.terminal_height.saturating_sub(2))
    }

    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.visible_height())
    }

    fn scroll_up(&mut self) { self.scroll_offset = self.scroll_offset.saturating_sub(1); }

    fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
    }

    fn resize(&mut self, new_width: u16, new_height: u16) {
        self.terminal_width = new_width;
        self.terminal_height = new_height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}

impl EditActionsProvider for Inbox {
    fn can_edit(&mut self, row_id: RowId) -> bool {
        self.rows
            .iter()
            .find(|it| it.id == row_id)
            .is_some_and(|it| !it.locked)
    }

    fn edit_actions(&mut self, row_id: RowId) -> InlineVec<ActionSpec> {
        let mut specs = InlineVec::<ActionSpec>::new();
        let Some(demo_row) = self.rows.iter().find(|it| it.id == row_id) else {
            return specs;
        };

        // Odd rows lead with the read toggle; the title tracks current state
        // because this list is rebuilt fresh on every reveal.
        if demo_row.id.0 % 2 == 1 {
            let toggle_tx = self.action_tx.clone();
            let mut toggle = ActionSpec::new(
                if demo_row.unread { "Mark read" } else { "Mark unread" },
                Some(Arc::new(move |_spec| {
                    toggle_tx.send(AppAction::ToggleRead(row_id)).ok();
                })),
            );
            toggle.background_color = Color::DarkGrey;
            specs.push(toggle);
        }

        let delete_tx = self.action_tx.clone();
        let mut delete = ActionSpec::new(
            "Delete",
            Some(Arc::new(move |_spec| {
                delete_tx.send(AppAction::Delete(row_id)).ok();
            })),
        );
        delete.confirm_policy = ConfirmPolicy::RequireConfirmation {
            confirm_title: "Confirm delete".into(),
        };
        if demo_row.wide_delete {
            delete.preferred_width = Some(reveal_width(14.0));
        }
        specs.push(delete);

        specs
    }

    fn deselect_all_rows(&mut self) { self.selected = None; }
}

impl ListHostView for Inbox {
    fn visible_rows(&self) -> InlineVec<RowId> {
        self.rows
            .iter()
            .skip(self.scroll_offset)
            .take(self.visible_height())
            .map(|it| it.id)
            .collect()
    }

    fn row_at(&self, pos: Pos) -> Option<RowId> {
        let terminal_row = pos.row_index.as_usize();
        if terminal_row == 0 || terminal_row > self.visible_height() {
            return None;
        }
        let index = self.scroll_offset + terminal_row - 1;
        self.rows.get(index).map(|it| it.id)
    }

    fn visible_width(&self) -> RevealWidth {
        reveal_width(f64::from(self.terminal_width))
    }
}

#[tokio::main]
async fn main() -> CommonResult<()> {
    let cli_args = CliArgs::parse();
    if let Some(log_file) = cli_args.log_file.as_deref() {
        try_initialize_logging(Some(log_file))?;
    }

    let (action_tx, action_rx) = mpsc::unbounded_channel::<AppAction>();
    let (terminal_width, terminal_height) = terminal::size().into_diagnostic()?;
    let mut inbox = Inbox::new(terminal_width, terminal_height, action_tx);

    let mut coordinator = ListCoordinator::default();
    for demo_row in &inbox.rows {
        coordinator.attach_row(demo_row.id);
    }

    enter_terminal()?;
    let result = main_loop(&mut inbox, &mut coordinator, action_rx).await;
    leave_terminal()?;
    result
}

fn enter_terminal() -> CommonResult<()> {
    throws!({
        terminal::enable_raw_mode().into_diagnostic()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide
        )
        .into_diagnostic()?;
    });
}

fn leave_terminal() -> CommonResult<()> {
    throws!({
        execute!(
            stdout(),
            cursor::Show,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .into_diagnostic()?;
        terminal::disable_raw_mode().into_diagnostic()?;
    });
}

async fn main_loop(
    inbox: &mut Inbox,
    coordinator: &mut ListCoordinator,
    mut action_rx: mpsc::UnboundedReceiver<AppAction>,
) -> CommonResult<()> {
    throws!({
        let mut event_stream = EventStream::new();
        let (tick_tx, mut tick_rx) = mpsc::channel::<Instant>(1);
        let mut frame_ticker = FrameTicker::default();
        frame_ticker.start(FRAME_INTERVAL, tick_tx);

        paint(inbox, coordinator)?;

        loop {
            tokio::select! {
                maybe_event = event_stream.next().fuse() => {
                    let Some(Ok(event)) = maybe_event else { break; };
                    if !handle_terminal_event(inbox, coordinator, &event)? {
                        break;
                    }
                }
                maybe_tick = tick_rx.recv() => {
                    let Some(now) = maybe_tick else { break; };
                    if coordinator.tick(now)? {
                        paint(inbox, coordinator)?;
                    }
                }
            }

            if apply_app_actions(inbox, coordinator, &mut action_rx)? {
                paint(inbox, coordinator)?;
            }
        }

        frame_ticker.stop()?;
    });
}

/// Returns `false` when the demo should exit.
fn handle_terminal_event(
    inbox: &mut Inbox,
    coordinator: &mut ListCoordinator,
    event: &Event,
) -> CommonResult<bool> {
    throws_with_return!({
        let now = Instant::now();
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return ok!(false),
                KeyCode::Char('c')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    return ok!(false);
                }
                KeyCode::Up => {
                    coordinator.on_scroll_begin(inbox, now)?;
                    inbox.scroll_up();
                    paint(inbox, coordinator)?;
                }
                KeyCode::Down => {
                    coordinator.on_scroll_begin(inbox, now)?;
                    inbox.scroll_down();
                    paint(inbox, coordinator)?;
                }
                _ => {}
            },
            Event::Mouse(mouse_event) => {
                let input = PointerInput::from(*mouse_event);
                match coordinator.apply_event(inbox, input, now)? {
                    EventPropagation::ConsumedRender => paint(inbox, coordinator)?,
                    EventPropagation::Propagate => {
                        if handle_propagated_input(inbox, input) {
                            paint(inbox, coordinator)?;
                        }
                    }
                    _ => {}
                }
            }
            Event::FocusLost => {
                if coordinator.cancel_active_drag(now)? {
                    paint(inbox, coordinator)?;
                }
            }
            Event::Resize(new_width, new_height) => {
                inbox.resize(*new_width, *new_height);
                paint(inbox, coordinator)?;
            }
            _ => {}
        }
        true
    });
}

/// Pointer events the swipe layer did not claim: wheel scrolling and plain
/// clicks (selection). Returns whether a repaint is needed.
fn handle_propagated_input(inbox: &mut Inbox, input: PointerInput) -> bool {
    match input.kind {
        PointerInputKind::ScrollDown => {
            inbox.scroll_down();
            true
        }
        PointerInputKind::ScrollUp => {
            inbox.scroll_up();
            true
        }
        PointerInputKind::Up(PointerButton::Left) => {
            inbox.selected = inbox.row_at(input.pos);
            true
        }
        _ => false,
    }
}

/// Drains the channel the button handlers write to and applies the results to
/// the data model. Returns whether anything changed.
fn apply_app_actions(
    inbox: &mut Inbox,
    coordinator: &mut ListCoordinator,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
) -> CommonResult<bool> {
    throws_with_return!({
        let mut changed = false;
        while let Ok(action) = action_rx.try_recv() {
            match action {
                AppAction::Delete(row_id) => {
                    inbox.rows.retain(|it| it.id != row_id);
                    coordinator.detach_row(row_id);
                    inbox.scroll_offset = inbox.scroll_offset.min(inbox.max_scroll());
                }
                AppAction::ToggleRead(row_id) => {
                    if let Some(demo_row) =
                        inbox.rows.iter_mut().find(|it| it.id == row_id)
                    {
                        demo_row.unread = !demo_row.unread;
                    }
                    coordinator.hide_all(true, Instant::now())?;
                }
            }
            changed = true;
        }
        changed
    });
}

fn paint(inbox: &Inbox, coordinator: &ListCoordinator) -> CommonResult<()> {
    throws!({
        let mut out = stdout();
        queue!(out, Clear(ClearType::All), ResetColor).into_diagnostic()?;

        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::DarkGrey),
            Print(" inbox: drag a row left to reveal its actions"),
            ResetColor
        )
        .into_diagnostic()?;

        let visible = inbox
            .rows
            .iter()
            .skip(inbox.scroll_offset)
            .take(inbox.visible_height());
        let mut terminal_row: u16 = 1;
        for demo_row in visible {
            paint_row(&mut out, inbox, coordinator, demo_row, terminal_row)?;
            terminal_row = terminal_row.saturating_add(1);
        }

        let status_row = inbox.terminal_height.saturating_sub(1);
        queue!(
            out,
            cursor::MoveTo(0, status_row),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                " {} messages | wheel scrolls | q quits",
                inbox.rows.len()
            )),
            ResetColor
        )
        .into_diagnostic()?;

        out.flush().into_diagnostic()?;
    });
}

fn paint_row(
    out: &mut impl Write,
    inbox: &Inbox,
    coordinator: &ListCoordinator,
    demo_row: &DemoRow,
    terminal_row: u16,
) -> CommonResult<()> {
    throws!({
        let width = inbox.terminal_width;
        let width_f64 = f64::from(width);
        let maybe_engine = coordinator.engine_for_row(demo_row.id);
        let frame_x = maybe_engine.map_or(0.0, |engine| engine.frame_x.as_f64());

        // Buttons first (full-bleed slabs, bottom to top); the cell body
        // paints over whatever it still covers.
        if let Some(actions_row) =
            maybe_engine.and_then(|engine| engine.maybe_actions_row.as_ref())
        {
            let gutter_origin = width_f64 + frame_x;
            let measurer = UnicodeWidthMeasure;
            for button in actions_row.buttons_in_paint_order() {
                if button.is_hidden {
                    continue;
                }
                let slab_start =
                    to_col(gutter_origin + button.current_offset_x.as_f64(), width);
                if slab_start >= width {
                    continue;
                }
                queue!(
                    out,
                    cursor::MoveTo(slab_start, terminal_row),
                    SetBackgroundColor(button.spec.background_color),
                    SetForegroundColor(button.spec.title_color),
                    Print(" ".repeat(usize::from(width - slab_start)))
                )
                .into_diagnostic()?;

                // Center the title in the button's slot.
                let title = button.displayed_title.as_str();
                let title_width = measurer.measure(title).as_f64();
                let pad = ((button.current_width.as_f64() - title_width) / 2.0).max(0.0);
                let title_col = to_col(
                    gutter_origin + button.current_offset_x.as_f64() + pad,
                    width,
                );
                if title_col < width {
                    let avail = usize::from(width - title_col);
                    let clipped: String = title.chars().take(avail).collect();
                    queue!(out, cursor::MoveTo(title_col, terminal_row), Print(clipped))
                        .into_diagnostic()?;
                }
                queue!(out, ResetColor).into_diagnostic()?;
            }
        }

        // The cell body spans [frame_x, frame_x + width); only the part left
        // of the gutter is on screen.
        let cell_visible_width = usize::from(to_col(width_f64 + frame_x, width));
        if cell_visible_width > 0 {
            let marker = if demo_row.unread { "\u{2022}" } else { " " };
            let mut line = format!(" {marker} {}", demo_row.title);
            if demo_row.locked {
                line.push_str("  (locked)");
            }
            let padded = format!("{line:<pad_width$}", pad_width = usize::from(width));
            let clipped: String = padded.chars().take(cell_visible_width).collect();

            let is_selected = inbox.selected == Some(demo_row.id);
            let (bg, fg) = if is_selected {
                (Color::DarkBlue, Color::White)
            } else {
                (Color::Reset, Color::Reset)
            };
            queue!(
                out,
                cursor::MoveTo(0, terminal_row),
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(clipped),
                ResetColor
            )
            .into_diagnostic()?;
        }
    });
}

/// Quantizes a column position to a terminal cell, clamped to the viewport.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_col(arg_x: f64, arg_max: u16) -> u16 {
    arg_x.round().clamp(0.0, f64::from(arg_max)) as u16
}
