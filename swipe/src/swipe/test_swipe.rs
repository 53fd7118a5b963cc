// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub mod mock_real_objects_for_swipe {
    use std::time::{Duration, Instant};

    use crate::{ActionSpec, CommonResult, ConfirmPolicy, DEFAULT_RELEASE_DURATION,
                EditActionsProvider, InlineVec, ListCoordinator, ListHostView,
                PointerButton, PointerInput, PointerInputKind, Pos, RevealEngine,
                RevealEngineApi, RevealWidth, RowId, col, reveal_width, row, throws,
                velocity};

    /// A four-row list, one row per terminal row, in a 40 column viewport.
    /// Every row serves the same action script, and the calls the engine makes
    /// back into the host are counted so tests can assert on them.
    #[derive(Debug)]
    pub struct MockListHost {
        pub visible: InlineVec<RowId>,
        pub viewport_width: RevealWidth,
        pub editable: bool,
        pub script: InlineVec<ActionSpec>,
        pub deselect_call_count: usize,
    }

    impl EditActionsProvider for MockListHost {
        fn can_edit(&mut self, _row_id: RowId) -> bool { self.editable }

        fn edit_actions(&mut self, _row_id: RowId) -> InlineVec<ActionSpec> {
            self.script.clone()
        }

        fn deselect_all_rows(&mut self) { self.deselect_call_count += 1; }
    }

    impl ListHostView for MockListHost {
        fn visible_rows(&self) -> InlineVec<RowId> { self.visible.clone() }

        fn row_at(&self, pos: Pos) -> Option<RowId> {
            self.visible.get(pos.row_index.as_usize()).copied()
        }

        fn visible_width(&self) -> RevealWidth { self.viewport_width }
    }

    /// "Delete" (confirms as "Confirm delete") followed by "More". The strip
    /// measures 18 columns, the same as the confirm title, so a confirm latch
    /// on this script never grows the strip.
    pub fn make_specs() -> InlineVec<ActionSpec> {
        let mut specs = InlineVec::<ActionSpec>::new();
        let mut delete = ActionSpec::new("Delete", None);
        delete.confirm_policy = ConfirmPolicy::RequireConfirmation {
            confirm_title: "Confirm delete".into(),
        };
        specs.push(delete);
        specs.push(ActionSpec::new("More", None));
        specs
    }

    pub fn make_host() -> MockListHost { make_host_with_script(make_specs()) }

    pub fn make_host_with_script(arg_script: InlineVec<ActionSpec>) -> MockListHost {
        let mut visible = InlineVec::<RowId>::new();
        for id in 0..4u64 {
            visible.push(RowId(id));
        }
        MockListHost {
            visible,
            viewport_width: reveal_width(40.0),
            editable: true,
            script: arg_script,
            deselect_call_count: 0,
        }
    }

    pub fn make_reveal_engine() -> RevealEngine { RevealEngine::default() }

    /// A coordinator with all four of the mock host's rows attached.
    pub fn make_coordinator() -> ListCoordinator {
        let mut coordinator = ListCoordinator::default();
        for id in 0..4u64 {
            coordinator.attach_row(RowId(id));
        }
        coordinator
    }

    pub fn pointer_pos(arg_col: u16, arg_row: u16) -> Pos { col(arg_col) + row(arg_row) }

    pub fn press(arg_col: u16, arg_row: u16) -> PointerInput {
        PointerInput {
            pos: pointer_pos(arg_col, arg_row),
            kind: PointerInputKind::Down(PointerButton::Left),
        }
    }

    pub fn drag_to(arg_col: u16, arg_row: u16) -> PointerInput {
        PointerInput {
            pos: pointer_pos(arg_col, arg_row),
            kind: PointerInputKind::Drag(PointerButton::Left),
        }
    }

    pub fn release(arg_col: u16, arg_row: u16) -> PointerInput {
        PointerInput {
            pos: pointer_pos(arg_col, arg_row),
            kind: PointerInputKind::Up(PointerButton::Left),
        }
    }

    pub fn scroll_down(arg_col: u16, arg_row: u16) -> PointerInput {
        PointerInput {
            pos: pointer_pos(arg_col, arg_row),
            kind: PointerInputKind::ScrollDown,
        }
    }

    /// Drives one engine through a full leftward drag and the settle that
    /// follows, leaving it `Revealed` with the frame at the strip's full
    /// width. Works for any script the host serves.
    pub fn drag_open_to_revealed(
        engine: &mut RevealEngine,
        host: &mut MockListHost,
        arg_row_id: RowId,
        arg_start_at: Instant,
    ) -> CommonResult<()> {
        throws!({
            RevealEngineApi::on_drag_begin(engine, host, arg_row_id, velocity(-30.0))?;
            RevealEngineApi::on_drag_change(engine, -8.0)?;
            RevealEngineApi::on_drag_end(engine, -8.0, velocity(-30.0), arg_start_at)?;
            RevealEngineApi::on_settle_tick(
                engine,
                arg_start_at + DEFAULT_RELEASE_DURATION,
            )?;
        });
    }

    /// Same, through the coordinator's pointer-event surface: press on
    /// `arg_row`, pull left, release, and run the settle out.
    pub fn open_row_via_coordinator(
        coordinator: &mut ListCoordinator,
        host: &mut MockListHost,
        arg_row: u16,
        arg_start_at: Instant,
    ) -> CommonResult<()> {
        throws!({
            coordinator.apply_event(host, press(30, arg_row), arg_start_at)?;
            coordinator.apply_event(
                host,
                drag_to(24, arg_row),
                arg_start_at + Duration::from_millis(16),
            )?;
            coordinator.apply_event(
                host,
                release(22, arg_row),
                arg_start_at + Duration::from_millis(32),
            )?;
            coordinator.tick(
                arg_start_at + Duration::from_millis(32) + DEFAULT_RELEASE_DURATION,
            )?;
        });
    }
}
