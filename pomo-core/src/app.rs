//! Application loop
//!
//! [`App`] owns every piece of engine state. The firmware calls
//! [`App::step`] once per loop iteration; each step runs, in order:
//!
//! 1. touch handling (gesture classification and region dispatch)
//! 2. remote command draining
//! 3. timer advancement (session expiry)
//! 4. display update
//! 5. rotation polling
//!
//! Nothing here blocks or fails. Peripheral errors degrade to "nothing
//! happened this tick" and are reported in the [`StepReport`].

use pomo_protocol::{Notification, StatusPhase, StatusSnapshot};

use crate::config::{ColorSelection, LayoutConfig, TimingConfig};
use crate::geometry::{Orientation, Point};
use crate::inbox::CommandInbox;
use crate::input::{DropReason, GestureDetector, TouchEvent, TouchTransform};
use crate::notify::NotificationGate;
use crate::regions::Control;
use crate::render::{grid, Redraw, Renderer, Scene, TimerView};
use crate::rotation::{RotationManager, RotationPoll};
use crate::state::{
    ColorEdit, Countdown, EditTarget, Event, Mode, SessionKind, TimerState, ViewEvent, ViewMode,
};
use crate::traits::{AccelSource, DrawSurface, Outbox, SettingsStore, SurfaceError, TouchSource};

/// Why a gesture had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IgnoreReason {
    /// Rejected by the gesture detector
    Dropped(DropReason),
    /// No valid region under the tap
    NoRegion,
    /// Control hit but not usable in the current state
    Inactive(Control),
    /// Tap inside the grid but outside any palette cell
    OutOfRange,
    /// Grid confirm without a highlighted cell
    NoSelection,
}

/// What touch handling did this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// No completed gesture
    Idle,
    Ignored(IgnoreReason),
    /// Tap routed to a control
    Control(Control),
    /// Palette cell highlighted
    GridCell(u8),
    LongPressStart,
    LongPressStop,
}

/// Outcome of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    pub dispatch: Dispatch,
    /// Remote commands that changed something
    pub commands: u8,
    /// Session flipped this step
    pub expired: bool,
    pub redraw: Result<Redraw, SurfaceError>,
    pub rotation: RotationPoll,
}

/// Capabilities the application drives
pub struct Peripherals<'a, S, T, A, K, O> {
    pub surface: &'a mut S,
    pub touch: &'a mut T,
    pub accel: &'a mut A,
    pub settings: &'a mut K,
    pub outbox: &'a mut O,
    pub inbox: &'a CommandInbox,
}

/// The Pomodoro engine
#[derive(Debug, Clone)]
pub struct App {
    timing: TimingConfig,
    state: TimerState,
    session: SessionKind,
    mode: Mode,
    countdown: Countdown,
    view: ViewMode,
    edit: ColorEdit,
    colors: ColorSelection,
    minutes_only: bool,
    gestures: GestureDetector,
    transform: TouchTransform,
    rotation: RotationManager,
    renderer: Renderer,
    gate: NotificationGate,
}

impl App {
    pub fn new(
        timing: TimingConfig,
        layout: LayoutConfig,
        colors: ColorSelection,
        orientation: Orientation,
    ) -> Self {
        let mode = Mode::default();
        let mut countdown = Countdown::default();
        countdown.set_duration(mode.work_ms());

        Self {
            state: TimerState::Stopped,
            session: SessionKind::Work,
            mode,
            countdown,
            view: ViewMode::Home,
            edit: ColorEdit::begin(colors),
            colors,
            minutes_only: false,
            gestures: GestureDetector::new(&timing),
            transform: TouchTransform::new(orientation),
            rotation: RotationManager::new(
                orientation,
                timing.rotation_poll_ms,
                timing.rotation_threshold_mg,
            ),
            renderer: Renderer::new(layout, &timing),
            gate: NotificationGate::new(timing.notify_debounce_ms),
            timing,
        }
    }

    /// Use `mode` instead of the default durations
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.set_mode(mode);
        self
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn session(&self) -> SessionKind {
        self.session
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn colors(&self) -> ColorSelection {
        self.colors
    }

    pub fn edit(&self) -> &ColorEdit {
        &self.edit
    }

    pub fn orientation(&self) -> Orientation {
        self.rotation.current()
    }

    pub fn minutes_only(&self) -> bool {
        self.minutes_only
    }

    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.countdown.remaining_ms(now_ms)
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// State summary for `/status`
    pub fn status(&self) -> StatusSnapshot {
        let phase = match (self.state, self.session) {
            (TimerState::Stopped, _) => StatusPhase::Stopped,
            (TimerState::Paused, _) => StatusPhase::Paused,
            (TimerState::Running, SessionKind::Work) => StatusPhase::Working,
            (TimerState::Running, SessionKind::Rest) => StatusPhase::Resting,
        };
        StatusSnapshot {
            phase,
            mode_label: self.mode.label(),
            next_mode_label: self.mode.next().label(),
        }
    }

    /// Run one loop iteration
    pub fn step<S, T, A, K, O>(
        &mut self,
        io: &mut Peripherals<'_, S, T, A, K, O>,
        now_ms: u32,
    ) -> StepReport
    where
        S: DrawSurface,
        T: TouchSource,
        A: AccelSource,
        K: SettingsStore,
        O: Outbox,
    {
        let dispatch = self.handle_touch(io.surface, io.touch, io.settings, io.outbox, now_ms);
        let commands = self.drain_commands(io.inbox, io.outbox, now_ms);
        let expired = self.advance_timer(io.outbox, now_ms);
        let redraw = self.update_display(io.surface, now_ms);
        let rotation = self.poll_rotation(io.surface, io.accel, now_ms);

        StepReport {
            dispatch,
            commands,
            expired,
            redraw,
            rotation,
        }
    }

    /// Sample the touch controller and act on a completed gesture
    pub fn handle_touch<S, T, K, O>(
        &mut self,
        surface: &mut S,
        touch: &mut T,
        settings: &mut K,
        outbox: &mut O,
        now_ms: u32,
    ) -> Dispatch
    where
        S: DrawSurface,
        T: TouchSource,
        K: SettingsStore,
        O: Outbox,
    {
        let asserted = touch.line_asserted();
        // A failed read carries no coordinate; the press keeps its last one
        let point = if asserted {
            touch
                .primary_point()
                .ok()
                .flatten()
                .and_then(|p| self.transform.apply(p))
        } else {
            None
        };

        match self.gestures.update(asserted, point, now_ms) {
            TouchEvent::LongPress => self.long_press(outbox, now_ms),
            TouchEvent::Tap(p) => {
                if self.renderer.mark_tap(surface, p, now_ms).is_err() {
                    self.renderer.invalidate();
                }
                self.dispatch_tap(surface, settings, outbox, p, now_ms)
            }
            TouchEvent::Dropped(reason) => Dispatch::Ignored(IgnoreReason::Dropped(reason)),
            TouchEvent::None | TouchEvent::Pressed | TouchEvent::Released => Dispatch::Idle,
        }
    }

    fn long_press<O: Outbox>(&mut self, outbox: &mut O, now_ms: u32) -> Dispatch {
        if self.state == TimerState::Stopped {
            self.apply(Event::Start, outbox, now_ms);
            Dispatch::LongPressStart
        } else {
            self.apply(Event::Stop, outbox, now_ms);
            Dispatch::LongPressStop
        }
    }

    /// Route a tap to the control under it
    fn dispatch_tap<S, K, O>(
        &mut self,
        surface: &mut S,
        settings: &mut K,
        outbox: &mut O,
        p: Point,
        now_ms: u32,
    ) -> Dispatch
    where
        S: DrawSurface,
        K: SettingsStore,
        O: Outbox,
    {
        let padding = self.renderer.layout().touch_padding;
        let Some(control) = self.renderer.regions().hit(p, padding) else {
            return Dispatch::Ignored(IgnoreReason::NoRegion);
        };
        let inactive = Dispatch::Ignored(IgnoreReason::Inactive(control));
        let on_timer = self.view == ViewMode::Home && self.state.is_active();

        match control {
            Control::Gear => {
                if self.view != ViewMode::Home || self.state != TimerState::Stopped {
                    return inactive;
                }
                self.edit = ColorEdit::begin(self.colors);
                self.change_view(ViewEvent::OpenPreview);
            }

            Control::StatusButton if on_timer => {
                let event = match self.state {
                    TimerState::Running => Event::Pause,
                    _ => Event::Resume,
                };
                self.apply(event, outbox, now_ms);
            }
            Control::ModeButton if on_timer => self.set_mode(self.mode.next()),
            Control::Ring if on_timer => self.minutes_only = !self.minutes_only,
            Control::StatusButton | Control::ModeButton | Control::Ring => return inactive,

            Control::GridCells => {
                let layout = grid::layout_for(surface, self.renderer.layout());
                let Some(index) = layout.cell_at(p) else {
                    return Dispatch::Ignored(IgnoreReason::OutOfRange);
                };
                let previous = self.edit.highlight();
                if !self.edit.select(index) {
                    return Dispatch::Ignored(IgnoreReason::OutOfRange);
                }
                // Failure already scheduled a full redraw
                let _ = self.renderer.select_cell(surface, previous, index);
                return Dispatch::GridCell(index);
            }
            Control::GridConfirm => {
                if !self.edit.apply_highlight() {
                    return Dispatch::Ignored(IgnoreReason::NoSelection);
                }
                self.change_view(ViewEvent::ConfirmColor);
            }
            Control::GridCancel | Control::PreviewCancel => self.change_view(ViewEvent::Cancel),

            Control::PreviewWork => {
                self.edit.retarget(EditTarget::Work);
                self.change_view(ViewEvent::EditColor);
            }
            Control::PreviewRest => {
                self.edit.retarget(EditTarget::Rest);
                self.change_view(ViewEvent::EditColor);
            }
            Control::PreviewConfirm => {
                self.colors = self.edit.preview;
                settings.store_colors(self.colors);
                self.change_view(ViewEvent::ConfirmPreview);
            }
        }

        Dispatch::Control(control)
    }

    fn change_view(&mut self, event: ViewEvent) {
        let next = self.view.transition(event);
        if next != self.view {
            self.view = next;
            self.renderer.invalidate();
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.countdown.set_duration(mode.duration_ms(self.session));
    }

    /// Apply a timer event if the current state accepts it
    ///
    /// Returns `false` for events that are invalid right now.
    pub fn apply<O: Outbox>(&mut self, event: Event, outbox: &mut O, now_ms: u32) -> bool {
        if !self.state.accepts(event) {
            return false;
        }
        let next = self.state.transition(event);

        match event {
            Event::Start => {
                self.session = SessionKind::Work;
                self.countdown.start(now_ms, self.mode.work_ms());
                self.view = self.view.transition(ViewEvent::Reset);
                self.edit = ColorEdit::begin(self.colors);
                self.gestures.arm_suppression(now_ms);
                self.renderer.invalidate();
            }
            Event::Pause => self.countdown.pause(now_ms),
            Event::Resume => self.countdown.resume(now_ms),
            Event::Stop => {
                self.session = SessionKind::Work;
                self.countdown.reset();
                self.countdown.set_duration(self.mode.work_ms());
                self.view = self.view.transition(ViewEvent::Reset);
                self.gestures.clear_suppression();
                self.renderer.invalidate();
            }
            Event::SessionExpired => {
                self.session = self.session.toggled();
                self.countdown.start(now_ms, self.mode.duration_ms(self.session));
                self.renderer.invalidate();
                let flip = match self.session {
                    SessionKind::Rest => Notification::RestTime,
                    SessionKind::Work => Notification::WorkTime,
                };
                self.notify(flip, outbox, now_ms);
            }
        }
        self.state = next;

        if let Some(n) = event.notification() {
            self.notify(n, outbox, now_ms);
        }
        true
    }

    fn notify<O: Outbox>(&mut self, n: Notification, outbox: &mut O, now_ms: u32) -> bool {
        self.gate.admit(n, now_ms) && outbox.try_send(n.to_message())
    }

    /// Act on pending remote commands
    ///
    /// Returns how many of them changed something.
    pub fn drain_commands<O: Outbox>(&mut self, inbox: &CommandInbox, outbox: &mut O, now_ms: u32) -> u8 {
        let mut applied = 0;
        for cmd in inbox.take_all() {
            let changed = match Event::from_remote(cmd) {
                Some(event) => self.apply(event, outbox, now_ms),
                None => {
                    self.set_mode(self.mode.next());
                    self.renderer.invalidate();
                    true
                }
            };
            if changed {
                applied += 1;
            }
        }
        applied
    }

    /// Flip the session when the countdown runs out
    pub fn advance_timer<O: Outbox>(&mut self, outbox: &mut O, now_ms: u32) -> bool {
        if self.state != TimerState::Running || self.view != ViewMode::Home {
            return false;
        }
        self.countdown.is_expired(now_ms) && self.apply(Event::SessionExpired, outbox, now_ms)
    }

    /// Bring the panel up to date
    pub fn update_display<S: DrawSurface>(&mut self, surface: &mut S, now_ms: u32) -> Result<Redraw, SurfaceError> {
        let scene = Scene {
            view: self.view,
            timer: TimerView {
                state: self.state,
                color: self.colors.ui_color(self.session),
                mode: self.mode,
                progress: self.countdown.progress(now_ms),
                remaining_ms: self.countdown.remaining_ms(now_ms),
                minutes_only: self.minutes_only,
            },
            work_color: self.colors.work,
            edit: &self.edit,
        };
        self.renderer.render(surface, &scene, now_ms)
    }

    /// Poll the accelerometer and re-layout on an orientation change
    pub fn poll_rotation<S, A>(&mut self, surface: &mut S, accel: &mut A, now_ms: u32) -> RotationPoll
    where
        S: DrawSurface,
        A: AccelSource,
    {
        let poll = self.rotation.poll(accel, now_ms);
        if let RotationPoll::Changed(orientation) = poll {
            self.set_orientation(orientation);
            surface.set_orientation(orientation);
            // Failure leaves a full redraw pending for the next step
            let _ = self.update_display(surface, now_ms);
        }
        poll
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.transform.set_orientation(orientation);
        self.gestures.forget_point();
        self.renderer.invalidate();
    }

    /// Timing in use
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{palette_color, Color};
    use crate::geometry::NATIVE_SIZE;
    use crate::input::transform::display_to_native;
    use crate::render::Screen;
    use crate::testing::{MemorySettings, RecordingSurface, ScriptedAccel, ScriptedTouch};
    use crate::traits::{AccelSample, BoundedOutbox};
    use pomo_protocol::RemoteCommand;

    struct Rig {
        app: App,
        surface: RecordingSurface,
        touch: ScriptedTouch,
        accel: ScriptedAccel,
        settings: MemorySettings,
        outbox: BoundedOutbox<3>,
        inbox: CommandInbox,
    }

    impl Rig {
        fn new(mode: Mode) -> Self {
            let app = App::new(
                TimingConfig::default(),
                LayoutConfig::default(),
                ColorSelection::default(),
                Orientation::Portrait,
            )
            .with_mode(mode);
            Self {
                app,
                surface: RecordingSurface::portrait(),
                touch: ScriptedTouch::default(),
                accel: ScriptedAccel::flat(),
                settings: MemorySettings::default(),
                outbox: BoundedOutbox::new(),
                inbox: CommandInbox::new(),
            }
        }

        fn step(&mut self, now: u32) -> StepReport {
            let mut io = Peripherals {
                surface: &mut self.surface,
                touch: &mut self.touch,
                accel: &mut self.accel,
                settings: &mut self.settings,
                outbox: &mut self.outbox,
                inbox: &self.inbox,
            };
            self.app.step(&mut io, now)
        }

        /// Press at a display point and release; returns the release step's dispatch
        fn tap(&mut self, p: Point, t: u32) -> Dispatch {
            let native = display_to_native(p, self.app.orientation(), self.surface.size());
            self.touch.press(native);
            self.step(t);
            self.step(t + 50);
            self.touch.release();
            self.step(t + 60);
            self.step(t + 270).dispatch
        }

        /// Hold until the long press fires, then release
        fn long_press(&mut self, t: u32) -> Dispatch {
            self.touch.press(display_to_native(Point::new(86, 160), Orientation::Portrait, NATIVE_SIZE));
            self.step(t);
            self.step(t + 500);
            let dispatch = self.step(t + 1000).dispatch;
            self.touch.release();
            self.step(t + 1100);
            self.step(t + 1310);
            dispatch
        }
    }

    #[test]
    fn test_color_edit_flow() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        assert_eq!(rig.app.renderer().shown(), Some(Screen::Splash));

        // Gear opens the preview
        assert_eq!(rig.tap(Point::new(86, 280), 100), Dispatch::Control(Control::Gear));
        assert_eq!(rig.app.view(), ViewMode::Preview);

        // Work swatch opens the grid for the work color
        assert_eq!(rig.tap(Point::new(86, 100), 500), Dispatch::Control(Control::PreviewWork));
        assert_eq!(rig.app.view(), ViewMode::Grid);
        assert_eq!(rig.app.edit().target, EditTarget::Work);

        assert_eq!(rig.tap(Point::new(128, 64), 900), Dispatch::GridCell(5));
        assert_eq!(rig.app.edit().highlight(), Some(5));

        assert_eq!(rig.tap(Point::new(116, 294), 1300), Dispatch::Control(Control::GridConfirm));
        assert_eq!(rig.app.view(), ViewMode::Preview);
        assert_eq!(rig.app.edit().preview.work, palette_color(5).unwrap());
        assert_eq!(rig.settings.writes, 0);

        assert_eq!(
            rig.tap(Point::new(129, 280), 1700),
            Dispatch::Control(Control::PreviewConfirm)
        );
        assert_eq!(rig.app.view(), ViewMode::Home);
        assert_eq!(rig.app.state(), TimerState::Stopped);
        assert_eq!(rig.app.colors().work, palette_color(5).unwrap());
        assert_eq!(rig.settings.get(crate::config::SettingKey::WorkColor), Some(palette_color(5).unwrap().raw()));
        assert_eq!(rig.app.renderer().shown(), Some(Screen::Splash));
    }

    #[test]
    fn test_grid_confirm_needs_selection() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        rig.tap(Point::new(86, 280), 100);
        rig.tap(Point::new(86, 100), 500);
        assert_eq!(
            rig.tap(Point::new(116, 294), 900),
            Dispatch::Ignored(IgnoreReason::NoSelection)
        );
        assert_eq!(rig.app.view(), ViewMode::Grid);
    }

    #[test]
    fn test_preview_cancel_discards_edit() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        rig.tap(Point::new(86, 280), 100);
        rig.tap(Point::new(86, 220), 500);
        assert_eq!(rig.app.edit().target, EditTarget::Rest);
        assert!(rig.app.edit().preview.rest.is_unset());
        rig.tap(Point::new(128, 64), 900);
        rig.tap(Point::new(116, 294), 1300);
        assert_eq!(rig.app.edit().preview.rest, palette_color(5).unwrap());

        assert_eq!(rig.tap(Point::new(43, 280), 1700), Dispatch::Control(Control::PreviewCancel));
        assert_eq!(rig.app.view(), ViewMode::Home);
        assert_eq!(rig.app.colors(), ColorSelection::default());
        assert_eq!(rig.settings.writes, 0);
    }

    #[test]
    fn test_long_press_starts_and_suppresses_tap() {
        let mut rig = Rig::new(Mode::Classic);
        assert_eq!(rig.long_press(5_000), Dispatch::LongPressStart);
        assert_eq!(rig.app.state(), TimerState::Running);
        assert_eq!(rig.app.renderer().shown(), Some(Screen::Timer));

        // Status button tapped inside the window
        let status = Point::new(86, 290);
        assert_eq!(
            rig.tap(status, 6_400),
            Dispatch::Ignored(IgnoreReason::Dropped(DropReason::Suppressed))
        );
        assert_eq!(rig.app.state(), TimerState::Running);

        // Same spot after the window closes
        assert_eq!(rig.tap(status, 7_600), Dispatch::Control(Control::StatusButton));
        assert_eq!(rig.app.state(), TimerState::Paused);

        // Pause notification fell inside the debounce window
        assert_eq!(rig.outbox.len(), 1);
        assert_eq!(rig.outbox.pop().unwrap(), Notification::WorkStarted.to_message());
    }

    #[test]
    fn test_long_press_stops() {
        let mut rig = Rig::new(Mode::Classic);
        rig.long_press(5_000);
        assert_eq!(rig.long_press(10_000), Dispatch::LongPressStop);
        assert_eq!(rig.app.state(), TimerState::Stopped);
        assert_eq!(rig.app.renderer().shown(), Some(Screen::Splash));
        assert_eq!(rig.outbox.len(), 2);
    }

    #[test]
    fn test_mode_tap_cycles_independent_of_state() {
        let mut rig = Rig::new(Mode::Quick);
        rig.long_press(0);
        let mode_button = Point::new(86, 42);

        let mut labels = std::vec::Vec::new();
        for i in 0..3 {
            rig.tap(mode_button, 3_000 + i * 400);
            labels.push(rig.app.mode().label());
        }
        assert_eq!(labels, ["25/5", "50/10", "1/1"]);

        rig.tap(Point::new(86, 290), 5_000);
        assert_eq!(rig.app.state(), TimerState::Paused);
        assert_eq!(rig.tap(mode_button, 5_400), Dispatch::Control(Control::ModeButton));
        assert_eq!(rig.app.mode(), Mode::Classic);
    }

    #[test]
    fn test_ring_tap_toggles_format() {
        let mut rig = Rig::new(Mode::Classic);
        rig.long_press(0);
        assert_eq!(rig.tap(Point::new(86, 160), 3_000), Dispatch::Control(Control::Ring));
        assert!(rig.app.minutes_only());
    }

    #[test]
    fn test_gear_hidden_while_running() {
        let mut rig = Rig::new(Mode::Classic);
        rig.long_press(0);
        // Inside the splash gear's padded bounds, clear of the status button
        assert_eq!(rig.tap(Point::new(47, 245), 3_000), Dispatch::Ignored(IgnoreReason::NoRegion));
        assert_eq!(rig.app.view(), ViewMode::Home);
    }

    #[test]
    fn test_session_flip_on_expiry() {
        let mut rig = Rig::new(Mode::Quick);
        rig.inbox.raise(RemoteCommand::Start);
        let report = rig.step(1_000);
        assert_eq!(report.commands, 1);
        assert_eq!(rig.app.session(), SessionKind::Work);

        rig.step(60_999);
        assert_eq!(rig.app.session(), SessionKind::Work);

        let report = rig.step(61_000);
        assert!(report.expired);
        assert_eq!(report.redraw, Ok(Redraw::Full(Screen::Timer)));
        assert_eq!(rig.app.session(), SessionKind::Rest);
        assert_eq!(rig.app.remaining_ms(61_000), 60_000);
        assert_eq!(rig.app.status().phase, StatusPhase::Resting);

        // Start fell inside the boot window; the flip bypasses the gate
        assert_eq!(rig.outbox.len(), 1);
        assert_eq!(rig.outbox.pop().unwrap(), Notification::RestTime.to_message());
    }

    #[test]
    fn test_control_notifications_held_after_boot() {
        let mut rig = Rig::new(Mode::Classic);
        rig.inbox.raise(RemoteCommand::Start);
        rig.step(1_000);
        rig.inbox.raise(RemoteCommand::Stop);
        rig.step(2_000);
        assert!(rig.outbox.is_empty());

        rig.inbox.raise(RemoteCommand::Start);
        rig.step(3_001);
        assert_eq!(rig.outbox.len(), 1);
        assert_eq!(rig.outbox.pop().unwrap(), Notification::WorkStarted.to_message());
    }

    #[test]
    fn test_brief_contact_dropped_as_jitter() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        rig.touch.press(display_to_native(Point::new(86, 280), Orientation::Portrait, NATIVE_SIZE));
        rig.step(100);
        rig.step(105);
        rig.touch.release();
        rig.step(110);
        assert_eq!(
            rig.step(310).dispatch,
            Dispatch::Ignored(IgnoreReason::Dropped(DropReason::TooShort))
        );
        assert_eq!(rig.app.view(), ViewMode::Home);
    }

    #[test]
    fn test_rest_uses_inverted_work_color() {
        let mut rig = Rig::new(Mode::Quick);
        rig.inbox.raise(RemoteCommand::Start);
        rig.step(0);
        rig.surface.clear();
        rig.step(60_000);
        let inverted = Color::GOLD.inverted();
        assert!(rig.surface.ops.iter().any(|op| matches!(
            op,
            crate::testing::Op::DrawCircle(_, _, c) if *c == inverted
        )));
    }

    #[test]
    fn test_commands_apply_in_order() {
        let mut rig = Rig::new(Mode::Classic);
        rig.inbox.raise(RemoteCommand::Stop);
        rig.inbox.raise(RemoteCommand::Pause);
        rig.inbox.raise(RemoteCommand::Start);
        let report = rig.step(0);
        // start, then pause; stop last
        assert_eq!(report.commands, 3);
        assert_eq!(rig.app.state(), TimerState::Stopped);
        assert!(rig.inbox.is_empty());
    }

    #[test]
    fn test_invalid_commands_ignored() {
        let mut rig = Rig::new(Mode::Classic);
        rig.inbox.raise(RemoteCommand::Resume);
        assert_eq!(rig.step(0).commands, 0);
        assert_eq!(rig.app.state(), TimerState::Stopped);
    }

    #[test]
    fn test_remote_mode_forces_full_redraw() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        rig.inbox.raise(RemoteCommand::CycleMode);
        let report = rig.step(100);
        assert_eq!(report.redraw, Ok(Redraw::Full(Screen::Splash)));
        assert_eq!(rig.app.mode(), Mode::Extended);
        assert_eq!(rig.app.status().next_mode_label, "1/1");
    }

    #[test]
    fn test_pause_freezes_countdown() {
        let mut rig = Rig::new(Mode::Quick);
        rig.inbox.raise(RemoteCommand::Start);
        rig.step(0);
        rig.inbox.raise(RemoteCommand::Pause);
        rig.step(10_000);
        assert_eq!(rig.app.remaining_ms(40_000), 50_000);

        rig.inbox.raise(RemoteCommand::Resume);
        rig.step(40_000);
        assert_eq!(rig.app.remaining_ms(45_000), 45_000);
        assert_eq!(rig.app.status().phase, StatusPhase::Working);
    }

    #[test]
    fn test_rotation_invalidates_regions() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        assert!(rig.app.renderer().regions().is_valid(Control::Gear));

        rig.accel.set(AccelSample::new(900, 0, 0));
        let report = rig.step(2_000);
        assert_eq!(report.rotation, RotationPoll::Changed(Orientation::Landscape));
        assert_eq!(rig.surface.orientation(), Orientation::Landscape);
        assert_eq!(rig.app.orientation(), Orientation::Landscape);
        assert_eq!(rig.app.renderer().shown(), Some(Screen::Splash));

        // Gear moved to the right edge
        let gear = rig.app.renderer().regions().get(Control::Gear).unwrap();
        assert_eq!(gear.bounds.center(), Point::new(280, 86));
    }

    #[test]
    fn test_rotation_during_press_drops_old_point() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        rig.touch.press(display_to_native(Point::new(86, 280), Orientation::Portrait, NATIVE_SIZE));
        rig.step(1_900);
        rig.touch.point = None;
        rig.accel.set(AccelSample::new(900, 0, 0));
        rig.step(2_000);
        rig.touch.release();
        rig.step(2_010);
        assert_eq!(
            rig.step(2_300).dispatch,
            Dispatch::Ignored(IgnoreReason::Dropped(DropReason::NoCoordinate))
        );
        assert_eq!(rig.app.view(), ViewMode::Home);
    }

    #[test]
    fn test_touch_read_failure_is_harmless() {
        let mut rig = Rig::new(Mode::Classic);
        rig.step(0);
        rig.touch.fail = true;
        assert_eq!(
            rig.tap(Point::new(86, 280), 100),
            Dispatch::Ignored(IgnoreReason::Dropped(DropReason::NoCoordinate))
        );
    }

    #[test]
    fn test_surface_failure_recovers() {
        let mut rig = Rig::new(Mode::Classic);
        rig.surface.fail_after(0);
        assert!(rig.step(0).redraw.is_err());
        rig.surface.recover();
        assert_eq!(rig.step(10).redraw, Ok(Redraw::Full(Screen::Splash)));
    }
}
