//! Screen rendering
//!
//! There is no frame buffer. The [`Renderer`] remembers which screen is
//! on the panel and, for the countdown, what every dynamic field looks
//! like, so each tick only touches the pixels that changed. Every full
//! draw produces the [`RegionSet`] for the controls it painted.

pub mod grid;
pub mod home;
pub mod icons;
pub mod preview;
pub mod ring;
pub mod text;
pub mod timer;

pub use grid::{draw_grid, redraw_cell, GridLayout};
pub use home::{draw_splash, SplashLayout};
pub use preview::{draw_preview, PreviewLayout};
pub use ring::{RingGeometry, RingRenderer, RingUpdate};
pub use text::{format_remaining, TimeText};
pub use timer::{TimerLayout, TimerScreen, TimerUpdate, TimerView};

use crate::config::{Color, LayoutConfig, TimingConfig};
use crate::geometry::Point;
use crate::regions::RegionSet;
use crate::state::{ColorEdit, TimerState, ViewMode};
use crate::traits::{DrawSurface, SurfaceError};

/// Which full-screen picture is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Splash,
    Timer,
    Grid,
    Preview,
}

impl Screen {
    /// Screen for a view and timer state
    pub fn for_view(view: ViewMode, timer: TimerState) -> Self {
        match view {
            ViewMode::Home if timer.is_active() => Screen::Timer,
            ViewMode::Home => Screen::Splash,
            ViewMode::Grid => Screen::Grid,
            ViewMode::Preview => Screen::Preview,
        }
    }
}

/// Everything the renderer needs to know about the application
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub view: ViewMode,
    pub timer: TimerView,
    /// Splash color
    pub work_color: Color,
    pub edit: &'a ColorEdit,
}

impl Scene<'_> {
    pub fn screen(&self) -> Screen {
        Screen::for_view(self.view, self.timer.state)
    }
}

/// What a render call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    None,
    /// Whole screen repainted, regions replaced
    Full(Screen),
    /// Countdown fields updated in place
    Partial,
}

/// Incremental renderer
#[derive(Debug, Clone)]
pub struct Renderer {
    layout: LayoutConfig,
    cadence_ms: u32,
    marker_ms: u32,
    markers_enabled: bool,
    shown: Option<Screen>,
    full_pending: bool,
    regions: RegionSet,
    timer: TimerScreen,
    /// When the newest tap indicator was drawn
    marker_since: Option<u32>,
}

impl Renderer {
    pub fn new(layout: LayoutConfig, timing: &TimingConfig) -> Self {
        Self {
            layout,
            cadence_ms: timing.display_cadence_ms,
            marker_ms: timing.tap_indicator_ms,
            markers_enabled: timing.tap_indicator,
            shown: None,
            full_pending: true,
            regions: RegionSet::new(),
            timer: TimerScreen::new(),
            marker_since: None,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Regions of the screen on the panel
    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// Screen currently on the panel, if it was drawn completely
    pub fn shown(&self) -> Option<Screen> {
        self.shown
    }

    /// Repaint everything on the next render
    ///
    /// Regions are invalidated immediately so nothing on the old picture
    /// can be hit before the new one is drawn.
    pub fn invalidate(&mut self) {
        self.full_pending = true;
        self.regions.invalidate_all();
        self.timer.reset();
        self.marker_since = None;
    }

    /// Bring the panel up to date with `scene`
    pub fn render<S: DrawSurface>(
        &mut self,
        s: &mut S,
        scene: &Scene<'_>,
        now_ms: u32,
    ) -> Result<Redraw, SurfaceError> {
        let screen = scene.screen();
        if self.marker_expired(now_ms) {
            self.full_pending = true;
        }
        let result = if self.full_pending || self.shown != Some(screen) {
            self.draw_full(s, scene, screen, now_ms).map(|_| Redraw::Full(screen))
        } else if screen == Screen::Timer {
            self.timer
                .update(s, &self.layout, &scene.timer, now_ms, self.cadence_ms)
                .map(|u| if u.drew_anything() { Redraw::Partial } else { Redraw::None })
        } else {
            Ok(Redraw::None)
        };

        if result.is_err() {
            self.invalidate();
            self.shown = None;
        }
        result
    }

    fn draw_full<S: DrawSurface>(
        &mut self,
        s: &mut S,
        scene: &Scene<'_>,
        screen: Screen,
        now_ms: u32,
    ) -> Result<(), SurfaceError> {
        self.regions.invalidate_all();
        self.shown = None;
        self.marker_since = None;

        let regions = match screen {
            Screen::Splash => draw_splash(s, &self.layout, scene.work_color)?,
            Screen::Timer => self.timer.draw(s, &self.layout, &scene.timer, now_ms)?,
            Screen::Grid => draw_grid(s, &self.layout, scene.edit.highlight())?,
            Screen::Preview => draw_preview(s, &self.layout, scene.edit)?,
        };

        self.regions = regions;
        self.shown = Some(screen);
        self.full_pending = false;
        Ok(())
    }

    /// Move the grid highlight from `previous` to `selected`
    ///
    /// Only the two cells are repainted. Does nothing unless the grid is
    /// on the panel.
    pub fn select_cell<S: DrawSurface>(
        &mut self,
        s: &mut S,
        previous: Option<u8>,
        selected: u8,
    ) -> Result<(), SurfaceError> {
        if self.shown != Some(Screen::Grid) || self.full_pending {
            return Ok(());
        }
        let result = match previous {
            Some(prev) if prev != selected => redraw_cell(s, &self.layout, prev, false),
            _ => Ok(()),
        }
        .and_then(|_| redraw_cell(s, &self.layout, selected, true));

        if result.is_err() {
            self.invalidate();
        }
        result
    }

    /// Draw the tap indicator at `at`, if enabled
    ///
    /// Dots are not erased one by one: once the newest dot is older than
    /// the indicator time the next render repaints the whole screen, which
    /// restores whatever the dots covered.
    pub fn mark_tap<S: DrawSurface>(
        &mut self,
        s: &mut S,
        at: Point,
        now_ms: u32,
    ) -> Result<(), SurfaceError> {
        if !self.markers_enabled {
            return Ok(());
        }
        s.fill_circle(at, self.layout.tap_indicator_radius, Color::WHITE)?;
        self.marker_since = Some(now_ms);
        Ok(())
    }

    fn marker_expired(&self, now_ms: u32) -> bool {
        self.marker_since
            .is_some_and(|t| now_ms.wrapping_sub(t) >= self.marker_ms)
    }
}
