//! Countdown screen with incremental updates
//!
//! The first draw paints everything and records what is on screen. Later
//! updates compare against that record and repaint only the ring delta,
//! the time text, the status button or the mode button.

use crate::config::{Color, LayoutConfig};
use crate::geometry::{Point, Rect, Size};
use crate::regions::{Control, RegionSet};
use crate::state::{Mode, Progress, TimerState};
use crate::traits::{DrawSurface, SurfaceError, SurfaceExt};

use super::icons::{draw_pause, draw_play};
use super::ring::{RingGeometry, RingRenderer, RingUpdate};
use super::text::{format_remaining, TimeText};

/// Text scale for "MM:SS"
const TIME_SCALE: u8 = 3;
/// Text scale for "MM"
const MINUTES_SCALE: u8 = 5;
/// Text scale of the mode button label
const MODE_SCALE: u8 = 3;
/// Distance of the mode button top from the screen edge (portrait)
const MODE_TOP: i32 = 24;
/// Distance of the side buttons' centers from the screen edge (landscape)
const SIDE_INSET: i32 = 35;
/// Distance of the status button center from the bottom (portrait)
const BOTTOM_INSET: i32 = 30;

/// What the countdown screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerView {
    pub state: TimerState,
    pub color: Color,
    pub mode: Mode,
    pub progress: Progress,
    pub remaining_ms: u32,
    pub minutes_only: bool,
}

/// Countdown screen geometry for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerLayout {
    pub ring: RingGeometry,
    /// Status button border
    pub status: Rect,
    /// Mode button border
    pub mode: Rect,
    /// Area cleared before the time text is redrawn
    pub time_area: Rect,
    pub icon_size: i32,
}

impl TimerLayout {
    pub fn compute(size: Size, landscape: bool, cfg: &LayoutConfig) -> Self {
        let center = size.center();
        let (bw, bh) = cfg.timer_button_size();
        let pad = cfg.button_padding;

        let (status_center, mode_center) = if landscape {
            (
                Point::new(size.width - SIDE_INSET, center.y),
                Point::new(SIDE_INSET, center.y),
            )
        } else {
            (
                Point::new(center.x, size.height - BOTTOM_INSET),
                Point::new(center.x, MODE_TOP + bh / 2 + pad),
            )
        };

        Self {
            ring: RingGeometry {
                center,
                radius: cfg.ring_radius,
                thickness: cfg.ring_thickness,
                segments: cfg.ring_segments,
            },
            status: Rect::centered(status_center, bw, bh).inflate(pad),
            mode: Rect::centered(mode_center, bw, bh).inflate(pad),
            time_area: Rect::centered(center, cfg.time_area_width, cfg.time_area_height),
            icon_size: cfg.icon_size,
        }
    }
}

/// What an incremental update repainted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerUpdate {
    pub ring: RingUpdate,
    pub text: bool,
    pub status: bool,
    pub mode: bool,
}

impl TimerUpdate {
    pub fn drew_anything(&self) -> bool {
        self.ring != RingUpdate::Unchanged || self.text || self.status || self.mode
    }
}

/// Last drawn values of the dynamic fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Shadow {
    text: Option<TimeText>,
    minutes_only: bool,
    state: Option<TimerState>,
    mode: Option<Mode>,
    color: Option<Color>,
    /// When the text was last recomputed
    text_at: Option<u32>,
}

/// Countdown screen renderer
#[derive(Debug, Clone, Default)]
pub struct TimerScreen {
    ring: RingRenderer,
    shadow: Shadow,
}

impl TimerScreen {
    pub const fn new() -> Self {
        Self {
            ring: RingRenderer::new(),
            shadow: Shadow {
                text: None,
                minutes_only: false,
                state: None,
                mode: None,
                color: None,
                text_at: None,
            },
        }
    }

    /// Forget everything on screen
    pub fn reset(&mut self) {
        self.shadow = Shadow::default();
        self.ring.force_redraw();
    }

    /// Paint the whole screen and return its regions
    pub fn draw<S: DrawSurface>(
        &mut self,
        s: &mut S,
        cfg: &LayoutConfig,
        view: &TimerView,
        now_ms: u32,
    ) -> Result<RegionSet, SurfaceError> {
        self.reset();
        let layout = TimerLayout::compute(s.size(), s.orientation().is_landscape(), cfg);

        s.fill_screen(Color::BLACK)?;
        self.ring.update(s, &layout.ring, view.progress, view.color)?;
        self.draw_text(s, &layout, view, now_ms, false)?;
        self.draw_status(s, &layout, view, false)?;
        self.draw_mode(s, &layout, view, false)?;
        self.shadow.color = Some(view.color);

        let mut regions = RegionSet::new();
        regions.set(Control::StatusButton, layout.status);
        regions.set(Control::ModeButton, layout.mode);
        regions.set_circle(Control::Ring, layout.ring.center, cfg.ring_radius);
        Ok(regions)
    }

    /// Repaint what changed since the last call
    ///
    /// The time text is recomputed at most once per `cadence_ms`, unless
    /// its format, the mode or the color changed.
    pub fn update<S: DrawSurface>(
        &mut self,
        s: &mut S,
        cfg: &LayoutConfig,
        view: &TimerView,
        now_ms: u32,
        cadence_ms: u32,
    ) -> Result<TimerUpdate, SurfaceError> {
        let layout = TimerLayout::compute(s.size(), s.orientation().is_landscape(), cfg);
        let recolor = self.shadow.color != Some(view.color);

        let ring = self.ring.update(s, &layout.ring, view.progress, view.color)?;

        let mode = recolor || self.shadow.mode != Some(view.mode);
        let format = self.shadow.minutes_only != view.minutes_only;
        let due = recolor
            || format
            || mode
            || self
                .shadow
                .text_at
                .map_or(true, |t| now_ms.wrapping_sub(t) >= cadence_ms);

        let text = due && self.draw_text(s, &layout, view, now_ms, recolor || format)?;

        let status = recolor || self.shadow.state != Some(view.state);
        if status {
            self.draw_status(s, &layout, view, true)?;
        }
        if mode {
            self.draw_mode(s, &layout, view, true)?;
        }
        self.shadow.color = Some(view.color);

        Ok(TimerUpdate {
            ring,
            text,
            status,
            mode,
        })
    }

    /// Recompute the time text and draw it if it changed
    fn draw_text<S: DrawSurface>(
        &mut self,
        s: &mut S,
        layout: &TimerLayout,
        view: &TimerView,
        now_ms: u32,
        force: bool,
    ) -> Result<bool, SurfaceError> {
        let text = format_remaining(view.remaining_ms, view.minutes_only);
        self.shadow.text_at = Some(now_ms);
        if !force && self.shadow.text.as_ref() == Some(&text) {
            return Ok(false);
        }

        self.shadow.text = None;
        s.fill_rect(layout.time_area, Color::BLACK)?;
        let scale = if view.minutes_only { MINUTES_SCALE } else { TIME_SCALE };
        s.draw_text_centered(&text, layout.ring.center, scale, view.color)?;

        self.shadow.text = Some(text);
        self.shadow.minutes_only = view.minutes_only;
        Ok(true)
    }

    fn draw_status<S: DrawSurface>(
        &mut self,
        s: &mut S,
        layout: &TimerLayout,
        view: &TimerView,
        erase: bool,
    ) -> Result<(), SurfaceError> {
        self.shadow.state = None;
        if erase {
            s.fill_rect(layout.status, Color::BLACK)?;
        }
        s.draw_rect(layout.status, view.color)?;
        // Pause while running, play otherwise
        let center = layout.status.center();
        match view.state {
            TimerState::Running => draw_pause(s, center, layout.icon_size, view.color)?,
            _ => draw_play(s, center, layout.icon_size, view.color)?,
        }
        self.shadow.state = Some(view.state);
        Ok(())
    }

    fn draw_mode<S: DrawSurface>(
        &mut self,
        s: &mut S,
        layout: &TimerLayout,
        view: &TimerView,
        erase: bool,
    ) -> Result<(), SurfaceError> {
        self.shadow.mode = None;
        if erase {
            s.fill_rect(layout.mode, Color::BLACK)?;
        }
        s.draw_rect(layout.mode, view.color)?;
        s.draw_text_centered("M", layout.mode.center(), MODE_SCALE, view.color)?;
        self.shadow.mode = Some(view.mode);
        Ok(())
    }
}
