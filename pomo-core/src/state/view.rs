//! Screen selection and the in-progress color edit

use crate::config::{palette_color, ColorSelection, Color, PALETTE_SIZE};

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewMode {
    /// Splash (Stopped) or countdown (Running/Paused)
    #[default]
    Home,
    /// Palette grid
    Grid,
    /// Work/rest color preview
    Preview,
}

/// Events that move between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewEvent {
    /// Gear tapped on the splash
    OpenPreview,
    /// A swatch tapped on the preview
    EditColor,
    /// Grid confirm with a highlighted cell
    ConfirmColor,
    /// Preview confirm
    ConfirmPreview,
    /// Grid or preview cancel
    Cancel,
    /// Timer started or stopped
    Reset,
}

impl ViewMode {
    /// Process an event and return the next screen
    pub fn transition(self, event: ViewEvent) -> Self {
        use ViewEvent::*;
        use ViewMode::*;

        match (self, event) {
            (Home, OpenPreview) => Preview,

            (Preview, EditColor) => Grid,
            (Preview, ConfirmPreview) => Home,
            (Preview, Cancel) => Home,

            (Grid, ConfirmColor) => Preview,
            (Grid, Cancel) => Home,

            (_, Reset) => Home,

            _ => self,
        }
    }
}

/// Which color the grid is choosing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditTarget {
    #[default]
    Work,
    Rest,
}

/// Transient state while the grid or preview is open
///
/// Nothing here is persisted until the preview is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorEdit {
    pub target: EditTarget,
    pub preview: ColorSelection,
    highlight: Option<u8>,
}

impl ColorEdit {
    /// Start editing from the saved colors
    pub fn begin(current: ColorSelection) -> Self {
        Self {
            target: EditTarget::Work,
            preview: current,
            highlight: None,
        }
    }

    /// Choose which color the grid edits
    ///
    /// Editing the rest color starts from "inverted work color".
    pub fn retarget(&mut self, target: EditTarget) {
        self.target = target;
        self.highlight = None;
        if target == EditTarget::Rest {
            self.preview.rest = Color(0);
        }
    }

    /// Highlighted palette index
    pub fn highlight(&self) -> Option<u8> {
        self.highlight
    }

    /// Highlight a palette cell; out-of-range indices are ignored
    pub fn select(&mut self, index: u8) -> bool {
        if (index as usize) < PALETTE_SIZE {
            self.highlight = Some(index);
            true
        } else {
            false
        }
    }

    /// Copy the highlighted color into the preview
    ///
    /// Returns `false` when nothing is highlighted.
    pub fn apply_highlight(&mut self) -> bool {
        let Some(color) = self.highlight.and_then(palette_color) else {
            return false;
        };
        match self.target {
            EditTarget::Work => self.preview.work = color,
            EditTarget::Rest => self.preview.rest = color,
        }
        true
    }

    /// Color shown in the rest swatch
    pub fn rest_swatch(&self) -> Color {
        self.preview.effective_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_flow() {
        let v = ViewMode::Home.transition(ViewEvent::OpenPreview);
        assert_eq!(v, ViewMode::Preview);
        let v = v.transition(ViewEvent::EditColor);
        assert_eq!(v, ViewMode::Grid);
        let v = v.transition(ViewEvent::ConfirmColor);
        assert_eq!(v, ViewMode::Preview);
        assert_eq!(v.transition(ViewEvent::ConfirmPreview), ViewMode::Home);
        assert_eq!(ViewMode::Grid.transition(ViewEvent::Cancel), ViewMode::Home);
    }

    #[test]
    fn test_invalid_view_events_ignored() {
        assert_eq!(ViewMode::Home.transition(ViewEvent::ConfirmColor), ViewMode::Home);
        assert_eq!(ViewMode::Grid.transition(ViewEvent::OpenPreview), ViewMode::Grid);
        assert_eq!(ViewMode::Home.transition(ViewEvent::EditColor), ViewMode::Home);
    }

    #[test]
    fn test_apply_requires_highlight() {
        let mut edit = ColorEdit::begin(ColorSelection::default());
        assert!(!edit.apply_highlight());

        assert!(edit.select(5));
        assert!(edit.apply_highlight());
        assert_eq!(edit.preview.work, palette_color(5).unwrap());
    }

    #[test]
    fn test_out_of_range_cell_ignored() {
        let mut edit = ColorEdit::begin(ColorSelection::default());
        edit.select(2);
        assert!(!edit.select(PALETTE_SIZE as u8));
        assert_eq!(edit.highlight(), Some(2));
    }

    #[test]
    fn test_rest_target_resets_to_inverted() {
        let saved = ColorSelection {
            work: Color::GOLD,
            rest: Color::CYAN,
        };
        let mut edit = ColorEdit::begin(saved);
        assert_eq!(edit.rest_swatch(), Color::CYAN);

        edit.retarget(EditTarget::Rest);
        assert_eq!(edit.rest_swatch(), Color::GOLD.inverted());

        edit.select(7);
        edit.apply_highlight();
        assert_eq!(edit.preview.rest, palette_color(7).unwrap());
        assert_eq!(edit.preview.work, Color::GOLD);
    }
}
