//! "Start new game" settings dialog

use egui::{Context, RichText};

use crate::config::{GameConfig, MAX_FIELD_SIZE, MIN_FIELD_SIZE};
use crate::GameMode;

use super::theme::TEXT_MUTED;

/// Modal-style window collecting mode, field size and win length
pub struct SettingsWindow {
    pub open: bool,
    draft: GameConfig,
}

impl SettingsWindow {
    pub fn new(initial: GameConfig) -> Self {
        let mut draft = initial;
        fit_to_sliders(&mut draft);
        Self { open: false, draft }
    }

    /// Show the window if open. Returns the settings when "Start" is pressed.
    pub fn show(&mut self, ctx: &Context) -> Option<GameConfig> {
        if !self.open {
            return None;
        }

        let mut open = self.open;
        let mut start = false;

        egui::Window::new("New game")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new("Mode").size(11.0).color(TEXT_MUTED));
                ui.radio_value(&mut self.draft.mode, GameMode::HumanVsComputer, "Human vs Computer");
                ui.radio_value(&mut self.draft.mode, GameMode::HumanVsHuman, "Human vs Human");
                ui.add_space(8.0);

                ui.label(RichText::new("Field size").size(11.0).color(TEXT_MUTED));
                ui.add(egui::Slider::new(&mut self.draft.width, MIN_FIELD_SIZE..=MAX_FIELD_SIZE).text("width"));
                ui.add(egui::Slider::new(&mut self.draft.height, MIN_FIELD_SIZE..=MAX_FIELD_SIZE).text("height"));
                ui.add_space(8.0);

                fit_to_sliders(&mut self.draft);
                let longest = self.draft.width.max(self.draft.height);
                ui.label(RichText::new("Win length").size(11.0).color(TEXT_MUTED));
                ui.add(egui::Slider::new(&mut self.draft.win_length, MIN_FIELD_SIZE..=longest).text("in a row"));
                ui.add_space(12.0);

                if ui.button("Start").clicked() {
                    start = true;
                }
            });

        self.open = open && !start;
        start.then(|| self.draft.clone())
    }
}

/// Pull the draft into the ranges the sliders offer.
///
/// The win length is capped by the longest side of the board.
fn fit_to_sliders(draft: &mut GameConfig) {
    draft.width = draft.width.clamp(MIN_FIELD_SIZE, MAX_FIELD_SIZE);
    draft.height = draft.height.clamp(MIN_FIELD_SIZE, MAX_FIELD_SIZE);
    let longest = draft.width.max(draft.height);
    draft.win_length = draft.win_length.clamp(MIN_FIELD_SIZE, longest);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_board_is_raised_to_slider_minimum() {
        let mut draft = GameConfig {
            width: 2,
            height: 1,
            win_length: 2,
            ..GameConfig::default()
        };
        fit_to_sliders(&mut draft);
        assert_eq!((draft.width, draft.height, draft.win_length), (3, 3, 3));
    }

    #[test]
    fn test_win_length_capped_by_longest_side() {
        let mut draft = GameConfig {
            width: 4,
            height: 3,
            win_length: 9,
            ..GameConfig::default()
        };
        fit_to_sliders(&mut draft);
        assert_eq!(draft.win_length, 4);
    }

    #[test]
    fn test_dialog_accepts_config_below_slider_range() {
        let config = GameConfig {
            width: 1,
            height: 2,
            win_length: 1,
            ..GameConfig::default()
        };
        let window = SettingsWindow::new(config);
        assert!(!window.open);
        assert_eq!((window.draft.width, window.draft.height, window.draft.win_length), (3, 3, 3));
    }
}
