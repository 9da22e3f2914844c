//! Main application window

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::error;

use crate::{Game, GameConfig, GameMode, Mark, MoveReason, Outcome};
use super::board_view::{BoardFrame, BoardView};
use super::settings::SettingsWindow;
use super::theme::*;

/// Main application
pub struct MnkApp {
    game: Game,
    board_view: BoardView,
    settings: SettingsWindow,
    show_debug: bool,
}

impl MnkApp {
    /// Create the app around an already configured game
    pub fn new(_cc: &eframe::CreationContext<'_>, game: Game, config: GameConfig) -> Self {
        Self {
            game,
            board_view: BoardView::default(),
            settings: SettingsWindow::new(config),
            show_debug: true,
        }
    }

    fn start_new_game(&mut self, config: &GameConfig) {
        if let Err(err) = self
            .game
            .start_new_game(config.mode, config.width, config.height, config.win_length)
        {
            error!(%err, "could not start game");
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Start new game...").clicked() {
                        self.settings.open = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let (Some(mode), Some(board)) = (self.game.mode(), self.game.board()) {
                        ui.label(format!(
                            "{} - {}x{}, {} in a row",
                            mode_label(mode),
                            board.width(),
                            board.height(),
                            board.win_length()
                        ));
                    }
                });
            });
        });
    }

    /// Bottom bar with the two main buttons
    fn render_bottom_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("buttons").show(ctx, |ui| {
            ui.columns(2, |cols| {
                if cols[0].button("Start new game").clicked() {
                    self.settings.open = true;
                }
                if cols[1].button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("TIC TAC TOE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_engine_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (Some(mode), Some(turn)) = (self.game.mode(), self.game.current_turn()) else {
                ui.label(RichText::new("No game running").size(14.0).color(TEXT_SECONDARY));
                return;
            };

            let (text, color) = match self.game.outcome() {
                Outcome::InProgress => (format!("{} to move", player_label(mode, turn)), STATUS_ACTIVE),
                outcome => (outcome_message(mode, outcome).to_string(), STATUS_WARNING),
            };
            ui.label(RichText::new(text).size(16.0).strong().color(color));
            ui.label(
                RichText::new(format!("Moves played: {}", self.game.board().map_or(0, |b| b.mark_count())))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_engine_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.game.last_computer_move() {
                Some(result) => {
                    let reason = match result.reason {
                        MoveReason::Block => "Blocked a win",
                        MoveReason::Win => "Completed a run",
                        MoveReason::Random => "Random move",
                    };
                    ui.label(RichText::new(reason).size(12.0).strong().color(STATUS_ACTIVE));
                    ui.label(
                        RichText::new(format!("row {}, col {}", result.pos.row + 1, result.pos.col + 1))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("No move yet").size(11.0).color(TEXT_MUTED));
                }
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let Some(session) = self.game.session() else {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Press \"Start new game\" to play").size(18.0).color(TEXT_SECONDARY));
                });
                return;
            };

            let frame = BoardFrame {
                board: session.board(),
                current_turn: session.current_turn(),
                last_move: session.last_move(),
                winning_line: session.winning_line(),
                outcome: session.outcome(),
                banner: session
                    .outcome()
                    .is_over()
                    .then(|| outcome_message(session.mode(), session.outcome()).to_string()),
            };

            if let Some((row, col)) = self.board_view.show(ui, &frame) {
                self.game.submit_human_move(row, col);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle engine panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.settings.open = true;
            }
        });
    }
}

fn mode_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::HumanVsComputer => "Human vs Computer",
        GameMode::HumanVsHuman => "Human vs Human",
    }
}

fn player_label(mode: GameMode, mark: Mark) -> &'static str {
    match (mode, mark) {
        (GameMode::HumanVsComputer, Mark::PlayerA) => "Player",
        (GameMode::HumanVsComputer, _) => "Computer",
        (GameMode::HumanVsHuman, Mark::PlayerA) => "Player X",
        (GameMode::HumanVsHuman, _) => "Player O",
    }
}

fn outcome_message(mode: GameMode, outcome: Outcome) -> &'static str {
    match (outcome.winner(), outcome) {
        (Some(mark), _) => match (mode, mark) {
            (GameMode::HumanVsComputer, Mark::PlayerA) => "Player wins!",
            (GameMode::HumanVsComputer, _) => "Computer wins!",
            (GameMode::HumanVsHuman, Mark::PlayerA) => "Player X wins!",
            (GameMode::HumanVsHuman, _) => "Player O wins!",
        },
        (None, Outcome::Draw) => "Draw!",
        (None, _) => "",
    }
}

impl eframe::App for MnkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if let Some(config) = self.settings.show(ctx) {
            self.start_new_game(&config);
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_bottom_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
