//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, Key, RichText, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::menu::{MainMenu, MenuItem, Screen};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    screen: Screen,
    menu: MainMenu,
    state: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, default_mode: GameMode) -> Self {
        Self {
            screen: Screen::MainMenu,
            menu: MainMenu::new(default_mode),
            state: GameState::new(default_mode),
            board_view: BoardView::default(),
        }
    }

    /// Keyboard: Up/Down move the menu cursor, Enter confirms or starts a
    /// new round, Backspace goes back to the main menu.
    fn handle_input(&mut self, ctx: &Context) {
        let (up, down, enter, back) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowUp),
                i.key_pressed(Key::ArrowDown),
                i.key_pressed(Key::Enter),
                i.key_pressed(Key::Backspace),
            )
        });

        match self.screen {
            Screen::MainMenu => {
                if up {
                    self.menu.up();
                }
                if down {
                    self.menu.down();
                }
                if enter {
                    self.confirm_menu();
                }
            }
            Screen::Credits => {
                if back || enter {
                    self.screen = Screen::MainMenu;
                }
            }
            Screen::Playing => {
                if back {
                    self.screen = Screen::MainMenu;
                } else if enter && self.state.is_over() {
                    self.state.reset();
                }
            }
        }
    }

    fn confirm_menu(&mut self) {
        if let MenuItem::Play(mode) = self.menu.selected() {
            self.state = GameState::new(mode);
        }
        self.screen = self.menu.confirm();
        debug!(screen = ?self.screen, "menu confirmed");
    }

    fn render_main_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(RichText::new("Main Menu").size(28.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(24.0);

                    let selected = self.menu.selected();
                    for item in MenuItem::ALL {
                        let is_selected = item == selected;
                        let text = if is_selected {
                            format!("* {} ", item.label())
                        } else {
                            item.label().to_string()
                        };
                        let color = if is_selected { MENU_CURSOR } else { TEXT_PRIMARY };
                        let response = ui.add(
                            egui::Label::new(RichText::new(text).size(18.0).color(color))
                                .sense(egui::Sense::click()),
                        );
                        if response.clicked() {
                            self.menu.select(item);
                            self.confirm_menu();
                        }
                        ui.add_space(8.0);
                    }

                    ui.add_space(24.0);
                    ui.label(
                        RichText::new("Up/Down to choose, Enter to start")
                            .size(12.0)
                            .color(TEXT_MUTED),
                    );
                });
            });
    }

    fn render_credits(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    ui.label(RichText::new("Credits").size(28.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(16.0);
                    ui.label(RichText::new("Tic Tac Toe").size(18.0).color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new("Minimax opponent in Rust")
                            .size(14.0)
                            .color(TEXT_MUTED),
                    );
                    ui.add_space(24.0);
                    ui.label(RichText::new("Backspace to go back").size(12.0).color(TEXT_MUTED));
                });
            });
    }

    /// Status bar under the board
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(self.state.status_text())
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                    let hint = if self.state.is_over() {
                        "Enter for a new round, Backspace for the menu".to_string()
                    } else if let Some(result) = self.state.last_ai_result() {
                        format!(
                            "{}: {:?}, score {}, {} nodes, {}ms",
                            self.state.mode, result.search_type, result.score, result.nodes, result.time_ms
                        )
                    } else {
                        self.state.mode.to_string()
                    };
                    ui.label(RichText::new(hint).size(10.0).color(TEXT_MUTED));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.current_turn,
                    self.state.winning_line,
                    self.state.is_human_turn(),
                );

                if let Some(pos) = clicked {
                    if let Err(e) = self.state.try_place(pos) {
                        self.state.message = Some(e.to_string());
                    }
                }
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        match self.screen {
            Screen::MainMenu => self.render_main_menu(ctx),
            Screen::Credits => self.render_credits(ctx),
            Screen::Playing => {
                // Computer moves complete within this frame
                if self.state.play_ai_turn().is_some() {
                    ctx.request_repaint();
                }
                self.render_status_bar(ctx);
                self.render_board(ctx);
            }
        }
    }
}
