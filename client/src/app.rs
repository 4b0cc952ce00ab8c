use std::time::{Duration, Instant};

use tictactoe_engine::SessionRng;
use tictactoe_engine::config::ConfigManager;
use tictactoe_engine::tictactoe::{
    BotDifficulty, GameMode, GameStatus, Mark, TicTacToeGameState, calculate_move,
};

use crate::board_ui::BoardUi;
use crate::config::{Config, GameConfig};

pub struct TicTacToeApp {
    game: TicTacToeGameState,
    mode: GameMode,
    difficulty: BotDifficulty,
    human_mark: Mark,
    ai_move_delay: Duration,
    ai_move_due: Option<Instant>,
    end_announced: bool,
    end_popup_open: bool,
    board_ui: BoardUi,
    rng: SessionRng,
    config_manager: ConfigManager<Config>,
}

impl TicTacToeApp {
    pub fn new(config_manager: ConfigManager<Config>, rng: SessionRng) -> Self {
        let config = match config_manager.get_config() {
            Ok(config) => config,
            Err(e) => {
                tictactoe_engine::log!("Failed to load config, using defaults: {}", e);
                Config::default()
            }
        };

        let mut app = Self {
            game: TicTacToeGameState::new(),
            mode: config.game.mode,
            difficulty: config.game.difficulty,
            human_mark: config.game.human_mark,
            ai_move_delay: Duration::from_millis(config.game.ai_move_delay_ms as u64),
            ai_move_due: None,
            end_announced: false,
            end_popup_open: false,
            board_ui: BoardUi::new(),
            rng,
            config_manager,
        };
        app.new_game();
        app
    }

    fn bot_mark(&self) -> Mark {
        match self.human_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        }
    }

    fn new_game(&mut self) {
        self.game = TicTacToeGameState::new();
        self.ai_move_due = None;
        self.end_announced = false;
        self.end_popup_open = false;

        // X opens; when the human chose O the computer moves first.
        if self.mode == GameMode::VsComputer && self.human_mark == Mark::O {
            self.schedule_ai_move();
        }
    }

    fn schedule_ai_move(&mut self) {
        self.ai_move_due = Some(Instant::now() + self.ai_move_delay);
    }

    fn after_move(&mut self) {
        if self.game.status.is_terminal() {
            self.announce_game_over();
        } else if self.mode == GameMode::VsComputer && self.game.current_mark == self.bot_mark() {
            self.schedule_ai_move();
        }
    }

    fn announce_game_over(&mut self) {
        if self.end_announced {
            return;
        }
        self.end_announced = true;
        self.end_popup_open = true;

        match self.game.status.winner() {
            Some(mark) => tictactoe_engine::log!("Game over: {} wins", mark),
            None => tictactoe_engine::log!("Game over: draw"),
        }
    }

    fn human_input_allowed(&self) -> bool {
        if self.game.status != GameStatus::InProgress || self.ai_move_due.is_some() {
            return false;
        }
        match self.mode {
            GameMode::TwoPlayer => true,
            GameMode::VsComputer => self.game.current_mark == self.human_mark,
        }
    }

    fn handle_cell_click(&mut self, cell: usize) {
        if !self.human_input_allowed() {
            return;
        }
        if self.game.place_mark(cell).is_ok() {
            self.after_move();
        }
    }

    /// Applies the pending bot move once its delay elapsed. The delay
    /// is pure pacing; input stays locked out until the move lands.
    fn tick_ai(&mut self, ctx: &egui::Context) {
        let Some(due) = self.ai_move_due else {
            return;
        };

        let now = Instant::now();
        if now < due {
            ctx.request_repaint_after(due - now);
            return;
        }

        self.ai_move_due = None;

        let bot_mark = self.bot_mark();
        if self.game.status != GameStatus::InProgress || self.game.current_mark != bot_mark {
            return;
        }

        if let Some(cell) = calculate_move(self.difficulty, &self.game, bot_mark, &mut self.rng) {
            if self.game.place_mark(cell).is_ok() {
                self.after_move();
            }
        }
    }

    fn save_config(&self) {
        let config = Config {
            game: GameConfig {
                mode: self.mode,
                difficulty: self.difficulty,
                human_mark: self.human_mark,
                ai_move_delay_ms: self.ai_move_delay.as_millis() as u32,
            },
        };
        if let Err(e) = self.config_manager.set_config(&config) {
            tictactoe_engine::log!("Failed to save config: {}", e);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let previous = (self.mode, self.difficulty, self.human_mark);

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Mode")
                .selected_text(match self.mode {
                    GameMode::TwoPlayer => "Two Players",
                    GameMode::VsComputer => "Vs Computer",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.mode, GameMode::TwoPlayer, "Two Players");
                    ui.selectable_value(&mut self.mode, GameMode::VsComputer, "Vs Computer");
                });

            ui.add_enabled_ui(self.mode == GameMode::VsComputer, |ui| {
                egui::ComboBox::from_label("Difficulty")
                    .selected_text(match self.difficulty {
                        BotDifficulty::Easy => "Easy",
                        BotDifficulty::Medium => "Medium",
                        BotDifficulty::Hard => "Hard",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.difficulty, BotDifficulty::Easy, "Easy");
                        ui.selectable_value(&mut self.difficulty, BotDifficulty::Medium, "Medium");
                        ui.selectable_value(&mut self.difficulty, BotDifficulty::Hard, "Hard");
                    });

                egui::ComboBox::from_label("You play")
                    .selected_text(self.human_mark.to_string())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.human_mark, Mark::X, "X");
                        ui.selectable_value(&mut self.human_mark, Mark::O, "O");
                    });
            });

            if ui.button("New Game").clicked() {
                self.new_game();
            }
        });

        if (self.mode, self.difficulty, self.human_mark) != previous {
            self.save_config();
            self.new_game();
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        match self.game.status {
            GameStatus::InProgress => match self.mode {
                GameMode::TwoPlayer => {
                    ui.label(format!("Turn: {}", self.game.current_mark));
                }
                GameMode::VsComputer => {
                    if self.game.current_mark == self.human_mark {
                        ui.colored_label(
                            egui::Color32::GREEN,
                            format!("Your turn ({})", self.human_mark),
                        );
                    } else {
                        ui.label(format!("Computer's turn ({})", self.bot_mark()));
                    }
                }
            },
            GameStatus::Draw => {
                ui.label("Result: Draw");
            }
            _ => {
                if let Some(mark) = self.game.status.winner() {
                    ui.colored_label(egui::Color32::GREEN, format!("Winner: {}", mark));
                }
            }
        }
    }

    fn render_end_popup(&mut self, ctx: &egui::Context) {
        if !self.end_popup_open {
            return;
        }

        let message = match self.game.status.winner() {
            Some(mark) => format!("{} wins!", mark),
            None => "It's a draw!".to_string(),
        };

        egui::Window::new("Game Over")
            .open(&mut self.end_popup_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_ai(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_controls(ui);
            ui.separator();
            self.render_status(ui);
            ui.add_space(10.0);

            let interactive = self.human_input_allowed();
            if let Some(cell) = self.board_ui.render(ui, &self.game, interactive) {
                self.handle_cell_click(cell);
            }
        });

        self.render_end_popup(ctx);
    }
}
