use tictactoe_engine::tictactoe::{Mark, TicTacToeGameState, check_win_with_line};

const BOARD_SIZE: usize = 3;

/// Painter-drawn 3x3 board. Returns the clicked cell when input is
/// accepted; highlights the winning line once the game is over.
pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_STROKE_WIDTH: f32 = 4.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = (available_width / BOARD_SIZE as f32)
            .min(available_height / BOARD_SIZE as f32);
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        game: &TicTacToeGameState,
        interactive: bool,
    ) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );

            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (cell, &mark) in game.board.iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell, cell_size);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        let mut clicked_cell = None;

        if interactive {
            if let Some(hover_pos) = response.hover_pos() {
                let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
                let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

                if col < BOARD_SIZE && row < BOARD_SIZE {
                    let cell = row * BOARD_SIZE + col;
                    if game.board[cell] == Mark::Empty {
                        painter.rect_filled(
                            Self::cell_rect(rect, cell, cell_size),
                            0.0,
                            egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                        );
                        self.last_hover = Some(cell);
                    } else {
                        self.last_hover = None;
                    }
                } else {
                    self.last_hover = None;
                }
            } else {
                self.last_hover = None;
            }

            if response.clicked() {
                clicked_cell = self.last_hover;
            }
        }

        if let Some((_, line)) = check_win_with_line(&game.board) {
            let start = Self::cell_rect(rect, line[0], cell_size).center();
            let end = Self::cell_rect(rect, line[2], cell_size).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        clicked_cell
    }

    fn cell_rect(board_rect: egui::Rect, cell: usize, cell_size: f32) -> egui::Rect {
        let col = cell % BOARD_SIZE;
        let row = cell / BOARD_SIZE;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(
            Self::MARK_STROKE_WIDTH,
            egui::Color32::from_rgb(220, 50, 50),
        );

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(
            Self::MARK_STROKE_WIDTH,
            egui::Color32::from_rgb(50, 50, 220),
        );

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
