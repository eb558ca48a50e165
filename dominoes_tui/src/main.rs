use std::io::{self, stdout};

use dominoes::{layout, Game, Orientation, PlacedTile, SURFACE_HEIGHT, SURFACE_WIDTH};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut app = App::new();

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|frame| app.ui(frame))?;
        should_quit = handle_events(&mut app)?;
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

struct App {
    game: Game,
    rng: StdRng,
    status: String,
}

impl App {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(rand::random());
        let game = Game::new(&mut rng);
        let status = format!("New game, player {} starts", game.turn());
        Self { game, rng, status }
    }

    fn new_game(&mut self) {
        self.game = Game::new(&mut self.rng);
        self.status = format!("New game, player {} starts", self.game.turn());
    }

    /// One click of the auto-move control: pick a random legal move for the
    /// current player, or pass when there is none, then report what happened.
    fn auto_move(&mut self) {
        if let Some(outcome) = self.game.outcome() {
            self.status = outcome.to_string();
            return;
        }
        let player = self.game.turn();
        let moves = self.game.moves();
        let result = match moves[..].choose(&mut self.rng) {
            Some(&mv) => {
                let tile = self.game.hand(player)[mv.tile_idx];
                self.game
                    .play(mv.tile_idx, mv.side)
                    .map(|()| format!("Player {} played {} on the {}", player, tile, mv.side))
            }
            None => self
                .game
                .pass()
                .map(|()| format!("Player {} passed", player)),
        };
        self.status = match result {
            Ok(message) => match self.game.outcome() {
                Some(outcome) => outcome.to_string(),
                None => message,
            },
            Err(err) => err.to_string(),
        };
    }

    fn ui(&self, frame: &mut Frame) {
        let main_layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(3)],
        )
        .split(frame.size());
        frame.render_widget(
            SurfaceWidget {
                placed: layout(&self.game),
            },
            main_layout[0],
        );
        let status = Paragraph::new(format!(
            "{}\nspace: auto-move  n: new game  q: quit",
            self.status
        ))
        .block(Block::new().borders(Borders::TOP));
        frame.render_widget(status, main_layout[1]);
    }
}

/// Draws every positioned tile, scaling the abstract pixel surface down to
/// the terminal cell grid.
struct SurfaceWidget {
    placed: Vec<PlacedTile>,
}

impl Widget for SurfaceWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for p in &self.placed {
            let x = area.x as i32 + p.x * (area.width.saturating_sub(5) as i32) / SURFACE_WIDTH;
            let y = area.y as i32 + p.y * (area.height.saturating_sub(2) as i32) / SURFACE_HEIGHT;
            let (x, y) = (x as u16, y as u16);
            match p.orientation {
                // Inline tiles read horizontally
                Orientation::Left | Orientation::Right => {
                    if x + 5 <= area.right() && y < area.bottom() {
                        buf.set_string(x, y, p.tile.to_string(), Style::new());
                    }
                }
                // Upright tiles take two rows
                Orientation::Top | Orientation::Bottom => {
                    if x + 3 <= area.right() && y + 1 < area.bottom() {
                        buf.set_string(x, y, format!("[{}]", p.tile.first), Style::new());
                        buf.set_string(x, y + 1, format!("[{}]", p.tile.second), Style::new());
                    }
                }
            }
        }
    }
}

fn handle_events(app: &mut App) -> io::Result<bool> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') => return Ok(true),
                    KeyCode::Char(' ') | KeyCode::Char('m') => app.auto_move(),
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                }
            }
        }
    }
    Ok(false)
}
