//! Glue code tying the game session, view model, and terminal UI together.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::CliConfig;
use crate::input::{self, Command};
use crate::presentation::{
    terminal::{self, Tui},
    ui,
};
use pacman_core::GameSession;
use pacman_frontend_core::{ActivityLog, ScoreViewModel};

/// Arcade-style seed entries so the leaderboard is not empty on first draw.
const SEED_SCORES: [(&str, i64); 3] = [("AAA", 5150), ("MAX", 3200), ("PAC", 1500)];

/// Terminal client application.
///
/// Owns the game session and the view model; keyboard commands mutate the
/// session's score board, and only an explicit refresh pulls the mutations
/// into the view model's cached display strings.
pub struct CliApp {
    config: CliConfig,
    session: GameSession,
    view_model: ScoreViewModel,
    activity: ActivityLog,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Result<Self> {
        let mut session = GameSession::new("Pacman", "Arcade");
        for (name, value) in SEED_SCORES {
            session.scores_mut().set_score(name, value)?;
        }

        let view_model = ScoreViewModel::new(session.scores());

        let mut activity = ActivityLog::new(config.activity_capacity);
        activity.push(format!(
            "Welcome, {}. Eat pellets to score.",
            config.player_name
        ));

        Ok(Self {
            config,
            session,
            view_model,
            activity,
        })
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!("CLI client starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = self.event_loop(&mut terminal);

        terminal::restore()?;
        tracing::info!("CLI client exiting");

        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                let ctx = ui::RenderContext {
                    session: &self.session,
                    view_model: &self.view_model,
                    activity: &self.activity,
                    player_name: &self.config.player_name,
                };
                ui::render(terminal, &ctx)?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(self.config.frame_interval_ms))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = input::map_key(key) {
                        if self.apply(command)? {
                            break;
                        }
                        needs_redraw = true;
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        Ok(())
    }

    /// Applies one command. Returns true when the application should exit.
    fn apply(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::EatPellet => {
                self.session
                    .scores_mut()
                    .increase_score(self.config.pellet_points)?;
                self.activity
                    .push(format!("Ate a pellet (+{})", self.config.pellet_points));
            }
            Command::EatGhost => {
                self.session
                    .scores_mut()
                    .increase_score(self.config.ghost_points)?;
                self.activity
                    .push(format!("Ate a ghost (+{})", self.config.ghost_points));
            }
            Command::SwitchOrder => {
                self.view_model.switch_score_order();
                self.activity.push(format!(
                    "Next refresh sorts: {}",
                    self.view_model.pending_sort()
                ));
            }
            Command::Refresh => {
                let seen = self.view_model.current_score_property().revision();
                self.view_model.update(self.session.scores());

                let changed = self.view_model.current_score_property().has_changed_since(seen);
                tracing::debug!(changed, "view model refreshed");
                self.activity.push("Leaderboard refreshed");
            }
            Command::SaveRun => {
                let score = self.session.scores().current_score();
                let name = self.config.player_name.clone();
                match self
                    .view_model
                    .set_player_score(self.session.scores_mut(), &name, score)
                {
                    Ok(()) => {
                        self.activity
                            .push(format!("Saved {score} points for {name}"));
                    }
                    Err(err) => {
                        tracing::warn!("failed to save run: {err}");
                        self.activity.push(format!("Save failed: {err}"));
                    }
                }
            }
            Command::ResetRun => {
                self.session.scores_mut().reset_current_score();
                self.activity.push("Current run reset");
            }
            Command::Quit => return Ok(true),
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> CliApp {
        CliApp::new(CliConfig::default()).unwrap()
    }

    #[test]
    fn pellets_raise_the_live_counter_not_the_cache() {
        let mut app = app();
        app.apply(Command::EatPellet).unwrap();

        assert_eq!(app.session.scores().current_score(), 10);
        assert_eq!(
            app.view_model.current_score_property().get(),
            "Score : 0"
        );
    }

    #[test]
    fn refresh_pulls_the_counter_into_the_cache() {
        let mut app = app();
        app.apply(Command::EatGhost).unwrap();
        app.apply(Command::Refresh).unwrap();

        assert_eq!(
            app.view_model.current_score_property().get(),
            "Score : 200"
        );
    }

    #[test]
    fn save_run_records_the_player_entry() {
        let mut app = app();
        app.apply(Command::EatPellet).unwrap();
        app.apply(Command::SaveRun).unwrap();

        assert_eq!(app.session.scores().score("Pacman"), Some(10));
    }

    #[test]
    fn quit_requests_exit() {
        let mut app = app();
        assert!(app.apply(Command::Quit).unwrap());
    }

    #[test]
    fn seeded_leaderboard_is_visible_at_startup() {
        let app = app();
        assert_eq!(app.view_model.scores().len(), SEED_SCORES.len());
    }
}
