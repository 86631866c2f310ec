//! Input surface abstraction
//!
//! Anything that turns user activity into game commands implements
//! [`InputSurface`]: the ratatui front end, the line-mode CLI, and scripted
//! surfaces in tests. [`drive`] runs the shared event loop.

use super::session::{Outcome, Session};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A request to the board controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the given text, or the active row when `None`/blank
    Submit(Option<String>),
    Type(char),
    Erase,
    Navigate(Direction),
    Select { row: usize, col: usize },
    NewGame,
}

/// What a surface reports after one poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Command(Command),
    /// Surface-local change only (mode switch, resize, ignored key); redraw
    Idle,
    /// The player is done
    Close,
}

pub trait InputSurface {
    /// Wait for the next user action
    ///
    /// # Errors
    /// Returns an error if the underlying device fails.
    fn poll(&mut self, session: &Session) -> Result<Signal>;

    /// Called after each submission so the surface can reset its own state
    fn on_outcome(&mut self, _outcome: &Outcome) {}
}

/// Run the event loop until the surface closes
///
/// `render` is called once up front and again after every poll.
///
/// # Errors
/// Propagates errors from the surface or the renderer.
pub fn drive<S, R>(session: &mut Session, surface: &mut S, mut render: R) -> Result<()>
where
    S: InputSurface,
    R: FnMut(&Session, &S) -> Result<()>,
{
    render(session, surface)?;

    loop {
        match surface.poll(session)? {
            Signal::Close => break,
            Signal::Idle => {}
            Signal::Command(command) => {
                if let Some(outcome) = session.apply(command) {
                    surface.on_outcome(&outcome);
                }
            }
        }
        render(session, surface)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameState};
    use std::collections::VecDeque;

    /// Replays a fixed list of signals, then closes
    struct Scripted {
        signals: VecDeque<Signal>,
        outcomes: Vec<Outcome>,
    }

    impl Scripted {
        fn new(commands: impl IntoIterator<Item = Command>) -> Self {
            Self {
                signals: commands.into_iter().map(Signal::Command).collect(),
                outcomes: Vec::new(),
            }
        }
    }

    impl InputSurface for Scripted {
        fn poll(&mut self, _session: &Session) -> Result<Signal> {
            Ok(self.signals.pop_front().unwrap_or(Signal::Close))
        }

        fn on_outcome(&mut self, outcome: &Outcome) {
            self.outcomes.push(outcome.clone());
        }
    }

    fn session() -> Session {
        Session::new(GameConfig::fixed("cercano", 4).unwrap())
    }

    fn typed(word: &str) -> Vec<Command> {
        let mut commands: Vec<Command> = word.chars().map(Command::Type).collect();
        commands.push(Command::Submit(None));
        commands
    }

    #[test]
    fn drive_plays_to_win() {
        let mut session = session();
        let mut surface = Scripted::new(typed("anoraco").into_iter().chain(typed("cercano")));
        let mut frames = 0;

        drive(&mut session, &mut surface, |_, _| {
            frames += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(session.state(), GameState::Won);
        assert_eq!(
            surface.outcomes,
            vec![Outcome::Continue { attempt: 1 }, Outcome::Won { attempts: 2 }]
        );
        // Initial frame plus one per command; close ends the loop without a frame
        assert_eq!(frames, 1 + 16);
    }

    #[test]
    fn drive_reports_rejections() {
        let mut session = session();
        let mut surface = Scripted::new([
            Command::Submit(Some("hola".to_string())),
            Command::Submit(Some("h0lamundo".to_string())),
        ]);

        drive(&mut session, &mut surface, |_, _| Ok(())).unwrap();

        assert_eq!(surface.outcomes.len(), 2);
        assert!(surface.outcomes.iter().all(|o| !o.is_accepted()));
        assert_eq!(session.attempt(), 0);
    }

    #[test]
    fn drive_stops_on_close() {
        let mut session = session();
        let mut surface = Scripted {
            signals: VecDeque::from([Signal::Idle, Signal::Close, Signal::Command(Command::NewGame)]),
            outcomes: Vec::new(),
        };
        let mut frames = 0;

        drive(&mut session, &mut surface, |_, _| {
            frames += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(frames, 2);
        assert_eq!(surface.signals.len(), 1);
    }

    #[test]
    fn drive_propagates_render_errors() {
        let mut session = session();
        let mut surface = Scripted::new(Vec::new());
        let result = drive(&mut session, &mut surface, |_, _| {
            Err(anyhow::anyhow!("terminal gone"))
        });
        assert!(result.is_err());
    }
}
