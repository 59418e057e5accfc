use super::direction::Direction;
use super::snake::Snake;
use crate::command::Command;
use crossterm::event::{poll, read};
use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

/// A player action relevant to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputEvent {
    Turn(Direction),
    Quit,
}

impl InputEvent {
    pub(crate) fn from_command(cmd: Command) -> InputEvent {
        match cmd {
            Command::Quit => InputEvent::Quit,
            Command::Up => InputEvent::Turn(Direction::Up),
            Command::Down => InputEvent::Turn(Direction::Down),
            Command::Left => InputEvent::Turn(Direction::Left),
            Command::Right => InputEvent::Turn(Direction::Right),
        }
    }
}

/// A source of player input that can be checked without blocking
pub(crate) trait InputSource {
    /// Return all events received since the last call, which may be none
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Reads key presses from the terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while poll(Duration::ZERO)? {
            if let Some(cmd) = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
            {
                events.push(InputEvent::from_command(cmd));
            }
        }
        Ok(events)
    }
}

/// Apply `events` to `snake` in order.  Turns that would reverse the snake
/// are dropped.  Returns `Break` as soon as a quit is seen; any events after
/// it are ignored.
pub(crate) fn handle_events<I>(snake: &mut Snake, events: I) -> ControlFlow<()>
where
    I: IntoIterator<Item = InputEvent>,
{
    for ev in events {
        match ev {
            InputEvent::Turn(d) => {
                if !snake.request_direction(d) {
                    log::debug!("Ignoring request to reverse from {:?} to {d:?}", snake.direction());
                }
            }
            InputEvent::Quit => return ControlFlow::Break(()),
        }
    }
    ControlFlow::Continue(())
}
