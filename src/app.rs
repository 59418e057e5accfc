use crate::clock::Clock;
use crate::consts;
use crate::game::input::InputSource;
use crate::game::Game;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::ops::ControlFlow;

/// The game together with the collaborators that drive it
#[derive(Clone, Debug)]
pub(crate) struct App<I, C, R = rand::rngs::ThreadRng> {
    game: Game<R>,
    input: I,
    clock: C,
}

impl<I: InputSource, C: Clock, R: Rng> App<I, C, R> {
    pub(crate) fn new(game: Game<R>, input: I, clock: C) -> Self {
        App { game, input, clock }
    }

    /// Run the game until the player quits, drawing to `terminal` after
    /// every tick
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        log::info!("Starting game at {} ticks per second", consts::SPEED);
        while self.step(&mut terminal)?.is_continue() {}
        log::info!("Quitting with snake length {}", self.game.snake().length());
        Ok(())
    }

    /// Wait for the next tick, advance the game, and draw the result
    fn step<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<ControlFlow<()>> {
        self.clock.tick_wait(consts::SPEED);
        let events = self.input.poll_events()?;
        if self.game.tick(events).is_break() {
            return Ok(ControlFlow::Break(()));
        }
        terminal.draw(|frame| self.game.draw(frame))?;
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::geometry::Cell;
    use crate::game::input::InputEvent;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    /// Hands out one batch of events per poll, then asks to quit
    #[derive(Clone, Debug, Default)]
    struct Script(VecDeque<Vec<InputEvent>>);

    impl InputSource for Script {
        fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
            Ok(self.0.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]))
        }
    }

    #[derive(Clone, Copy, Debug, Default)]
    struct CountingClock(u32);

    impl Clock for CountingClock {
        fn tick_wait(&mut self, rate: u32) {
            assert_eq!(rate, consts::SPEED);
            self.0 += 1;
        }
    }

    fn new_app(batches: Vec<Vec<InputEvent>>) -> App<Script, CountingClock, ChaCha12Rng> {
        let game = Game::new_with_rng(
            consts::GRID,
            ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF),
        );
        App::new(game, Script(batches.into()), CountingClock::default())
    }

    #[test]
    fn run_until_quit() {
        let app = new_app(vec![Vec::new(), Vec::new()]);
        let terminal = Terminal::new(TestBackend::new(80, 27)).unwrap();
        assert!(app.run(terminal).is_ok());
    }

    #[test]
    fn scripted_turns_are_applied() {
        let mut app = new_app(vec![
            vec![InputEvent::Turn(Direction::Down)],
            Vec::new(),
            vec![InputEvent::Turn(Direction::Left)],
        ]);
        let mut terminal = Terminal::new(TestBackend::new(80, 27)).unwrap();
        for _ in 0..3 {
            assert_eq!(app.step(&mut terminal).unwrap(), ControlFlow::Continue(()));
        }
        assert_eq!(app.step(&mut terminal).unwrap(), ControlFlow::Break(()));
        assert_eq!(app.clock.0, 4);

        // From the center (320, 240): down, down, left
        let snake = app.game.snake();
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), Cell::new(300, 280));

        let buffer = terminal.backend().buffer();
        let bar = (0..10)
            .filter_map(|x| buffer.cell((x, 0)).map(|c| c.symbol().to_owned()))
            .collect::<String>();
        assert_eq!(bar, format!(" Length: {}", snake.length()));
        // Head at column 15, row 14 of the board
        assert_eq!(
            buffer.cell((38, 16)).map(|c| c.bg),
            Some(consts::SNAKE_COLOR)
        );
    }
}
