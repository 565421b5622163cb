//! Console front end
//!
//! A `Player` that reads guesses and feedback from a line-oriented reader and
//! writes advice to a writer. Generic over both so sessions can be scripted.

use crate::core::{Feedback, Word, WordError};
use crate::game::{FeedbackInput, GameError, GameState, MAX_TURNS, Player, TurnRecord};
use crate::output::feedback_symbols;
use crate::solver::Advice;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Where feedback comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSource {
    /// Computed from the known solution
    Evaluate,
    /// Typed in by the user
    Prompt,
}

/// Interactive player on a reader/writer pair
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    source: FeedbackSource,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub const fn new(input: R, output: W, source: FeedbackSource) -> Self {
        Self {
            input,
            output,
            source,
        }
    }

    /// Consume the player and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the welcome banner and wait for Enter
    ///
    /// # Errors
    /// Returns `GameError::Input` on I/O failure or closed input.
    pub fn greet(&mut self) -> Result<(), GameError> {
        writeln!(
            self.output,
            "\n╔══════════════════════════════════════════════════════════════╗"
        )?;
        writeln!(
            self.output,
            "║                    Wordle Advisor                            ║"
        )?;
        writeln!(
            self.output,
            "╚══════════════════════════════════════════════════════════════╝\n"
        )?;
        writeln!(self.output, "Welcome to the Wordle Advisor.")?;
        if self.source == FeedbackSource::Prompt {
            writeln!(
                self.output,
                "After each guess, enter the feedback from your game:"
            )?;
            writeln!(self.output, "  o (or G) = right letter, right spot")?;
            writeln!(self.output, "  - (or Y) = right letter, wrong spot")?;
            writeln!(self.output, "  x (or _) = letter not in the word")?;
        }
        writeln!(self.output, "Type 'quit' at any prompt to leave.")?;
        write!(self.output, "Press Enter to begin the game.")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Print the closing message for a finished game
    ///
    /// # Errors
    /// Returns `GameError::Input` on I/O failure.
    pub fn farewell(&mut self, state: Option<&GameState>) -> Result<(), GameError> {
        if let Some(state) = state {
            if state.victory() {
                let message = format!(
                    "Congrats! You guessed correctly in {} turns!",
                    state.turn()
                );
                writeln!(self.output, "\n{}", message.green().bold())?;
            } else {
                writeln!(self.output, "\nYou're out of turns. Better luck next time!")?;
                if let Some(solution) = state.solution() {
                    let answer = solution.text().to_uppercase();
                    writeln!(self.output, "The word was {answer}.")?;
                }
            }
        }
        writeln!(
            self.output,
            "\nThanks for playing with the Wordle Advisor! Goodbye."
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn write_advice(&mut self, advice: &Advice, state: &GameState) -> io::Result<()> {
        writeln!(
            self.output,
            "\n{}",
            format!(
                "Turn {} of {MAX_TURNS}: {} candidates remaining",
                state.turn() + 1,
                state.candidates().len()
            )
            .cyan()
        )?;

        match advice {
            Advice::Suggest(ranking) => {
                writeln!(
                    self.output,
                    "I'd advise guessing **{}** ({} score {:.4})",
                    ranking.best.text().to_uppercase().bright_yellow().bold(),
                    ranking.method,
                    ranking.best_score()
                )?;
            }
            Advice::NoSuggestion => {
                writeln!(self.output, "I'm out of options! You're on your own!")?;
            }
        }

        if let Some(odds) = state.random_odds() {
            writeln!(self.output, "Random odds are currently {odds:.2}%")?;
        }
        Ok(())
    }

    fn write_possibilities(&mut self, advice: &Advice) -> io::Result<()> {
        let Some(ranking) = advice.ranking() else {
            return writeln!(self.output, "No possibilities remain.");
        };

        for scored in ranking.scores.ascending() {
            writeln!(self.output, "{} : {:.6}", scored.word, scored.score)?;
        }
        Ok(())
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit")
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn next_guess(&mut self, advice: &Advice, state: &GameState) -> Result<Word, GameError> {
        self.write_advice(advice, state)?;
        writeln!(
            self.output,
            "Enter 's' to show all possibilities, or input your guess then press Enter."
        )?;

        loop {
            self.output.flush()?;
            let line = self.read_line()?;

            if is_quit(&line) {
                return Err(GameError::Quit);
            }
            if line.eq_ignore_ascii_case("s") {
                self.write_possibilities(advice)?;
                writeln!(self.output, "Input your guess then press Enter.")?;
                continue;
            }
            if line.is_empty()
                && let Some(best) = advice.best()
            {
                return Ok(*best);
            }

            match Word::new(&line) {
                Ok(guess) => return Ok(guess),
                Err(WordError::InvalidLength(_)) => {
                    writeln!(
                        self.output,
                        "{} Input must be five letters.",
                        "ERROR:".red()
                    )?;
                }
                Err(e) => writeln!(self.output, "{} {e}", "ERROR:".red())?,
            }
        }
    }

    fn feedback(&mut self, guess: &Word) -> Result<FeedbackInput, GameError> {
        if self.source == FeedbackSource::Evaluate {
            return Ok(FeedbackInput::Evaluate);
        }

        loop {
            writeln!(
                self.output,
                "Enter the feedback for {} (o = right spot, - = wrong spot, x = absent):",
                guess.text().to_uppercase()
            )?;
            self.output.flush()?;
            let line = self.read_line()?;

            if is_quit(&line) {
                return Err(GameError::Quit);
            }
            match Feedback::parse(&line) {
                Ok(feedback) => return Ok(FeedbackInput::Given(feedback)),
                Err(e) => writeln!(self.output, "{} {e}", "ERROR:".red())?,
            }
        }
    }

    fn observe(&mut self, record: &TurnRecord, state: &GameState) {
        let written = writeln!(
            self.output,
            "{} {}",
            record.guess.text().to_uppercase(),
            feedback_symbols(&record.feedback)
        )
        .and_then(|()| {
            if state.victory() || state.is_over() {
                Ok(())
            } else {
                writeln!(self.output, "{} candidates remain", record.candidates_after)
            }
        });

        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write turn summary");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateSet;
    use crate::game::run_game;
    use crate::solver::{Advisor, PolicyType};
    use std::io::Cursor;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> CandidateSet {
        ["apple", "angle", "ankle"].iter().map(|t| word(t)).collect()
    }

    fn player(script: &str, source: FeedbackSource) -> ConsolePlayer<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePlayer::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), source)
    }

    fn output_of(player: ConsolePlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(player.into_output()).unwrap()
    }

    #[test]
    fn evaluated_game_reaches_victory() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), Some(word("apple")));
        let mut console = player("angle\napple\n", FeedbackSource::Evaluate);

        let finished = run_game(state, &advisor, &mut console).unwrap();

        assert!(finished.victory());
        assert_eq!(finished.turn(), 2);
        let output = output_of(console);
        assert!(output.contains("I'd advise guessing"));
        assert!(output.contains("Random odds are currently 33.33%"));
        assert!(output.contains("1 candidates remain"));
    }

    #[test]
    fn reprompts_until_five_letters() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), Some(word("apple")));
        let mut console = player("app\nap9le\napple\n", FeedbackSource::Evaluate);

        let finished = run_game(state, &advisor, &mut console).unwrap();

        assert_eq!(finished.turn(), 1);
        let output = output_of(console);
        assert!(output.contains("Input must be five letters."));
        assert_eq!(output.matches("ERROR:").count(), 2);
    }

    #[test]
    fn show_lists_possibilities_then_accepts_guess() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), Some(word("angle")));
        let mut console = player("s\nangle\n", FeedbackSource::Evaluate);

        run_game(state, &advisor, &mut console).unwrap();

        let output = output_of(console);
        let listing: Vec<&str> = output.lines().filter(|line| line.contains(" : ")).collect();
        assert_eq!(listing.len(), 3);
        assert!(listing[0].starts_with("apple"));
        assert!(output.contains("Input your guess then press Enter."));
    }

    #[test]
    fn empty_line_takes_suggestion() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), Some(word("angle")));
        let mut console = player("\n", FeedbackSource::Evaluate);

        let finished = run_game(state, &advisor, &mut console).unwrap();

        assert_eq!(finished.history()[0].guess, word("angle"));
        assert!(finished.victory());
    }

    #[test]
    fn prompted_feedback_prunes() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), None);
        let mut console = player("angle\nbad\noxxoo\napple\nooooo\n", FeedbackSource::Prompt);

        let finished = run_game(state, &advisor, &mut console).unwrap();

        assert!(finished.victory());
        assert_eq!(finished.history()[0].candidates_after, 1);
        assert!(output_of(console).contains("ERROR:"));
    }

    #[test]
    fn quit_stops_the_game() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), None);
        let mut console = player("quit\n", FeedbackSource::Prompt);

        let result = run_game(state, &advisor, &mut console);
        assert!(matches!(result, Err(GameError::Quit)));
    }

    #[test]
    fn closed_input_is_an_error() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), None);
        let mut console = player("", FeedbackSource::Prompt);

        let result = run_game(state, &advisor, &mut console);
        assert!(matches!(result, Err(GameError::Input(_))));
    }

    #[test]
    fn out_of_options_message() {
        let advisor = Advisor::<PolicyType>::default();
        let state = GameState::new(dictionary(), None)
            .apply(word("crane"), Feedback::parse("xxxxx").unwrap());
        let mut console = player("pious\nxxxxx\n", FeedbackSource::Prompt);

        let next = crate::game::play_turn(&state, &advisor, &mut console).unwrap();

        assert_eq!(next.turn(), 2);
        assert!(output_of(console).contains("I'm out of options! You're on your own!"));
    }

    #[test]
    fn farewell_reports_outcome() {
        let won =
            GameState::new(dictionary(), Some(word("apple"))).apply(word("apple"), Feedback::VICTORY);
        let mut console = player("", FeedbackSource::Evaluate);
        console.farewell(Some(&won)).unwrap();
        let output = output_of(console);
        assert!(output.contains("You guessed correctly in 1 turns!"));
        assert!(output.contains("Goodbye."));

        let mut lost = GameState::new(dictionary(), Some(word("apple")));
        for _ in 0..MAX_TURNS {
            lost = lost.apply(word("ankle"), Feedback::parse("oxxoo").unwrap());
        }
        let mut console = player("", FeedbackSource::Evaluate);
        console.farewell(Some(&lost)).unwrap();
        let output = output_of(console);
        assert!(output.contains("You're out of turns. Better luck next time!"));
        assert!(output.contains("The word was APPLE."));
    }

    #[test]
    fn greet_waits_for_enter() {
        let mut console = player("\n", FeedbackSource::Prompt);
        console.greet().unwrap();
        let output = output_of(console);
        assert!(output.contains("Welcome to the Wordle Advisor."));
        assert!(output.contains("right letter, wrong spot"));
    }
}
