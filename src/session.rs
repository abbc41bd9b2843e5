//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::{conversion::Conversion, save::ResultSink};

/// Key ending the session.
pub const EXIT_KEY: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    MenuDisplay,
    AwaitChoice,
    ProcessChoice(String),
    Exit,
}

/// Menu loop reading choices from `input` and writing everything the user sees to `output`.
pub struct Session<R, W, S> {
    input: R,
    output: W,
    sink: S,
    state: State,
}

impl<R: BufRead, W: Write, S: ResultSink> Session<R, W, S> {
    pub fn new(input: R, output: W, sink: S) -> Self {
        Self {
            input,
            output,
            sink,
            state: State::MenuDisplay,
        }
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn into_parts(self) -> (R, W, S) {
        (self.input, self.output, self.sink)
    }

    /// Step until the user exits or input runs out.
    ///
    /// # Errors
    ///
    /// Only failures to read from `input` or write to `output` end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        while self.state != State::Exit {
            self.step()?;
        }

        Ok(())
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> io::Result<()> {
        let next = match std::mem::replace(&mut self.state, State::Exit) {
            State::MenuDisplay => {
                self.print_menu()?;
                State::AwaitChoice
            }
            State::AwaitChoice => {
                let message = format!("Enter choice [0-{}]: ", Conversion::iter().count());
                match self.prompt(&message)? {
                    Some(choice) => State::ProcessChoice(choice.trim().to_owned()),
                    None => State::Exit,
                }
            }
            State::ProcessChoice(choice) => self.process(&choice)?,
            State::Exit => State::Exit,
        };

        debug!("Session state: {next:?}");
        self.state = next;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Select conversion mode:")?;
        for conversion in Conversion::iter() {
            writeln!(self.output, "{}) {conversion}", conversion.key())?;
        }
        writeln!(self.output, "{EXIT_KEY}) Exit")
    }

    /// Show `message` and read one line without its line ending. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn process(&mut self, choice: &str) -> io::Result<State> {
        if choice == EXIT_KEY {
            writeln!(self.output, "Exiting converter.")?;
            return Ok(State::Exit);
        }

        let next = match Conversion::from_key(choice) {
            Some(conversion) => self.run_conversion(conversion)?,
            None => {
                writeln!(
                    self.output,
                    "Unrecognized option: '{choice}'. Please pick 0-{}.",
                    Conversion::iter().count()
                )?;
                State::MenuDisplay
            }
        };

        if next != State::Exit {
            writeln!(self.output)?;
        }

        Ok(next)
    }

    fn run_conversion(&mut self, conversion: Conversion) -> io::Result<State> {
        let Some(input) = self.prompt(conversion.prompt())? else {
            return Ok(State::Exit);
        };

        let result = match conversion.convert(&input) {
            Ok(result) => {
                debug!("{} gave {result:?}", conversion.tag());
                result
            }
            Err(err) => {
                warn!("{} failed: {err:?}", conversion.tag());
                writeln!(self.output, "Error: {err}")?;
                return Ok(State::MenuDisplay);
            }
        };

        writeln!(self.output, "{}: {result}", conversion.result_label())?;

        let Some(answer) = self.prompt("Save result to file? [y/N]: ")? else {
            return Ok(State::Exit);
        };

        if answer.trim().eq_ignore_ascii_case("y") {
            match self.sink.save(&result, conversion) {
                Ok(path) => writeln!(self.output, "Saved to {}", path.display())?,
                Err(err) => {
                    warn!("{err:?}");
                    writeln!(self.output, "Error: {err:#}")?;
                }
            }
        }

        Ok(State::MenuDisplay)
    }
}
