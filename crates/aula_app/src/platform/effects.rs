use std::io::{self, BufRead, Write};

use aula_core::{menu_lines, update, CalcState, Effect, Msg};
use aula_logging::{aula_debug, aula_info};

use super::input::read_line;

/// Executes calculator effects against an output sink.
pub struct EffectRunner<W> {
    out: W,
}

impl<W: Write> EffectRunner<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns `false` once an `Exit` effect has been seen.
    pub fn run(&mut self, effects: Vec<Effect>) -> io::Result<bool> {
        let mut running = true;
        for effect in effects {
            aula_debug!("Calculator effect {:?}", effect);
            match effect {
                Effect::ShowMenu => {
                    for line in menu_lines() {
                        writeln!(self.out, "{line}")?;
                    }
                }
                Effect::Prompt(prompt) => {
                    write!(self.out, "{}", prompt.text())?;
                }
                Effect::Print(line) => {
                    writeln!(self.out, "{line}")?;
                }
                Effect::Exit => running = false,
            }
        }
        self.out.flush()?;
        Ok(running)
    }
}

/// Drives one calculator session until `Exit` or end of input.
pub fn run_calculator<R: BufRead, W: Write>(input: &mut R, out: W) -> io::Result<CalcState> {
    let mut runner = EffectRunner::new(out);
    let (mut state, effects) = update(CalcState::new(), Msg::Start);
    let mut running = runner.run(effects)?;

    while running {
        let msg = match read_line(input)? {
            Some(line) => Msg::Input(line),
            None => Msg::EndOfInput,
        };
        let (next, effects) = update(state, msg);
        state = next;
        running = runner.run(effects)?;
    }

    aula_info!("Calculator session ended after {} rounds", state.rounds());
    Ok(state)
}
