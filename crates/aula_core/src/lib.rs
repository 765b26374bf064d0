//! Aula core: pure calculator state machine and the numeric drills.
mod drills;
mod effect;
mod msg;
mod operation;
mod state;
mod update;
mod view_model;

pub use drills::{
    fizzbuzz, greeting_lines, is_even, squares, FizzBuzz, DEFAULT_FIZZBUZZ_END,
    DEFAULT_FIZZBUZZ_START, DEFAULT_GREETING_UPTO, GREETING,
};
pub use effect::{Effect, Prompt};
pub use msg::Msg;
pub use operation::{CalcError, CalcValue, Operation};
pub use state::{CalcState, Phase};
pub use update::update;
pub use view_model::{menu_lines, EXIT_OPTION, MENU_TITLE};
