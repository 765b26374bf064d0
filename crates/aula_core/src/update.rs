use crate::operation::parse_operand;
use crate::{CalcError, CalcState, Effect, Msg, Operation, Phase, Prompt, EXIT_OPTION};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CalcState, msg: Msg) -> (CalcState, Vec<Effect>) {
    if state.is_exited() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Start => menu(),
        Msg::EndOfInput => {
            state.set_phase(Phase::Exited);
            vec![Effect::Exit]
        }
        Msg::Input(line) => match state.take_phase() {
            Phase::AwaitingOption => {
                if line == EXIT_OPTION {
                    state.set_phase(Phase::Exited);
                    vec![Effect::Exit]
                } else {
                    // Unknown options are only rejected once both operands are in.
                    state.set_phase(Phase::AwaitingFirst { choice: line });
                    vec![Effect::Prompt(Prompt::FirstOperand)]
                }
            }
            Phase::AwaitingFirst { choice } => match parse_operand(&line) {
                Ok(first) => {
                    state.set_phase(Phase::AwaitingSecond { choice, first });
                    vec![Effect::Prompt(Prompt::SecondOperand)]
                }
                Err(err) => end_round(&mut state, err.to_string()),
            },
            Phase::AwaitingSecond { choice, first } => {
                let outcome =
                    parse_operand(&line).and_then(|second| evaluate(&choice, first, second));
                let line = match outcome {
                    Ok(line) => line,
                    Err(err) => err.to_string(),
                };
                end_round(&mut state, line)
            }
            Phase::Exited => Vec::new(),
        },
    };

    (state, effects)
}

fn evaluate(choice: &str, first: i64, second: i64) -> Result<String, CalcError> {
    let op = Operation::from_label(choice).ok_or(CalcError::InvalidOption)?;
    let value = op.apply(first, second)?;
    Ok(format!("{} {}", op.label(), value))
}

fn end_round(state: &mut CalcState, line: String) -> Vec<Effect> {
    state.finish_round();
    let mut effects = Vec::with_capacity(3);
    effects.push(Effect::Print(line));
    effects.extend(menu());
    effects
}

fn menu() -> Vec<Effect> {
    vec![Effect::ShowMenu, Effect::Prompt(Prompt::Option)]
}
