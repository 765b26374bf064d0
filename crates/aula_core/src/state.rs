/// Where the calculator is within one menu round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingOption,
    AwaitingFirst {
        choice: String,
    },
    AwaitingSecond {
        choice: String,
        first: i64,
    },
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalcState {
    phase: Phase,
    rounds: u64,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_exited(&self) -> bool {
        self.phase == Phase::Exited
    }

    /// Rounds that ended with a result or a diagnostic.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub(crate) fn take_phase(&mut self) -> Phase {
        std::mem::take(&mut self.phase)
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn finish_round(&mut self) {
        self.phase = Phase::AwaitingOption;
        self.rounds += 1;
    }
}
