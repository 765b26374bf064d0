#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session opened; show the menu for the first time.
    Start,
    /// One line entered by the user, without its line terminator.
    Input(String),
    /// Input stream closed.
    EndOfInput,
}
