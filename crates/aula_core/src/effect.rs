#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowMenu,
    Prompt(Prompt),
    Print(String),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Option,
    FirstOperand,
    SecondOperand,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Option => "Enter an option: ",
            Prompt::FirstOperand => "Enter the first number: ",
            Prompt::SecondOperand => "Enter the second number: ",
        }
    }
}
