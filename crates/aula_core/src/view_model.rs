use crate::Operation;

pub const MENU_TITLE: &str = "Calculator, choose an option";
pub const EXIT_OPTION: &str = "Exit";

/// The menu as printed before every round.
pub fn menu_lines() -> Vec<&'static str> {
    let mut lines = Vec::with_capacity(Operation::ALL.len() + 2);
    lines.push(MENU_TITLE);
    lines.extend(Operation::ALL.iter().map(|op| op.label()));
    lines.push(EXIT_OPTION);
    lines
}
