use std::fmt;

pub const DEFAULT_FIZZBUZZ_START: i64 = 1;
pub const DEFAULT_FIZZBUZZ_END: i64 = 50;
pub const DEFAULT_GREETING_UPTO: u32 = 10;
pub const GREETING: &str = "Hello World";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    Number(i64),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl FizzBuzz {
    pub fn classify(n: i64) -> Self {
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => FizzBuzz::FizzBuzz,
            (true, false) => FizzBuzz::Fizz,
            (false, true) => FizzBuzz::Buzz,
            (false, false) => FizzBuzz::Number(n),
        }
    }
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Number(n) => write!(f, "{n}"),
            FizzBuzz::Fizz => f.write_str("Fizz"),
            FizzBuzz::Buzz => f.write_str("Buzz"),
            FizzBuzz::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}

/// FizzBuzz over the half-open range `start..end`.
pub fn fizzbuzz(start: i64, end: i64) -> Vec<FizzBuzz> {
    (start..end).map(FizzBuzz::classify).collect()
}

/// `[1, 4, 9, ..., n²]`.
pub fn squares(n: u32) -> Vec<u64> {
    (1..=u64::from(n)).map(|i| i * i).collect()
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// The greeting followed by `0..=upto`, one entry per line.
pub fn greeting_lines(upto: u32) -> Vec<String> {
    std::iter::once(GREETING.to_string())
        .chain((0..=upto).map(|i| i.to_string()))
        .collect()
}
