use anyhow::{anyhow, Result};

use std::collections::VecDeque;
use std::io::{stdout, BufRead, Write};

/// Reads whitespace-separated tokens from a line-oriented reader, so that
/// answers may be split across lines or share a line
pub struct Prompter<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Prints `prompt` unless an answer is already waiting, then returns the next token
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        if self.pending.is_empty() {
            print!("{}", prompt);
            stdout().flush()?;
        }
        self.next_token()
    }

    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut buffer = String::new();
            if self.reader.read_line(&mut buffer)? == 0 {
                return Err(anyhow!("unexpected end of input"));
            }
            self.pending
                .extend(buffer.split_whitespace().map(str::to_string));
        }
    }

    /// Asks until the answer parses as a number accepted by `check`
    pub fn ask_number<E, F>(&mut self, prompt: &str, check: F) -> Result<usize>
    where
        E: std::fmt::Display,
        F: Fn(usize) -> Result<usize, E>,
    {
        loop {
            let token = self.ask(prompt)?;
            match token.parse::<usize>() {
                Err(_) => println!("Invalid number: {}", token),
                Ok(number) => match check(number) {
                    Ok(number) => return Ok(number),
                    Err(err) => println!("{}", err),
                },
            }
            self.discard_pending();
        }
    }

    /// Drops the rest of a rejected answer
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}
