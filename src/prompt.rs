use std::io::{self, BufRead, IsTerminal};

use dialoguer::Confirm as ConfirmPrompt;
use tracing::warn;

/// Asks the operator a yes/no question.
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

/// Blocks on the terminal; an empty answer means yes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, question: &str) -> bool {
        if !io::stdin().is_terminal() {
            eprintln!("{} ([y]/n)", question);
            return read_answer(io::stdin().lock());
        }

        match ConfirmPrompt::new()
            .with_prompt(question)
            .default(true)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("could not read an answer ({}); assuming yes", e);
                true
            }
        }
    }
}

/// Reads lines until one is `y`, `n` or empty (yes). Running out of input also means yes.
fn read_answer(input: impl BufRead) -> bool {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        match line.trim().to_lowercase().as_str() {
            "" | "y" => return true,
            "n" => return false,
            other => warn!("unrecognised answer {:?}; expected y or n", other),
        }
    }
    warn!("no answer on stdin; assuming yes");
    true
}

/// Always gives the same answer, for `--yes` and headless runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}

impl<C: Confirm + ?Sized> Confirm for Box<C> {
    fn confirm(&self, question: &str) -> bool {
        (**self).confirm(question)
    }
}
