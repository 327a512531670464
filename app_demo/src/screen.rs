// crypto_demo/app_demo/src/screen.rs

use std::io::{self, Write};

use inquire::{InquireError, Select, Text};
use tracing::warn;

use crypto_workflow::Algorithm;

/// Terminal helpers shared by both views.
pub struct Screen {
    clear: bool,
}

impl Screen {
    pub fn new(clear: bool) -> Self {
        Screen { clear }
    }

    pub fn clear(&self) {
        if self.clear {
            clearscreen::clear().unwrap_or_else(|e| warn!(error = %e, "could not clear screen"));
        }
    }

    pub fn pause(&self) -> io::Result<()> {
        println!("\nPress Enter to continue...");
        io::stdout().flush()?;
        io::stdin().read_line(&mut String::new())?;
        Ok(())
    }
}

/// Ask for a line of text, pre-filled with `current`. `None` if the prompt was dismissed.
pub fn prompt_text(label: &str, current: &str) -> Option<String> {
    match Text::new(label).with_initial_value(current).prompt() {
        Ok(text) => Some(text),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => None,
        Err(e) => {
            warn!(error = %e, "could not read input");
            None
        }
    }
}

pub fn prompt_algorithm(current: Algorithm) -> Option<Algorithm> {
    let cursor = Algorithm::ALL
        .iter()
        .position(|algorithm| *algorithm == current)
        .unwrap_or(0);
    match Select::new("Choose algorithm:", Algorithm::ALL.to_vec())
        .with_starting_cursor(cursor)
        .prompt()
    {
        Ok(algorithm) => Some(algorithm),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => None,
        Err(e) => {
            warn!(error = %e, "could not read selection");
            None
        }
    }
}

/// Print a labelled field, showing a dash for empty values.
pub fn field(label: &str, value: &str) {
    if value.is_empty() {
        println!("  {label:<22} -");
    } else {
        println!("  {label:<22} {value}");
    }
}
