//! Output abstraction
//!
//! Presenters write through [`OutputWriter`] so reports can be captured in tests.

use std::io::{self, Write};

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output implementation using stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
        let _ = io::stdout().flush();
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
