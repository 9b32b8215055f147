//! Line-oriented input provider for the menu.
//!
//! Every reader re-asks until it gets a valid value, so the core entry points
//! only ever see already-validated types. `None` means the input ended; the
//! menu loop treats that as a clean exit.

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub struct Prompt<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// A trimmed string; when `required`, re-asks until it is non-empty.
    pub fn read_string(&mut self, label: &str, required: bool) -> io::Result<Option<String>> {
        loop {
            let Some(value) = self.read_line(label)? else {
                return Ok(None);
            };
            if !required || !value.is_empty() {
                return Ok(Some(value));
            }
            println!("This field is required. Please enter a value.");
        }
    }

    /// An integer within `min..=max`.
    pub fn read_u32(&mut self, label: &str, min: u32, max: u32) -> io::Result<Option<u32>> {
        loop {
            let Some(value) = self.read_line(label)? else {
                return Ok(None);
            };
            match value.parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(Some(n)),
                _ => println!("Please enter a number between {} and {}.", min, max),
            }
        }
    }

    /// A calendar date, strictly `YYYY-MM-DD`.
    pub fn read_date(&mut self, label: &str) -> io::Result<Option<NaiveDate>> {
        loop {
            let Some(value) = self.read_line(label)? else {
                return Ok(None);
            };
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => return Ok(Some(date)),
                Err(_) => println!("Invalid date format. Use YYYY-MM-DD."),
            }
        }
    }
}
