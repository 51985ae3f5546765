//! Line-based interactive prompts over any reader/writer pair.
//!
//! Blank input selects the default. Invalid input is reported and asked
//! again; end of input is an error.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result, bail};

pub struct Prompter<R, W>
{
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W>
{
    pub fn new(
        input: R,
        output: W,
    ) -> Self
    {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W
    {
        &mut self.output
    }

    fn read_line(
        &mut self,
        prompt: &str,
    ) -> Result<String>
    {
        write!(self.output, "{prompt} ")?;
        self.output
            .flush()?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if n == 0
        {
            bail!("input closed while waiting for: {prompt}");
        }
        Ok(line
            .trim()
            .to_string())
    }

    /// Free text; blank returns `default` when there is one.
    pub fn ask_text(
        &mut self,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<String>
    {
        let label = match default
        {
            Some(d) => format!("{prompt} ({d}):"),
            None => format!("{prompt}:"),
        };

        loop
        {
            let answer = self.read_line(&label)?;
            match (answer.is_empty(), default)
            {
                (false, _) => return Ok(answer),
                (true, Some(d)) => return Ok(d.to_string()),
                (true, None) => writeln!(self.output, "A value is required.")?,
            }
        }
    }

    pub fn confirm(
        &mut self,
        prompt: &str,
        default: bool,
    ) -> Result<bool>
    {
        let label = format!("{prompt} [{}]:", if default { "Y/n" } else { "y/N" });

        loop
        {
            let answer = self
                .read_line(&label)?
                .to_ascii_lowercase();
            match answer.as_str()
            {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    /// An integer within `range`.
    pub fn ask_u32(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
    ) -> Result<u32>
    {
        let label = format!("{prompt}:");

        loop
        {
            let answer = self.read_line(&label)?;
            match answer.parse::<u32>()
            {
                Ok(n) if range.contains(&n) => return Ok(n),
                _ => writeln!(
                    self.output,
                    "Please enter a number between {} and {}.",
                    range.start(),
                    range.end()
                )?,
            }
        }
    }

    /// Whitespace and/or comma separated numbers; blank means none.
    pub fn ask_numbers(
        &mut self,
        prompt: &str,
    ) -> Result<Vec<usize>>
    {
        loop
        {
            let answer = self.read_line(prompt)?;
            match parse_numbers(&answer)
            {
                Ok(numbers) => return Ok(numbers),
                Err(_) => writeln!(
                    self.output,
                    "Invalid input. Please enter a list of numbers separated by spaces or commas."
                )?,
            }
        }
    }
}

/// Parse "1, 2 3" into `[1, 2, 3]`.
pub fn parse_numbers(input: &str) -> Result<Vec<usize>>
{
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("invalid number: {s}"))
        })
        .collect()
}
