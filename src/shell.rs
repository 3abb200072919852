//! Interactive console shell
//!
//! Owns every console read, retry loop, and printed message; parsing stays
//! in [`crate::parse`] and never blocks. The shell is generic over its
//! reader and writer so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{debug, warn};

use crate::config::ShellSettings;
use crate::error::Result;
use crate::jobs::{Job, Measurement, Readings};
use crate::parse::{self, OptionSet};

pub struct Shell<R, W> {
    input: R,
    output: W,
    settings: ShellSettings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, settings: ShellSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Run menu/job cycles until the user exits, gives up, or input runs dry.
    pub fn run(&mut self) -> Result<()> {
        loop {
            // Exhausted attempts and end-of-input both fall back to Exit.
            let job = self.choose_job()?.unwrap_or(Job::Exit);

            if job == Job::Exit {
                writeln!(self.output, "{}", job.execute(&Readings::default())?)?;
                return Ok(());
            }

            match self.gather_readings(job)? {
                Some(readings) => match job.execute(&readings) {
                    Ok(line) => writeln!(self.output, "{}", line.green().bold())?,
                    Err(err) => writeln!(self.output, "{} {}", "Error:".red(), err)?,
                },
                None => writeln!(
                    self.output,
                    "{}",
                    "No valid input received, returning to menu.".yellow()
                )?,
            }
        }
    }

    /// `Err` carries an IO failure; `Ok(None)` means attempts ran out or
    /// input ended.
    fn choose_job(&mut self) -> Result<Option<Job>> {
        let menu = Job::menu();

        for _ in 0..self.settings.max_attempts {
            if self.settings.clear_screen {
                self.clear_console()?;
            }
            self.display_menu(&menu)?;

            let line = match self.read_prompt("Please choose one of the listed options: ")? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse::parse_option(&line, &menu) {
                Ok(id) => {
                    debug!(option = id, "menu selection");
                    return Ok(Job::from_menu_id(id));
                }
                Err(err) => {
                    writeln!(self.output, "{} Please try again.", err.to_string().red())?;
                }
            }
        }

        warn!(
            attempts = self.settings.max_attempts,
            "giving up after repeated invalid selections"
        );
        Ok(None)
    }

    fn gather_readings(&mut self, job: Job) -> Result<Option<Readings>> {
        let mut readings = Readings::default();
        for measurement in job.requests() {
            if !self.read_measurement(*measurement, &mut readings)? {
                return Ok(None);
            }
        }
        Ok(Some(readings))
    }

    fn read_measurement(
        &mut self,
        measurement: Measurement,
        readings: &mut Readings,
    ) -> Result<bool> {
        for _ in 0..self.settings.max_attempts {
            let line = match self.read_prompt(measurement.prompt())? {
                Some(line) => line,
                None => return Ok(false),
            };

            let outcome = match measurement {
                Measurement::Distance => {
                    parse::parse_distance(&line).map(|v| readings.distance_m = Some(v))
                }
                Measurement::Duration => {
                    parse::parse_duration(&line).map(|v| readings.duration_secs = Some(v))
                }
                Measurement::Pace => {
                    parse::parse_pace(&line).map(|v| readings.pace_sec_per_m = Some(v))
                }
            };

            match outcome {
                Ok(()) => return Ok(true),
                Err(err) => {
                    writeln!(self.output, "{} Please try again.", err.to_string().red())?;
                }
            }
        }

        warn!(?measurement, "giving up after repeated invalid inputs");
        Ok(false)
    }

    fn display_menu(&mut self, menu: &OptionSet) -> Result<()> {
        writeln!(self.output, "{}", "Available options:".bold())?;
        writeln!(self.output, "{}", "-".repeat(42))?;
        for (id, label) in menu.iter() {
            writeln!(self.output, "{}: {}", id.to_string().cyan(), label)?;
        }
        writeln!(self.output, "{}", "-".repeat(42))?;
        Ok(())
    }

    fn read_prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn clear_console(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "\n".repeat(100))?;
        Ok(())
    }
}
