//! Calculator job selection and execution
//!
//! The three calculators and the exit action form a fixed set, so jobs are
//! an enum dispatched by `match` rather than trait objects. Menu IDs are
//! assigned from the declaration order in [`Job::ALL`].

use crate::calc;
use crate::error::{PacerError, Result};
use crate::parse::OptionSet;

/// A measurement the shell asks the user for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Distance,
    Duration,
    Pace,
}

impl Measurement {
    /// Prompt line shown before reading this measurement.
    pub fn prompt(&self) -> &'static str {
        match self {
            Measurement::Distance => "Enter distance (e.g., '5km', '3.1m', 'marathon'): ",
            Measurement::Duration => "Enter duration (e.g., '01:02:03', '45'): ",
            Measurement::Pace => "Enter pace (e.g., '5:30 min/km', '300 sec/km'): ",
        }
    }
}

/// Parsed user inputs for one job run, in internal units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readings {
    pub distance_m: Option<f64>,
    pub duration_secs: Option<u64>,
    pub pace_sec_per_m: Option<f64>,
}

impl Readings {
    fn require_distance(&self) -> Result<f64> {
        self.distance_m
            .ok_or_else(|| PacerError::Internal("missing distance reading".to_string()))
    }

    fn require_duration(&self) -> Result<u64> {
        self.duration_secs
            .ok_or_else(|| PacerError::Internal("missing duration reading".to_string()))
    }

    fn require_pace(&self) -> Result<f64> {
        self.pace_sec_per_m
            .ok_or_else(|| PacerError::Internal("missing pace reading".to_string()))
    }
}

/// One selectable calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Pace,
    Duration,
    Distance,
    Exit,
}

impl Job {
    /// Menu order; IDs are assigned 1-based from this order.
    pub const ALL: [Job; 4] = [Job::Pace, Job::Duration, Job::Distance, Job::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            Job::Pace => "Start Pace Calculator",
            Job::Duration => "Start Duration Calculator",
            Job::Distance => "Start Distance Calculator",
            Job::Exit => "Exit Application",
        }
    }

    /// The measurements this job needs, in prompt order.
    pub fn requests(&self) -> &'static [Measurement] {
        match self {
            Job::Pace => &[Measurement::Distance, Measurement::Duration],
            Job::Duration => &[Measurement::Pace, Measurement::Distance],
            Job::Distance => &[Measurement::Pace, Measurement::Duration],
            Job::Exit => &[],
        }
    }

    /// Build the selection menu from all jobs.
    pub fn menu() -> OptionSet {
        let mut options = OptionSet::new();
        for job in Job::ALL {
            options.push(job.label());
        }
        options
    }

    /// Resolve a validated menu ID back to its job.
    pub fn from_menu_id(id: u32) -> Option<Job> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        Job::ALL.get(index).copied()
    }

    /// Run the calculation and produce the response line.
    pub fn execute(&self, readings: &Readings) -> Result<String> {
        match self {
            Job::Pace => {
                let distance_m = readings.require_distance()?;
                let duration_secs = readings.require_duration()?;
                let pace = calc::pace_from(duration_secs, distance_m)?;
                Ok(format!("Pace: {}", calc::format_pace_min_per_km(pace)))
            }
            Job::Duration => {
                let pace = readings.require_pace()?;
                let distance_m = readings.require_distance()?;
                let duration = calc::duration_from(pace, distance_m)?;
                Ok(format!("Duration: {}", calc::format_duration(duration)))
            }
            Job::Distance => {
                let pace = readings.require_pace()?;
                let duration_secs = readings.require_duration()?;
                let distance = calc::distance_from(pace, duration_secs as f64)?;
                Ok(format!("Distance: {}", calc::format_distance(distance)))
            }
            Job::Exit => Ok("Exiting the application. Goodbye!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_jobs_in_declaration_order() {
        let menu = Job::menu();
        assert_eq!(menu.len(), 4);

        let labels: Vec<(u32, &str)> = menu.iter().collect();
        assert_eq!(labels[0], (1, "Start Pace Calculator"));
        assert_eq!(labels[3], (4, "Exit Application"));

        assert_eq!(Job::from_menu_id(1), Some(Job::Pace));
        assert_eq!(Job::from_menu_id(4), Some(Job::Exit));
        assert_eq!(Job::from_menu_id(0), None);
        assert_eq!(Job::from_menu_id(5), None);
    }

    #[test]
    fn test_pace_job() {
        let readings = Readings {
            distance_m: Some(10_000.0),
            duration_secs: Some(3000),
            pace_sec_per_m: None,
        };
        assert_eq!(Job::Pace.execute(&readings).unwrap(), "Pace: 05:00 min/km");
    }

    #[test]
    fn test_duration_job() {
        let readings = Readings {
            distance_m: Some(10_000.0),
            duration_secs: None,
            pace_sec_per_m: Some(0.3),
        };
        assert_eq!(
            Job::Duration.execute(&readings).unwrap(),
            "Duration: 00:50:00 hh:mm:ss"
        );

        // Short results print as raw seconds
        let readings = Readings {
            distance_m: Some(500.0),
            duration_secs: None,
            pace_sec_per_m: Some(0.3),
        };
        assert_eq!(
            Job::Duration.execute(&readings).unwrap(),
            "Duration: 150.00 sec"
        );
    }

    #[test]
    fn test_distance_job() {
        let readings = Readings {
            distance_m: None,
            duration_secs: Some(3000),
            pace_sec_per_m: Some(0.3),
        };
        assert_eq!(
            Job::Distance.execute(&readings).unwrap(),
            "Distance: 10.00 km"
        );
    }

    #[test]
    fn test_exit_job_needs_no_readings() {
        assert!(Job::Exit.requests().is_empty());
        assert_eq!(
            Job::Exit.execute(&Readings::default()).unwrap(),
            "Exiting the application. Goodbye!"
        );
    }

    #[test]
    fn test_zero_pace_is_a_calculation_error() {
        let readings = Readings {
            distance_m: Some(10_000.0),
            duration_secs: None,
            pace_sec_per_m: Some(0.0),
        };
        assert!(matches!(
            Job::Duration.execute(&readings),
            Err(PacerError::Calc(_))
        ));
    }

    #[test]
    fn test_missing_reading_is_internal() {
        let readings = Readings::default();
        assert!(matches!(
            Job::Pace.execute(&readings),
            Err(PacerError::Internal(_))
        ));
    }
}
