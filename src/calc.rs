//! Pace, duration, and distance conversion algebra
//!
//! Internal units are fixed: meters for distance, seconds for duration,
//! seconds per meter for pace. Each quantity is derivable from the other
//! two; the formatters render results back into the units runners read.

use crate::error::CalcError;

/// Pace in seconds per meter from duration and distance.
pub fn pace_from(duration_secs: u64, distance_m: f64) -> Result<f64, CalcError> {
    if distance_m <= 0.0 {
        return Err(CalcError::NonPositiveDistance { value: distance_m });
    }
    Ok(duration_secs as f64 / distance_m)
}

/// Duration in seconds from pace and distance.
pub fn duration_from(pace_sec_per_m: f64, distance_m: f64) -> Result<f64, CalcError> {
    if pace_sec_per_m <= 0.0 {
        return Err(CalcError::NonPositivePace {
            value: pace_sec_per_m,
        });
    }
    if distance_m < 0.0 {
        return Err(CalcError::NegativeDistance { value: distance_m });
    }
    Ok(pace_sec_per_m * distance_m)
}

/// Distance in meters from pace and duration.
pub fn distance_from(pace_sec_per_m: f64, duration_secs: f64) -> Result<f64, CalcError> {
    if pace_sec_per_m <= 0.0 {
        return Err(CalcError::NonPositivePace {
            value: pace_sec_per_m,
        });
    }
    if duration_secs < 0.0 {
        return Err(CalcError::NegativeDuration {
            value: duration_secs,
        });
    }
    Ok(duration_secs / pace_sec_per_m)
}

/// Split a second count into whole hours, minutes, and seconds.
pub fn split_hms(total_seconds: f64) -> (u64, u64, u64) {
    let total = total_seconds as u64;
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Render a pace as `MM:SS min/km`.
pub fn format_pace_min_per_km(pace_sec_per_m: f64) -> String {
    let secs_per_km = pace_sec_per_m * 1000.0;
    let (_, minutes, seconds) = split_hms(secs_per_km);
    format!("{:02}:{:02} min/km", minutes, seconds)
}

/// Render a duration: raw seconds below three minutes, `HH:MM:SS` above.
pub fn format_duration(duration_secs: f64) -> String {
    if duration_secs < 180.0 {
        format!("{:.2} sec", duration_secs)
    } else {
        let (hours, minutes, seconds) = split_hms(duration_secs);
        format!("{:02}:{:02}:{:02} hh:mm:ss", hours, minutes, seconds)
    }
}

/// Render a distance: kilometers from 1000 m up, meters below.
pub fn format_distance(distance_m: f64) -> String {
    if distance_m >= 1000.0 {
        format!("{:.2} km", distance_m / 1000.0)
    } else {
        format!("{:.2} m", distance_m)
    }
}
