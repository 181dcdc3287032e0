//! `tilawa prayer-times`

use crate::error::{CliError, Result};
use chrono::{Duration, NaiveTime};
use std::io::Write;
use tilawa_core::{ContentProvider, Label, Language};

/// Print today's prayer times for a location and the next prayer after `now`
pub async fn run(
    provider: &dyn ContentProvider,
    language: Language,
    latitude: f64,
    longitude: f64,
    now: NaiveTime,
    out: &mut impl Write,
) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(CliError::InvalidArgument(format!(
            "coordinates out of range: {latitude}, {longitude}"
        )));
    }

    let times = provider.fetch_prayer_times(latitude, longitude).await?;
    let hijri = &times.date.hijri;

    writeln!(out, "{}", times.date.readable)?;
    writeln!(
        out,
        "{} {} {} {}",
        hijri.day,
        hijri.month.en,
        hijri.year,
        language.label(Label::Hijri)
    )?;
    for (prayer, time) in times.entries() {
        writeln!(out, "{:<8} {time}", language.label(Label::Prayer(prayer)))?;
    }

    if let Some(next) = times.next_after(now) {
        writeln!(
            out,
            "{}: {} {} ({}: {})",
            language.label(Label::NextPrayer),
            language.label(Label::Prayer(next.prayer)),
            next.time,
            language.label(Label::TimeRemaining),
            format_remaining(next.remaining)
        )?;
    }

    Ok(())
}

/// "1h 50m", or just "5m" under an hour
fn format_remaining(remaining: Duration) -> String {
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_time_format() {
        assert_eq!(format_remaining(Duration::minutes(110)), "1h 50m");
        assert_eq!(format_remaining(Duration::minutes(5)), "5m");
        assert_eq!(format_remaining(Duration::seconds(59)), "0m");
        assert_eq!(format_remaining(Duration::hours(7)), "7h 0m");
    }
}
