//! Timestamp rendering for transcript lines.

/// How segment boundary times are rendered in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// Seconds with two decimal places, e.g. `90.00`.
    #[default]
    Seconds,
    /// Minutes with two decimal places, e.g. `1.50`.
    Minutes,
    /// `HH:MM:SS`, truncated to whole seconds, hours unbounded.
    HourMinuteSecond,
}

impl TimestampFormat {
    /// Parse a format name.
    ///
    /// Unrecognized values silently fall back to `Seconds`; a bad format
    /// string degrades the output, it never fails a file.
    pub fn parse(s: &str) -> Self {
        match s {
            "minutes" => TimestampFormat::Minutes,
            "hour-minute-second" => TimestampFormat::HourMinuteSecond,
            _ => TimestampFormat::Seconds,
        }
    }

    /// Render both boundary labels of a segment.
    pub fn format_pair(&self, start: f64, end: f64) -> (String, String) {
        (self.format_time(start), self.format_time(end))
    }

    /// Render a single time under this format.
    pub fn format_time(&self, t: f64) -> String {
        match self {
            TimestampFormat::Seconds => format!("{:.2}", t),
            TimestampFormat::Minutes => format!("{:.2}", t / 60.0),
            TimestampFormat::HourMinuteSecond => {
                // Truncate, not round: 59.9s renders as 00:00:59
                let total = t as u64;
                let hours = total / 3600;
                let minutes = (total % 3600) / 60;
                let seconds = total % 60;
                format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
            }
        }
    }
}

impl std::fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampFormat::Seconds => write!(f, "seconds"),
            TimestampFormat::Minutes => write!(f, "minutes"),
            TimestampFormat::HourMinuteSecond => write!(f, "hour-minute-second"),
        }
    }
}
