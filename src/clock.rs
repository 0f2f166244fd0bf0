#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClockStyle {
    TwentyFourHour,
    TwelveHour,
}

/// Format an hour/minute pair the way the watch shows it: no leading zero on
/// the hour, always two digits for the minutes.
pub fn format_clock(hour: u32, minute: u32, style: ClockStyle) -> String {
    let hour = match style {
        ClockStyle::TwentyFourHour => hour % 24,
        ClockStyle::TwelveHour => match hour % 12 {
            0 => 12,
            h => h,
        },
    };
    format!("{}:{:02}", hour, minute)
}
