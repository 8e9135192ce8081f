/// Formats a duration the way chart axes show it: whole milliseconds below
/// one second, seconds with one decimal from there on.
pub fn format_duration(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.1}s", ms / 1000.0)
    } else {
        format!("{ms:.0}ms")
    }
}
