//! Text formatting utilities for the saga viewer.

use sysinfo::{System, RefreshKind, ProcessRefreshKind, Pid};

/// Formats a year with thousands separators; negative years keep their sign.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_year(7000), "7,000");
/// assert_eq!(format_year(-12500), "-12,500");
/// ```
pub fn format_year(year: i64) -> String {
    let digits = year.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if year < 0 {
        result.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(0), "0");
        assert_eq!(format_year(90), "90");
        assert_eq!(format_year(2000), "2,000");
        assert_eq!(format_year(1234567), "1,234,567");
        assert_eq!(format_year(-12500), "-12,500");
        assert_eq!(format_year(-5), "-5");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
