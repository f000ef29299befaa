/// Number of digits after the decimal point in reported averages.
pub const AVERAGE_DECIMALS: usize = 3;

/// Format `value` with exactly `decimals` digits after the decimal point.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(0.2, 3), "0.200");
/// assert_eq!(format_decimal(1.23456, 2), "1.23");
/// assert_eq!(format_decimal(7.0, 0), "7");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format an average response time the way the report shows it.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_average;
///
/// assert_eq!(format_average(0.2), "0.200");
/// assert_eq!(format_average(0.0), "0.000");
/// ```
pub fn format_average(value: f64) -> String {
    format_decimal(value, AVERAGE_DECIMALS)
}
