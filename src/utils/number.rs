/// Lenient decimal parsing: missing, empty or invalid input counts as 0.
/// A comma decimal separator is accepted ("12,5").
pub fn parse_amount(input: Option<&str>) -> f64 {
    input
        .map(|s| s.trim().replace(',', "."))
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Like [`parse_amount`] but negative values are also treated as invalid.
pub fn parse_non_negative(input: Option<&str>) -> f64 {
    let v = parse_amount(input);
    if v < 0.0 { 0.0 } else { v }
}
