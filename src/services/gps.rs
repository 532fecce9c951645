/// Convert a decimal-degree coordinate to a "degrees minutes seconds" string.
///
/// The flag is true when the input is strictly positive; the caller uses it to
/// pick the N/S or E/W reference tag. Exactly zero lands on the S/W side.
pub fn to_dms(decimal: f64) -> (String, bool) {
    let total_seconds = decimal.abs() * 3600.0;
    let whole_minutes = (total_seconds / 60.0).floor();
    let seconds = total_seconds - whole_minutes * 60.0;
    let degrees = (whole_minutes / 60.0).floor();
    let minutes = whole_minutes - degrees * 60.0;

    (
        format!("{} {} {:.3}", degrees as i64, minutes as i64, seconds),
        decimal > 0.0,
    )
}
