//! Unit conversion utilities.
//!
//! All PresentationML coordinates and extents are expressed in EMUs
//! (English Metric Units); font sizes appear in hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMUs.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to EMUs.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// Convert a point size to the hundredths-of-a-point value used by the
/// `sz` attribute of `<a:rPr>`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(2.5), 2_286_000);
        assert_eq!(inches_to_emu(0.75), 685_800);
    }

    #[test]
    fn test_pt_conversions() {
        assert_eq!(pt_to_emu(1.0), 12_700);
        assert_eq!(pt_to_centipoints(44.0), 4400);
        assert_eq!(pt_to_centipoints(18.0), 1800);
    }
}
