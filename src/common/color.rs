use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the
/// range 0-255. Serialized to DrawingML as an uppercase six-digit hex value
/// (`<a:srgbClr val="4682B4"/>`).
///
/// # Examples
///
/// ```rust
/// use longan::RGBColor;
///
/// let steel_blue = RGBColor::new(70, 130, 180);
/// assert_eq!(steel_blue.to_hex(), "4682B4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (e.g., "FF0000" or "#FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = RGBColor::from_hex("#DC143C").unwrap();
        assert_eq!(color, RGBColor::new(220, 20, 60));
        assert_eq!(color.to_hex(), "DC143C");
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(RGBColor::from_hex("fff").is_none());
        assert!(RGBColor::from_hex("GGGGGG").is_none());
    }
}
