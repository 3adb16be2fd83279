//! Font descriptor for the coordinate overlay.

/// Font configuration for overlay text.
///
/// Resolved once from config when the surface is initialized and handed to
/// the painter on every overlay draw.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Arial", "Sans", "DejaVu Sans")
    pub family: String,

    /// Font weight ("normal", "bold", ...)
    pub weight: String,

    /// Size in points
    pub size: f64,
}

impl Default for FontDescriptor {
    /// 32pt Arial.
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            weight: "normal".to_string(),
            size: 32.0,
        }
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, weight: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            size,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Weight Size", with the weight omitted when normal.
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", self.size.round() as i32));

        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        assert_eq!(FontDescriptor::default().to_pango_string(), "Arial 32");
    }

    #[test]
    fn test_pango_string_bold() {
        let font = FontDescriptor::new("DejaVu Sans", "bold", 18.4);
        assert_eq!(font.to_pango_string(), "DejaVu Sans Bold 18");
    }
}
