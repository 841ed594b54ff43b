use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Bus,
    Tram,
    Generic,
}

pub struct CategoryStyle {
    pub color: String,
    pub icon: IconVariant,
}

/// Map a transit category code to a badge color and icon variant.
/// `overrides` is keyed by the resolved line label and replaces the
/// color unconditionally; the icon follows the code alone.
pub fn classify(
    category: &str,
    line_label: &str,
    overrides: &HashMap<String, String>,
) -> CategoryStyle {
    let code = category.to_uppercase();

    let builtin = match code.as_str() {
        "IC" | "IR" | "RE" => "#1e90ff",
        "S" | "R" => "#4caf50",
        "B" | "BUS" => "#ff9800",
        "TRAM" => "#ff5722",
        "T" => "#9c27b0",
        _ => "#607d8b",
    };

    let color = overrides
        .get(line_label)
        .cloned()
        .unwrap_or_else(|| builtin.to_string());

    let icon = match code.as_str() {
        "B" | "BUS" => IconVariant::Bus,
        "T" | "TRAM" => IconVariant::Tram,
        _ => IconVariant::Generic,
    };

    CategoryStyle { color, icon }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn train_codes_map_to_builtin_colors() {
        assert_eq!(classify("IC", "IC 5", &no_overrides()).color, "#1e90ff");
        assert_eq!(classify("s", "S31", &no_overrides()).color, "#4caf50");
        assert_eq!(classify("BUS", "31", &no_overrides()).color, "#ff9800");
        assert_eq!(classify("TRAM", "4", &no_overrides()).color, "#ff5722");
        assert_eq!(classify("T", "4", &no_overrides()).color, "#9c27b0");
    }

    #[test]
    fn unknown_code_falls_back_to_neutral() {
        let style = classify("FUN", "F1", &no_overrides());

        assert_eq!(style.color, "#607d8b");
        assert_eq!(style.icon, IconVariant::Generic);
    }

    #[test]
    fn icon_variant_follows_code() {
        assert_eq!(classify("B", "31", &no_overrides()).icon, IconVariant::Bus);
        assert_eq!(classify("bus", "31", &no_overrides()).icon, IconVariant::Bus);
        assert_eq!(classify("T", "4", &no_overrides()).icon, IconVariant::Tram);
        assert_eq!(
            classify("TRAM", "4", &no_overrides()).icon,
            IconVariant::Tram
        );
        assert_eq!(
            classify("IC", "IC 5", &no_overrides()).icon,
            IconVariant::Generic
        );
    }

    #[test]
    fn override_replaces_color_but_not_icon() {
        let overrides = HashMap::from([("31".to_string(), "#123456".to_string())]);
        let style = classify("B", "31", &overrides);

        assert_eq!(style.color, "#123456");
        assert_eq!(style.icon, IconVariant::Bus);
    }

    #[test]
    fn override_is_keyed_by_line_label_not_code() {
        let overrides = HashMap::from([("B".to_string(), "#123456".to_string())]);
        let style = classify("B", "31", &overrides);

        assert_eq!(style.color, "#ff9800");
    }
}
