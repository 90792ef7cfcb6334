/// Text shown next to a field widget plus its hover tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLabel {
    pub text: String,
    pub tooltip: String,
}

impl FieldLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip: String::new(),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// The explicit `label` when non-empty, otherwise the nicified field name.
    pub fn resolve(label: &str, field_name: &str, tooltip: &str) -> Self {
        let text = if label.is_empty() {
            nicify(field_name)
        } else {
            label.to_string()
        };
        Self {
            text,
            tooltip: tooltip.to_string(),
        }
    }
}

/// Turn a field identifier into a display name: `maxSpeed` -> `Max Speed`,
/// `m_hull_color` -> `Hull Color`, `kMaxCrew` -> `Max Crew`.
pub fn nicify(name: &str) -> String {
    let name = name.strip_prefix("m_").unwrap_or(name).trim_start_matches('_');
    let name = match name.strip_prefix('k') {
        Some(rest) if rest.starts_with(char::is_uppercase) => rest,
        _ => name,
    };

    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let (Some(&prev), false) = (i.checked_sub(1).and_then(|p| chars.get(p)), current.is_empty()) {
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (c.is_uppercase() && (prev.is_lowercase() || prev.is_ascii_digit()))
                || (c.is_uppercase() && prev.is_uppercase() && next_lower)
                || (c.is_ascii_digit() && prev.is_alphabetic())
                || (c.is_alphabetic() && prev.is_ascii_digit());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nicify_common_styles() {
        assert_eq!(nicify("maxSpeed"), "Max Speed");
        assert_eq!(nicify("m_hull_color"), "Hull Color");
        assert_eq!(nicify("_target"), "Target");
        assert_eq!(nicify("kMaxCrew"), "Max Crew");
        assert_eq!(nicify("keepAlive"), "Keep Alive");
        assert_eq!(nicify("HTTPServer"), "HTTP Server");
        assert_eq!(nicify("player2Name"), "Player 2 Name");
        assert_eq!(nicify("speed"), "Speed");
        assert_eq!(nicify(""), "");
    }

    #[test]
    fn explicit_label_wins() {
        let label = FieldLabel::resolve("Top speed", "max_speed", "Units per second");
        assert_eq!(label.text, "Top speed");
        assert_eq!(label.tooltip, "Units per second");
        assert_eq!(FieldLabel::resolve("", "max_speed", "").text, "Max Speed");
    }
}
