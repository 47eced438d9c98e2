//! Form field value objects

use chrono::NaiveTime;

/// Wire and display format of time-of-day inputs
pub const TIME_FORMAT: &str = "%H:%M";

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Raw text of a numeric input, kept and sent exactly as typed
    Number(String),
    /// Raw `HH:MM` text of a time-of-day input
    Time(String),
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Why a field blocks submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    BadNumber,
    BadTime,
    Unselected,
    NoFile,
}

impl FieldProblem {
    /// Hint shown on the status line, worded like the browser's native one
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Missing => "Please fill out this field.",
            Self::BadNumber => "Please enter a number.",
            Self::BadTime => "Please enter a valid time.",
            Self::Unselected => "Please select an item in the list.",
            Self::NoFile => "Please select a file.",
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
    pub required: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            required,
        }
    }

    /// Create a new numeric field
    pub fn number(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Number(String::new()),
            required: true,
        }
    }

    /// Create a new time-of-day field
    pub fn time(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: "--:--".to_string(),
            value: FieldValue::Time(String::new()),
            required: true,
        }
    }

    /// Create a new select field
    pub fn choice(
        name: &str,
        label: &str,
        placeholder: &str,
        options: &'static [&'static str],
        selected: Option<usize>,
        required: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Choice { options, selected },
            required,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the raw value (selected label for choice fields, empty when none)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) | FieldValue::Time(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i).copied())
                .unwrap_or(""),
        }
    }

    /// Get the selected option index (None for non-choice fields)
    pub fn selected(&self) -> Option<usize> {
        match &self.value {
            FieldValue::Choice { selected, .. } => *selected,
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match &self.value {
            FieldValue::Time(s) => NaiveTime::parse_from_str(s, TIME_FORMAT).ok(),
            _ => None,
        }
    }

    /// Replace the raw value of a text, number or time field
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Number(s) | FieldValue::Time(s) => *s = value,
            FieldValue::Choice { .. } => {}
        }
    }

    /// Select an option by index (None clears the selection)
    pub fn select(&mut self, index: Option<usize>) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = index.filter(|i| *i < options.len());
        }
    }

    /// The option next to the current one, wrapping. None for non-choice fields.
    pub fn next_option(&self, forward: bool) -> Option<usize> {
        let FieldValue::Choice { options, selected } = &self.value else {
            return None;
        };
        let count = options.len();
        if count == 0 {
            return None;
        }
        Some(match (*selected, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(0), false) => count - 1,
            (Some(i), false) => i - 1,
        })
    }

    /// The value after typing `c`, or None when the input rejects it
    pub fn with_char(&self, c: char) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => Some(format!("{s}{c}")),
            FieldValue::Number(s) => {
                (c.is_ascii_digit() || c == '.' || (c == '-' && s.is_empty()))
                    .then(|| format!("{s}{c}"))
            }
            FieldValue::Time(s) => {
                ((c.is_ascii_digit() || c == ':') && s.len() < 5).then(|| format!("{s}{c}"))
            }
            // Selects are driven by next_option(), not typing
            FieldValue::Choice { .. } => None,
        }
    }

    /// The value after a backspace, or None when there is nothing to remove
    pub fn without_last_char(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) | FieldValue::Time(s) => {
                let mut value = s.clone();
                value.pop().map(|_| value)
            }
            FieldValue::Choice { .. } => None,
        }
    }

    /// Check the field the way a browser checks a constrained input
    pub fn problem(&self) -> Option<FieldProblem> {
        match &self.value {
            FieldValue::Text(s) => (self.required && s.is_empty()).then_some(FieldProblem::Missing),
            FieldValue::Number(s) if s.is_empty() => {
                self.required.then_some(FieldProblem::Missing)
            }
            FieldValue::Number(s) => (!is_number(s)).then_some(FieldProblem::BadNumber),
            FieldValue::Time(s) if s.is_empty() => self.required.then_some(FieldProblem::Missing),
            FieldValue::Time(_) => self.as_time().is_none().then_some(FieldProblem::BadTime),
            FieldValue::Choice { selected, .. } => {
                (self.required && selected.is_none()).then_some(FieldProblem::Unselected)
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Choice { selected: None, .. } => String::new(),
            FieldValue::Choice { .. } => format!("◀ {} ▶", self.as_text()),
            _ => self.as_text().to_string(),
        }
    }
}

/// Accepts what a browser number input accepts; the text itself is sent as typed
fn is_number(raw: &str) -> bool {
    raw.parse::<f64>().is_ok_and(f64::is_finite)
}
