//! Line disruption status.

use std::fmt;

use super::Color;

/// Label shown when the line reports no disruptions.
const GOOD_SERVICE: &str = "Good Service";

/// Display class of a disruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Good,
    Minor,
    Severe,
    PartSuspended,
    /// A closure code we don't recognise.
    Other,
}

impl Severity {
    /// Swatch colour for this severity.
    pub fn color(self) -> Color {
        match self {
            Severity::Good => Color::GREEN,
            Severity::Minor => Color::YELLOW,
            Severity::Severe => Color::RED,
            Severity::PartSuspended => Color::BLUE,
            Severity::Other => Color::MAGENTA,
        }
    }
}

/// Current service status of the configured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisruptionStatus {
    pub label: String,
    pub severity: Severity,
}

impl DisruptionStatus {
    /// Status for a line with no reported disruptions.
    pub fn good_service() -> Self {
        Self {
            label: GOOD_SERVICE.to_string(),
            severity: Severity::Good,
        }
    }

    /// Classify a raw closure code such as `"minorDelays"`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unknown codes degrade to [`Severity::Other`] with a title-cased label.
    ///
    /// ```
    /// use tube_board::domain::{DisruptionStatus, Severity};
    ///
    /// let status = DisruptionStatus::from_closure_text("minorDelays");
    /// assert_eq!(status.label, "Minor Delays");
    /// assert_eq!(status.severity, Severity::Minor);
    ///
    /// let status = DisruptionStatus::from_closure_text("plannedClosure");
    /// assert_eq!(status.label, "Plannedclosure");
    /// assert_eq!(status.severity, Severity::Other);
    /// ```
    pub fn from_closure_text(raw: &str) -> Self {
        let code = raw.trim().to_lowercase();
        let (label, severity) = match code.as_str() {
            "severedelays" => ("Severe Delays".to_string(), Severity::Severe),
            "minordelays" => ("Minor Delays".to_string(), Severity::Minor),
            "partsuspended" => ("Part Suspended".to_string(), Severity::PartSuspended),
            _ => (title_case(&code), Severity::Other),
        };
        Self { label, severity }
    }

    pub fn color(&self) -> Color {
        self.severity.color()
    }
}

impl Default for DisruptionStatus {
    fn default() -> Self {
        Self::good_service()
    }
}

impl fmt::Display for DisruptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        let s = DisruptionStatus::from_closure_text("severeDelays");
        assert_eq!(s.label, "Severe Delays");
        assert_eq!(s.severity, Severity::Severe);

        let s = DisruptionStatus::from_closure_text("  PartSuspended ");
        assert_eq!(s.label, "Part Suspended");
        assert_eq!(s.severity, Severity::PartSuspended);

        let s = DisruptionStatus::from_closure_text("minorDelays");
        assert_eq!(s.label, "Minor Delays");
        assert_eq!(s.severity, Severity::Minor);
    }

    #[test]
    fn unknown_code_is_title_cased() {
        let s = DisruptionStatus::from_closure_text("part closure");
        assert_eq!(s.label, "Part Closure");
        assert_eq!(s.severity, Severity::Other);
    }

    #[test]
    fn title_case_breaks_on_non_letters() {
        assert_eq!(title_case("2nd-platform"), "2Nd-Platform");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn severity_colours_are_distinct() {
        let colours = [
            Severity::Good.color(),
            Severity::Minor.color(),
            Severity::Severe.color(),
            Severity::PartSuspended.color(),
            Severity::Other.color(),
        ];
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(DisruptionStatus::good_service().color(), Color::GREEN);
    }
}
