//! The structured explanation returned to clients, and parsing of the
//! model's free text into it.

use serde::{Deserialize, Serialize};

/// Section headers the prompt asks the model to emit, in order
pub const SECTION_HEADERS: [&str; 6] = [
    "1. SIMPLE SUMMARY",
    "2. SCIENTIFIC EXPLANATION",
    "3. BIOLOGICAL IMPACT",
    "4. WHAT YOUR DAY FEELS LIKE",
    "5. RISKS & ANOMALIES",
    "6. FUN FACT",
];

/// Narrative explanation of a simulated weather state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeSections {
    pub summary: String,
    pub scientific: String,
    pub biological: String,
    pub comfort_index: u8,
    pub day_feeling: String,
    pub risks: String,
    pub fun_fact: String,
}

impl NarrativeSections {
    /// Placeholder used when the request carried nothing to explain.
    pub fn unavailable() -> Self {
        Self {
            summary: "Unable to generate summary.".to_string(),
            scientific: "Data unavailable.".to_string(),
            biological: "Unknown impact.".to_string(),
            comfort_index: 50,
            day_feeling: "Data unavailable.".to_string(),
            risks: "Unknown risks.".to_string(),
            fun_fact: "Simulation data required.".to_string(),
        }
    }

    /// True when every text section is empty, i.e. the model ignored the format.
    pub fn is_blank(&self) -> bool {
        [
            &self.summary,
            &self.scientific,
            &self.biological,
            &self.day_feeling,
            &self.risks,
            &self.fun_fact,
        ]
        .iter()
        .all(|s| s.is_empty())
    }
}

/// Text between `start_marker` and `end_marker`, trimmed.
///
/// Empty if the start marker is missing. Runs to the end of `text` when
/// `end_marker` is `None` or cannot be found after the start.
pub fn extract_section(text: &str, start_marker: &str, end_marker: Option<&str>) -> String {
    let Some(start) = text.find(start_marker) else {
        return String::new();
    };
    let content_start = start + start_marker.len();
    let rest = &text[content_start..];

    let content = match end_marker.and_then(|end| rest.find(end)) {
        Some(end) => &rest[..end],
        None => rest,
    };

    content.trim().to_string()
}

/// Split a model response into sections.
pub fn parse_sections(text: &str, comfort_index: u8) -> NarrativeSections {
    let section = |i: usize| extract_section(text, SECTION_HEADERS[i], SECTION_HEADERS.get(i + 1).copied());

    NarrativeSections {
        summary: section(0),
        scientific: section(1),
        biological: section(2),
        day_feeling: section(3),
        risks: section(4),
        fun_fact: section(5),
        comfort_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = "\
1. SIMPLE SUMMARY
It is mild and breezy.

2. SCIENTIFIC EXPLANATION
Thin air lets wind accelerate.

3. BIOLOGICAL IMPACT
Birds struggle to glide.

4. WHAT YOUR DAY FEELS LIKE
Cool with a steady breeze.

5. RISKS & ANOMALIES
None worth noting.

6. FUN FACT
Mars has dust devils taller than Everest.
";

    #[test]
    fn test_extract_between_markers() {
        let s = extract_section(RESPONSE, "1. SIMPLE SUMMARY", Some("2. SCIENTIFIC EXPLANATION"));
        assert_eq!(s, "It is mild and breezy.");
    }

    #[test]
    fn test_extract_missing_start_is_empty() {
        assert_eq!(extract_section("nothing here", "1. SIMPLE SUMMARY", None), "");
    }

    #[test]
    fn test_extract_missing_end_runs_to_end() {
        let s = extract_section("1. SIMPLE SUMMARY  hello there ", "1. SIMPLE SUMMARY", Some("2. X"));
        assert_eq!(s, "hello there");
    }

    #[test]
    fn test_extract_end_before_start_is_ignored() {
        let text = "2. NEXT early 1. START body";
        assert_eq!(extract_section(text, "1. START", Some("2. NEXT")), "body");
    }

    #[test]
    fn test_parse_all_sections() {
        let sections = parse_sections(RESPONSE, 77);
        assert_eq!(sections.summary, "It is mild and breezy.");
        assert_eq!(sections.scientific, "Thin air lets wind accelerate.");
        assert_eq!(sections.biological, "Birds struggle to glide.");
        assert_eq!(sections.day_feeling, "Cool with a steady breeze.");
        assert_eq!(sections.risks, "None worth noting.");
        assert_eq!(sections.fun_fact, "Mars has dust devils taller than Everest.");
        assert_eq!(sections.comfort_index, 77);
        assert!(!sections.is_blank());
    }

    #[test]
    fn test_unformatted_response_is_blank() {
        assert!(parse_sections("The weather is nice.", 50).is_blank());
    }

    #[test]
    fn test_sections_json_shape() {
        let json = serde_json::to_value(NarrativeSections::unavailable()).unwrap();
        assert_eq!(json["comfortIndex"], 50);
        assert_eq!(json["dayFeeling"], "Data unavailable.");
        assert_eq!(json["funFact"], "Simulation data required.");
    }
}
