//! Rendering parsed sections back to text

use std::fmt;

use super::parser::PlanSection;

/// Serialize sections as numbered plan text.
///
/// Each section becomes `N. title`, followed by its body lines and then its
/// bullets as `- item`. Feeding the result back through
/// [`parse_plan`](super::parse_plan) yields the same sections as long as no
/// title, body line or bullet itself starts with a heading or bullet marker.
pub fn render_plan_text(sections: &[PlanSection]) -> String {
    let mut lines = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, section.title));
        lines.extend(section.body.iter().cloned());
        lines.extend(section.bullets.iter().map(|b| format!("- {}", b)));
    }

    lines.join("\n")
}

/// Terminal view: title, indented body, then bullets
impl fmt::Display for PlanSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.body {
            writeln!(f, "  {}", line)?;
        }
        for bullet in &self.bullets {
            writeln!(f, "  • {}", bullet)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::parse_plan;
    use proptest::prelude::*;

    fn sample_sections() -> Vec<PlanSection> {
        vec![
            PlanSection {
                title: "Overview".to_string(),
                bullets: vec!["Point A".to_string(), "Point B".to_string()],
                body: vec!["Some text".to_string()],
            },
            PlanSection {
                title: "Topics".to_string(),
                bullets: vec!["X".to_string()],
                body: vec![],
            },
        ]
    }

    #[test]
    fn test_render_plan_text() {
        let text = render_plan_text(&sample_sections());
        assert_eq!(
            text,
            "1. Overview\nSome text\n- Point A\n- Point B\n2. Topics\n- X"
        );
    }

    #[test]
    fn test_render_then_parse_is_stable() {
        let sections = sample_sections();
        assert_eq!(parse_plan(&render_plan_text(&sections)), sections);
    }

    #[test]
    fn test_reparse_of_parsed_reply_is_stable() {
        let reply = "Intro line\n- loose bullet\n1. Day 1\n* read\nnotes\n2) practice\n2. Day 2\n";
        let first = parse_plan(reply);
        let second = parse_plan(&render_plan_text(&first));
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_empty_sequence() {
        assert_eq!(render_plan_text(&[]), "");
        assert_eq!(parse_plan(&render_plan_text(&[])), vec![PlanSection::new("Plan")]);
    }

    #[test]
    fn test_display_section() {
        let rendered = sample_sections()[0].to_string();
        assert_eq!(rendered, "Overview\n  Some text\n  • Point A\n  • Point B\n");
    }

    fn section_strategy() -> impl Strategy<Value = PlanSection> {
        (
            "[A-Za-z]([A-Za-z0-9 :]{0,18}[A-Za-z0-9])?",
            prop::collection::vec("[A-Za-z]([A-Za-z0-9 ,]{0,18}[A-Za-z0-9])?", 0..4),
            prop::collection::vec("[A-Za-z0-9*•-]([A-Za-z0-9 ]{0,10}[A-Za-z])?", 0..4),
        )
            .prop_map(|(title, body, bullets)| PlanSection {
                title,
                bullets,
                body,
            })
    }

    proptest! {
        #[test]
        fn prop_render_then_parse_round_trips(
            sections in prop::collection::vec(section_strategy(), 1..6),
        ) {
            prop_assert_eq!(parse_plan(&render_plan_text(&sections)), sections);
        }

        #[test]
        fn prop_reparse_of_any_text_is_stable(text in any::<String>()) {
            let first = parse_plan(&text);
            prop_assert_eq!(parse_plan(&render_plan_text(&first)), first);
        }
    }
}
