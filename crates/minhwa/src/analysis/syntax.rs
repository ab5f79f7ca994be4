// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Component-level syntax checks.
//!
//! Emphasis in SD-style prompts is expressed with nested parentheses and
//! brackets; long literal runs of them in component content are almost
//! always authoring mistakes. Denylisted content is flagged at high
//! severity.

use smallvec::SmallVec;

use super::lexicon::BLOCKED_TERMS;
use super::report::{PromptWarning, Severity, WarningKind};
use crate::component::PromptComponent;

/// Parenthesis run length considered excessive.
const PAREN_RUN: usize = 4;
/// Bracket run length considered excessive.
const BRACKET_RUN: usize = 3;

/// Longest run of any single character from `chars` in `text`.
fn longest_run(text: &str, chars: &[char]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if chars.contains(&c) && previous == Some(c) {
            current += 1;
        } else if chars.contains(&c) {
            current = 1;
        } else {
            current = 0;
        }
        previous = Some(c);
        longest = longest.max(current);
    }
    longest
}

/// Check a single component's content for syntax problems.
///
/// Total: never fails, returns zero or more warnings tied to the
/// component's id.
pub fn validate_component_syntax(component: &PromptComponent) -> SmallVec<[PromptWarning; 2]> {
    let mut warnings = SmallVec::new();

    if longest_run(&component.content, &['(', ')']) >= PAREN_RUN {
        warnings.push(
            PromptWarning::new(
                WarningKind::Quality,
                Severity::Medium,
                "excessive emphasis brackets",
            )
            .for_component(component.id),
        );
    }
    if longest_run(&component.content, &['[', ']']) >= BRACKET_RUN {
        warnings.push(
            PromptWarning::new(
                WarningKind::Quality,
                Severity::Low,
                "excessive de-emphasis brackets",
            )
            .for_component(component.id),
        );
    }

    let lower = component.content.to_lowercase();
    if let Some(term) = BLOCKED_TERMS.iter().find(|t| lower.contains(*t)) {
        warnings.push(
            PromptWarning::new(
                WarningKind::Quality,
                Severity::High,
                format!("blocked term '{term}' in component content"),
            )
            .for_component(component.id),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentType;

    fn component(content: &str) -> PromptComponent {
        PromptComponent::new(ComponentType::Subject, content)
    }

    #[test]
    fn test_clean_content_passes() {
        assert!(validate_component_syntax(&component("((a cat))")).is_empty());
        assert!(validate_component_syntax(&component("[[dim]]")).is_empty());
    }

    #[test]
    fn test_excessive_parens() {
        let warnings = validate_component_syntax(&component("((((a cat))))"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Medium);
    }

    #[test]
    fn test_excessive_brackets() {
        let warnings = validate_component_syntax(&component("[[[dim]]]"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Low);
    }

    #[test]
    fn test_blocked_term_high_severity() {
        let warnings = validate_component_syntax(&component("gore everywhere"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::High);
        assert_eq!(warnings[0].kind, WarningKind::Quality);
    }

    #[test]
    fn test_longest_run_counts_per_char() {
        // runs count per character: "))" is the longest here
        assert_eq!(longest_run("())(", &['(', ')']), 2);
        assert_eq!(longest_run("((((", &['(', ')']), 4);
        assert_eq!(longest_run("", &['(', ')']), 0);
    }
}
