//! Keyword classification of test-case rows.
//!
//! A row is pulled into scope when its details text mentions any tracked
//! keyword, or when its sub-module is the Basic Information tab. In-scope
//! rows then pass through an ordered list of exclusion refinements; the
//! first matching refinement decides the outcome, and rows that survive
//! all of them are covered.

mod outcome;

pub use outcome::Outcome;

/// Keywords that pull a row into scope when they appear in "Test Case Details".
const SCOPE_KEYWORDS: &[&str] = &[
    "login",
    "generate po",
    "basic information",
    "basic details",
    "stepper",
    "save to draft",
    "save & next",
    "validation",
    "field",
    "remarks",
    "quantity tolerance",
    "tax",
    "charges",
    "supplier",
    "buyer",
];

/// Sub-module text that pulls a row into scope regardless of its details.
const SCOPE_SUB_MODULE: &str = "basic information";

/// One exclusion refinement over the lowercased details text.
struct Refinement {
    applies: fn(&str) -> bool,
    outcome: Outcome,
}

/// Evaluated top-to-bottom, first match wins.
const REFINEMENTS: &[Refinement] = &[
    Refinement {
        applies: |d| d.contains("unauthorized") || d.contains("without permissions"),
        outcome: Outcome::IgnoreUnauthorized,
    },
    Refinement {
        applies: |d| d.contains("edit") && d.contains("draft"),
        outcome: Outcome::IgnoreDraftEdit,
    },
    Refinement {
        applies: |d| d.contains("browser") || d.contains("screen size"),
        outcome: Outcome::IgnoreBrowserMatrix,
    },
];

/// Classify one row from its two free-text fields.
///
/// Pure and total: every pair of strings maps to exactly one [`Outcome`].
/// Matching is case-insensitive substring containment.
pub fn classify(details: &str, sub_module: &str) -> Outcome {
    let details = details.to_lowercase();
    let sub_module = sub_module.to_lowercase();

    let in_scope = SCOPE_KEYWORDS.iter().any(|kw| details.contains(*kw))
        || sub_module.contains(SCOPE_SUB_MODULE);
    if !in_scope {
        return Outcome::Ignore;
    }

    for rule in REFINEMENTS {
        if (rule.applies)(&details) {
            return rule.outcome;
        }
    }
    Outcome::Covered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_scope_rows_are_ignored() {
        assert_eq!(classify("Unrelated performance test", "Misc"), Outcome::Ignore);
        assert_eq!(classify("", ""), Outcome::Ignore);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify("LOGIN page test", "x"),
            classify("login page test", "x")
        );
        assert_eq!(classify("Check TAX amounts", "General"), Outcome::Covered);
    }

    #[test]
    fn sub_module_alone_pulls_row_into_scope() {
        assert_eq!(
            classify("verify something unrelated", "Basic Information"),
            Outcome::Covered
        );
    }

    #[test]
    fn refinements_apply_after_the_scope_check() {
        // mentions a browser, but nothing pulls it into scope first
        assert_eq!(classify("open homepage in any browser", "Misc"), Outcome::Ignore);
    }

    #[test]
    fn refinements_match_in_priority_order() {
        assert_eq!(
            classify("Login Unauthorized access test", "General"),
            Outcome::IgnoreUnauthorized
        );
        assert_eq!(
            classify("Edit Draft PO basic information", "Basic Information"),
            Outcome::IgnoreDraftEdit
        );
        assert_eq!(
            classify("Check field validation on different browser", "UI"),
            Outcome::IgnoreBrowserMatrix
        );
        assert_eq!(
            classify("Verify Save & Next button in stepper", "Navigation"),
            Outcome::Covered
        );
    }

    #[test]
    fn earlier_refinements_win_over_later_ones() {
        assert_eq!(
            classify("login without permissions on any browser", "x"),
            Outcome::IgnoreUnauthorized
        );
        assert_eq!(
            classify("edit a draft PO on a small screen size", "Basic Information"),
            Outcome::IgnoreDraftEdit
        );
    }

    #[test]
    fn labels_render_the_fixed_strings() {
        assert_eq!(Outcome::Ignore.as_str(), "Ignore");
        assert_eq!(
            Outcome::IgnoreUnauthorized.as_str(),
            "Ignore (Script does not test unauthorized users)"
        );
        assert_eq!(
            Outcome::IgnoreDraftEdit.as_str(),
            "Ignore (Script does not test editing Draft POs)"
        );
        assert_eq!(
            Outcome::IgnoreBrowserMatrix.as_str(),
            "Ignore (Script does not test multiple browsers or screen sizes)"
        );
        assert_eq!(
            Outcome::Covered.as_str(),
            "Covered: Automated by Playwright script for Basic Information tab and related navigation/validation."
        );
    }
}
