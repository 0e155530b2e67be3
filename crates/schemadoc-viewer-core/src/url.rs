//! URL conventions of the generated site.
//!
//! Function pages come in a `_text.html` / `_visual.html` pair and mode
//! switching is nothing but a suffix substitution on whatever URL is
//! currently loaded. Pages outside the pair (the index, table pages) carry
//! neither suffix; rewriting them yields `None` and callers leave such URLs
//! untouched rather than treating them as errors.

use crate::mode::ViewMode;

/// Filename suffix of DDL text pages.
pub const TEXT_SUFFIX: &str = "_text.html";
/// Filename suffix of diagram pages.
pub const VISUAL_SUFFIX: &str = "_visual.html";

/// Which page variant a URL points at, if either.
pub fn variant_of(url: &str) -> Option<ViewMode> {
    if url.contains(TEXT_SUFFIX) {
        Some(ViewMode::Text)
    } else if url.contains(VISUAL_SUFFIX) {
        Some(ViewMode::Visual)
    } else {
        None
    }
}

/// Rewrite `url` to the `mode` variant by substituting the opposite
/// suffix. Only the first occurrence is substituted.
///
/// Returns `None` when the opposite suffix is absent, which covers both a
/// URL already in `mode` and a URL outside the page pair entirely. Callers
/// skip the assignment in that case so pages never reload onto themselves.
pub fn rewrite_variant(url: &str, mode: ViewMode) -> Option<String> {
    let from = mode.toggled().suffix();
    if !url.contains(from) {
        return None;
    }
    Some(url.replacen(from, mode.suffix(), 1))
}

/// Flip whichever variant suffix `url` carries, `None` if it carries
/// neither.
pub fn toggle_variant(url: &str) -> Option<String> {
    rewrite_variant(url, variant_of(url)?.toggled())
}

/// Relative URL of a function's page in the given mode, as linked from the
/// navigation menu.
pub fn function_page_url(function: &str, mode: ViewMode) -> String {
    format!("output/functions/{function}{}", mode.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_of_recognizes_both_suffixes() {
        assert_eq!(
            variant_of("output/functions/report_text.html"),
            Some(ViewMode::Text)
        );
        assert_eq!(
            variant_of("output/functions/report_visual.html"),
            Some(ViewMode::Visual)
        );
        assert_eq!(variant_of("output/tables/users.html"), None);
        assert_eq!(variant_of("index.html"), None);
    }

    #[test]
    fn test_rewrite_to_opposite_variant() {
        let url = "output/functions/report_text.html";
        assert_eq!(
            rewrite_variant(url, ViewMode::Visual).as_deref(),
            Some("output/functions/report_visual.html")
        );
    }

    #[test]
    fn test_rewrite_to_current_variant_is_a_no_op() {
        // The URL is already a text page: there is no `_visual.html` to
        // substitute, so no assignment (and no reload) should happen.
        assert_eq!(
            rewrite_variant("output/functions/report_text.html", ViewMode::Text),
            None
        );
    }

    #[test]
    fn test_rewrite_outside_the_pair_is_a_no_op() {
        assert_eq!(rewrite_variant("output/tables/users.html", ViewMode::Text), None);
        assert_eq!(rewrite_variant("output/tables/users.html", ViewMode::Visual), None);
        assert_eq!(rewrite_variant("", ViewMode::Visual), None);
    }

    #[test]
    fn test_rewrite_substitutes_only_the_first_occurrence() {
        assert_eq!(
            rewrite_variant("docs_text.html/sub/fn_text.html", ViewMode::Visual).as_deref(),
            Some("docs_visual.html/sub/fn_text.html")
        );
    }

    #[test]
    fn test_toggle_round_trips() {
        let text = "output/functions/report_text.html";
        let visual = toggle_variant(text);
        assert_eq!(visual.as_deref(), Some("output/functions/report_visual.html"));
        let back = toggle_variant(&visual.unwrap());
        assert_eq!(back.as_deref(), Some(text));
    }

    #[test]
    fn test_toggle_outside_the_pair_is_a_no_op() {
        assert_eq!(toggle_variant("index.html"), None);
        assert_eq!(toggle_variant("about:blank"), None);
    }

    #[test]
    fn test_function_page_url_uses_mode_suffix() {
        assert_eq!(
            function_page_url("fn_report", ViewMode::Text),
            "output/functions/fn_report_text.html"
        );
        assert_eq!(
            function_page_url("fn_report", ViewMode::Visual),
            "output/functions/fn_report_visual.html"
        );
    }
}
