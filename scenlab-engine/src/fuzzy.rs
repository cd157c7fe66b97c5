//! Fuzzy content comparison.
//!
//! Generated label content carries shared style blocks that churn with
//! every stylesheet tweak. Comparing states verbatim would flag every
//! label as updated after such a tweak, so callers can opt into a
//! comparison that ignores `<style>` blocks on both sides.

use regex_lite::Regex;
use std::sync::OnceLock;

fn style_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("invalid style block pattern")
    })
}

/// Removes volatile markup that must not count as a content change.
#[must_use]
pub(crate) fn strip_volatile(state: &str) -> String {
    style_block_re().replace_all(state, "").into_owned()
}

/// Compares two states, fuzzily when asked to.
pub(crate) fn states_equal(current: &str, new: &str, fuzzy: bool) -> bool {
    if fuzzy {
        strip_volatile(current) == strip_volatile(new)
    } else {
        current == new
    }
}
