//! Piece-state field codec.
//!
//! A piece's encoded state is a single string of fields joined by
//! separators: a run of one or more backslashes followed by a tab. The
//! backslash count encodes the piece's decorator nesting depth, so the
//! codec keeps every separator byte-for-byte and only ever swaps field
//! content. `parse` then `render` returns the input unchanged.

use regex_lite::Regex;
use std::sync::OnceLock;

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\+\t").expect("invalid separator pattern"))
}

/// The decomposed fields and separators of one piece state.
///
/// A state with `n` fields has `n - 1` separators; `separators[i]` sits
/// between `fields[i]` and `fields[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldedState {
    fields: Vec<String>,
    separators: Vec<String>,
}

impl FieldedState {
    /// Splits a state string into fields and the separators between them.
    ///
    /// Every string parses; a string with no separators is a single
    /// field. A trailing separator yields an empty final field.
    #[must_use]
    pub fn parse(state: &str) -> Self {
        let mut fields = Vec::new();
        let mut separators = Vec::new();
        let mut pos = 0;
        for sep in separator_re().find_iter(state) {
            fields.push(state[pos..sep.start()].to_string());
            separators.push(sep.as_str().to_string());
            pos = sep.end();
        }
        fields.push(state[pos..].to_string());
        Self { fields, separators }
    }

    /// Returns the field at `index`, if the state has that many fields.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Returns every field in order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns every separator in order.
    #[must_use]
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Reassembles the original state string.
    #[must_use]
    pub fn render(&self) -> String {
        self.assemble(None)
    }

    /// Reassembles the state with the field at `index` replaced.
    ///
    /// An out-of-range index leaves the state untouched.
    #[must_use]
    pub fn render_with(&self, index: usize, replacement: &str) -> String {
        debug_assert!(index < self.fields.len(), "field index out of range");
        self.assemble(Some((index, replacement)))
    }

    fn assemble(&self, replace: Option<(usize, &str)>) -> String {
        let mut out = String::new();
        for (i, field) in self.fields.iter().enumerate() {
            match replace {
                Some((index, replacement)) if index == i => out.push_str(replacement),
                _ => out.push_str(field),
            }
            if let Some(sep) = self.separators.get(i) {
                out.push_str(sep);
            }
        }
        out
    }
}

/// Renders a state string for logs, with control and non-ASCII
/// characters hex-escaped (a tab shows as `<09>`).
#[must_use]
pub fn printable(state: &str) -> String {
    let mut out = String::with_capacity(state.len());
    for ch in state.chars() {
        if (' '..='\u{7f}').contains(&ch) {
            out.push(ch);
        } else {
            out.push_str(&format!("<{:02x}>", ch as u32));
        }
    }
    out
}
