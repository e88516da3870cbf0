//! Names the resource a request is about, for client-facing messages.

use std::fmt;

/// Resource kind plus identifier, e.g. event `999`.
///
/// Displays as `Event '999'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    kind: &'static str,
    id: String,
}

impl ResourceRef {
    /// Build a reference from a lowercase kind and any displayable id.
    pub fn new(kind: &'static str, id: impl fmt::Display) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }

    /// Lowercase resource kind.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Identifier as text.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Kind with its first letter capitalised.
    pub fn display_kind(&self) -> String {
        let mut chars = self.kind.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.display_kind(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("event", "1", "Event '1'")]
    #[case("financial summary", "5", "Financial summary '5'")]
    #[case("", "x", " 'x'")]
    fn displays_capitalised_kind(
        #[case] kind: &'static str,
        #[case] id: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(ResourceRef::new(kind, id).to_string(), expected);
    }
}
