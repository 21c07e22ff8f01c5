use std::fmt::{self, Debug, Formatter};

/// Debugs as the contained string, without quotes or escapes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders `items` in the `#{a, b, c}` form shared by the sets in this crate.
pub fn set_literal<I: Iterator<Item = String>>(items: I) -> String {
    format!("#{{{}}}", items.collect::<Vec<String>>().join(", "))
}
