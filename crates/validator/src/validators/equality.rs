//! Equality rule, e.g. password confirmation

use crate::foundation::Value;

crate::rule! {
    /// Requires the value to equal `other` exactly (no coercion: `"5"` does
    /// not equal `5`).
    ///
    /// The rule captures `other` when it is built. Rebuild it when the value
    /// being confirmed changes.
    pub Matches { other: Value };
    kind: Matches;
    message { "Fields do not match" }
    rule(self, input) { *input == self.other }
    fn matches;
}
