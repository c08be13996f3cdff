//! Node classification.

use strata_value::Value;

/// How the walker treats a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// `Undefined`, `Null` and every other primitive.
    NotObject,
    /// Any callable kind. Never descended by the iterator walker.
    Callable,
    /// Plain key/value record.
    Record,
    /// Ordered, integer-indexed sequence.
    Sequence,
    /// Map or set. The container handle tells them apart.
    AssocOrSet,
    /// Object-like but none of the above, such as an opaque built-in.
    Unclassified,
}

impl Category {
    /// Whether nodes of this category have walkable children.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Category::Record | Category::Sequence | Category::AssocOrSet
        )
    }

    pub fn is_object(self) -> bool {
        self != Category::NotObject
    }
}

/// Classify `value`. Pure; classifying the same value twice gives the same
/// category.
pub fn classify(value: &Value) -> Category {
    // Null is object-like to some oracles; it never is here.
    if value.is_null() || value.is_primitive() {
        Category::NotObject
    } else if value.is_callable() {
        Category::Callable
    } else if value.is_record() {
        Category::Record
    } else if value.is_sequence() {
        Category::Sequence
    } else if value.is_map() || value.is_set() {
        Category::AssocOrSet
    } else {
        Category::Unclassified
    }
}

#[cfg(test)]
mod tests;
