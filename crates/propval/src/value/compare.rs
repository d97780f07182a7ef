//! Three-way partial comparison of property values

use std::cmp::Ordering;

use super::PropertyValue;

/// Outcome of comparing two property values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Left operand orders before the right one
    Less,
    /// Both operands are equivalent
    Equal,
    /// Left operand orders after the right one
    Greater,
    /// No order exists: kinds differ, a NaN is involved, or a list
    /// comparison reached such a pair
    Unordered,
}

impl Verdict {
    /// Whether the operands have no relative order
    pub fn is_unordered(self) -> bool {
        self == Verdict::Unordered
    }

    /// Swap `Less` and `Greater`, as if the operands were exchanged
    pub fn reverse(self) -> Self {
        match self {
            Verdict::Less => Verdict::Greater,
            Verdict::Greater => Verdict::Less,
            other => other,
        }
    }
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Verdict::Less,
            Ordering::Equal => Verdict::Equal,
            Ordering::Greater => Verdict::Greater,
        }
    }
}

impl From<Option<Ordering>> for Verdict {
    fn from(ord: Option<Ordering>) -> Self {
        ord.map_or(Verdict::Unordered, Verdict::from)
    }
}

impl From<Verdict> for Option<Ordering> {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Less => Some(Ordering::Less),
            Verdict::Equal => Some(Ordering::Equal),
            Verdict::Greater => Some(Ordering::Greater),
            Verdict::Unordered => None,
        }
    }
}

/// Compare two property values.
///
/// Values of different kinds are `Unordered`; there is no coercion between
/// `Int` and `Double`. Scalars use their native order (doubles follow IEEE,
/// so any NaN gives `Unordered`). Objects compare the referenced
/// `EngineObject`s by identity, not the handles. Lists compare element by
/// element: the first non-`Equal` verdict decides, and when one list is a
/// prefix of the other the shorter one is `Less`.
pub fn compare(lhs: &PropertyValue, rhs: &PropertyValue) -> Verdict {
    match (lhs, rhs) {
        (PropertyValue::Bool(a), PropertyValue::Bool(b)) => a.cmp(b).into(),
        (PropertyValue::Int(a), PropertyValue::Int(b)) => a.cmp(b).into(),
        (PropertyValue::Double(a), PropertyValue::Double(b)) => a.partial_cmp(b).into(),
        (PropertyValue::Object(a), PropertyValue::Object(b)) => a.as_ref().cmp(b.as_ref()).into(),
        (PropertyValue::List(a), PropertyValue::List(b)) => compare_lists(a, b),
        _ => Verdict::Unordered,
    }
}

fn compare_lists(lhs: &[PropertyValue], rhs: &[PropertyValue]) -> Verdict {
    for (a, b) in lhs.iter().zip(rhs) {
        match compare(a, b) {
            Verdict::Equal => continue,
            decided => return decided,
        }
    }
    lhs.len().cmp(&rhs.len()).into()
}

impl PropertyValue {
    /// Compare `self` against `other`; see [`compare`]
    pub fn compare(&self, other: &Self) -> Verdict {
        compare(self, other)
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Verdict::Equal
    }
}

impl PartialOrd for PropertyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other).into()
    }
}
