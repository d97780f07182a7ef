//! Display and Debug implementations for PropertyValue

use std::fmt;

use super::*;

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(n) => write!(f, "{}", n),
            // Keep a decimal point so doubles never read as ints
            PropertyValue::Double(n) => write!(f, "{:?}", n),
            PropertyValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }
            PropertyValue::Object(object) => write!(f, "<object {}>", object.id()),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Less => "less",
            Verdict::Equal => "equal",
            Verdict::Greater => "greater",
            Verdict::Unordered => "unordered",
        };
        f.write_str(name)
    }
}
