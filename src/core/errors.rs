/// Error types for the checked port identifier constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    /// A segment (parent or name) was empty
    EmptySegment(&'static str),
    /// A segment contains the separator character and would make the
    /// resulting identifier ambiguous
    SeparatorInSegment {
        segment: &'static str,
        value: String,
    },
}

impl std::fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedInputError::EmptySegment(segment) => {
                write!(f, "Empty {} segment", segment)
            }
            MalformedInputError::SeparatorInSegment { segment, value } => {
                write!(f, "Separator in {} segment: {}", segment, value)
            }
        }
    }
}

impl std::error::Error for MalformedInputError {}
