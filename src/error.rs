#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input text is not a complete JSON document.
    Syntax,
    /// A decoder rejected the shape of a parsed value.
    Decode,
    /// A serde bridge failed to build the target type.
    Deserialize,
    /// Writing encoded output failed.
    Encode,
}

/// Error returned by the decode entry points and by every [`Decoder`](crate::Decoder).
///
/// `Display` prints `message` verbatim, so decoder messages such as
/// `Field 'b' not found` reach callers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn syntax(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Deserialize,
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Encode,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_display_is_message() {
        let err = Error::decode("Field 'b' not found");
        assert_eq!(err.to_string(), "Field 'b' not found");
        assert_eq!(err.kind, ErrorKind::Decode);
    }

    #[rstest::rstest]
    fn test_constructors_set_kind() {
        assert_eq!(Error::syntax("Invalid JSON").kind, ErrorKind::Syntax);
        assert_eq!(Error::deserialize("bad").kind, ErrorKind::Deserialize);
        assert_eq!(Error::encode("io").kind, ErrorKind::Encode);
        assert_eq!(Error::syntax("Invalid JSON").message(), "Invalid JSON");
    }
}
