//! Grammar errors reported in junk annotations.

/// Every way an entry can fail to parse.
///
/// `Display` renders the Fluent error message; [`ErrorKind::code`] gives the
/// stable `E00NN` code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("Placeables nested deeper than {0} levels")]
    NestingLimitExceeded(u32),
    #[error("Expected an entry start")]
    ExpectedEntry,
    #[error("Expected token: \"{0}\"")]
    ExpectedToken(char),
    #[error("Expected a character from range: \"{0}\"")]
    ExpectedCharRange(&'static str),
    #[error("Expected message \"{0}\" to have a value or attributes")]
    ExpectedMessageField(String),
    #[error("Expected term \"-{0}\" to have a value")]
    ExpectedTermField(String),
    #[error("The callee has to be an upper-case identifier or a term")]
    ForbiddenCallee,
    #[error("The argument name has to be a simple identifier")]
    ForbiddenKey,
    #[error("Expected one of the variants to be marked as default (*)")]
    MissingDefaultVariant,
    #[error("Expected at least one variant after \"->\"")]
    MissingVariants,
    #[error("Expected value")]
    MissingValue,
    #[error("Expected variant key")]
    MissingVariantKey,
    #[error("Expected literal")]
    MissingLiteral,
    #[error("Only one variant can be marked as default (*)")]
    MultipleDefaultVariants,
    #[error("Message references cannot be used as selectors")]
    MessageReferenceAsSelector,
    #[error("Terms cannot be used as selectors")]
    TermReferenceAsSelector,
    #[error("Attributes of messages cannot be used as selectors")]
    MessageAttributeAsSelector,
    #[error("Attributes of terms cannot be used as placeables")]
    TermAttributeAsPlaceable,
    #[error("Unterminated string expression")]
    UnterminatedStringExpression,
    #[error("Positional arguments must not follow named arguments")]
    PositionalArgumentFollowsNamed,
    #[error("Named arguments must be unique")]
    DuplicatedNamedArgument(String),
    #[error("Unknown escape sequence: \\{0}.")]
    UnknownEscapeSequence(String),
    #[error("Invalid Unicode escape sequence: {0}.")]
    InvalidUnicodeEscapeSequence(String),
    #[error("Unbalanced closing brace in TextElement.")]
    UnbalancedClosingBrace,
    #[error("Expected an inline expression")]
    ExpectedInlineExpression,
    #[error("Expected simple expression as selector")]
    ExpectedSimpleExpressionAsSelector,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NestingLimitExceeded(_) => "E0001",
            ErrorKind::ExpectedEntry => "E0002",
            ErrorKind::ExpectedToken(_) => "E0003",
            ErrorKind::ExpectedCharRange(_) => "E0004",
            ErrorKind::ExpectedMessageField(_) => "E0005",
            ErrorKind::ExpectedTermField(_) => "E0006",
            ErrorKind::ForbiddenCallee => "E0008",
            ErrorKind::ForbiddenKey => "E0009",
            ErrorKind::MissingDefaultVariant => "E0010",
            ErrorKind::MissingVariants => "E0011",
            ErrorKind::MissingValue => "E0012",
            ErrorKind::MissingVariantKey => "E0013",
            ErrorKind::MissingLiteral => "E0014",
            ErrorKind::MultipleDefaultVariants => "E0015",
            ErrorKind::MessageReferenceAsSelector => "E0016",
            ErrorKind::TermReferenceAsSelector => "E0017",
            ErrorKind::MessageAttributeAsSelector => "E0018",
            ErrorKind::TermAttributeAsPlaceable => "E0019",
            ErrorKind::UnterminatedStringExpression => "E0020",
            ErrorKind::PositionalArgumentFollowsNamed => "E0021",
            ErrorKind::DuplicatedNamedArgument(_) => "E0022",
            ErrorKind::UnknownEscapeSequence(_) => "E0025",
            ErrorKind::InvalidUnicodeEscapeSequence(_) => "E0026",
            ErrorKind::UnbalancedClosingBrace => "E0027",
            ErrorKind::ExpectedInlineExpression => "E0028",
            ErrorKind::ExpectedSimpleExpressionAsSelector => "E0029",
        }
    }

    /// Values interpolated into the message, in order.
    pub fn arguments(&self) -> Vec<String> {
        match self {
            ErrorKind::NestingLimitExceeded(limit) => vec![limit.to_string()],
            ErrorKind::ExpectedToken(ch) => vec![ch.to_string()],
            ErrorKind::ExpectedCharRange(range) => vec![(*range).to_string()],
            ErrorKind::ExpectedMessageField(id)
            | ErrorKind::ExpectedTermField(id)
            | ErrorKind::DuplicatedNamedArgument(id) => vec![id.clone()],
            ErrorKind::UnknownEscapeSequence(sequence)
            | ErrorKind::InvalidUnicodeEscapeSequence(sequence) => vec![sequence.clone()],
            _ => Vec::new(),
        }
    }
}

pub(crate) type ParseResult<T> = Result<T, ErrorKind>;
