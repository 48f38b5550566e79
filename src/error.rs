use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    /// A literal color that is not 6 hex digits, with or without a leading `#`
    #[display("malformed color {input:?}: {reason}")]
    MalformedColor {
        input: String,
        reason: MalformedReason,
    },

    // -- Externals
    #[from]
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
    #[from]
    #[display("unable to initialize logging: {_0}")]
    Logging(tracing_subscriber::util::TryInitError),
}

impl std::error::Error for Error {}

/// Why a hex string was rejected
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[display("expected 6 hex digits, found {_0}")]
    WrongLength(usize),
    #[display("{_0:?} is not a hex digit")]
    InvalidDigit(char),
}

impl Error {
    pub(crate) fn malformed_color(input: &str, reason: MalformedReason) -> Self {
        Self::MalformedColor {
            input: input.to_owned(),
            reason,
        }
    }
}
