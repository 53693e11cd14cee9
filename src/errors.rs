use thiserror::Error;

pub type Result<T> = std::result::Result<T, TradeError>;

/// Stage-typed failures for a single trade attempt. Any stage failure
/// aborts the remaining stages; nothing is retried internally.
#[derive(Debug, Error)]
pub enum TradeError {
    #[error("venue resolution failed: {0}")]
    VenueResolution(String),

    #[error("quote failed: {0}")]
    Quote(String),

    #[error("approval failed: {0}")]
    Approval(String),

    #[error("swap submission failed: {0}")]
    Submission(#[from] SubmissionError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("chain read failed: {0}")]
    Read(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("wallet error: {0}")]
    Wallet(#[from] ethers::signers::WalletError),

    #[error("provider error: {0}")]
    Provider(#[from] ethers::providers::ProviderError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// How a submitted (or to-be-submitted) transaction failed.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("wallet rejected the transaction: {0}")]
    WalletRejected(String),

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("transaction reverted")]
    Reverted,

    #[error("network error: {0}")]
    Network(String),
}

impl TradeError {
    /// Stable reason code carried into the persisted trade record.
    pub fn reason_code(&self) -> &'static str {
        match self {
            TradeError::VenueResolution(_) => "venue-resolution-failed",
            TradeError::Quote(_) => "quote-failed",
            TradeError::Approval(_) => "approval-failed",
            TradeError::Submission(SubmissionError::WalletRejected(_)) => "user-rejected",
            TradeError::Submission(SubmissionError::InsufficientFunds(_)) => "insufficient-funds",
            TradeError::Submission(SubmissionError::Reverted) => "reverted",
            TradeError::Submission(SubmissionError::Network(_)) => "network-error",
            TradeError::InvalidInput(_) => "invalid-input",
            TradeError::Read(_) => "read-failed",
            _ => "internal-error",
        }
    }
}

/// Map a raw send/sign error message onto the submission taxonomy.
///
/// The node and the signer both report failures as strings; this is the
/// single place that pattern-matches them.
pub fn classify_submission_error(message: &str) -> SubmissionError {
    let lower = message.to_lowercase();
    if lower.contains("rejected") || lower.contains("denied") {
        SubmissionError::WalletRejected(message.to_string())
    } else if lower.contains("insufficient funds") || lower.contains("insufficient balance") {
        SubmissionError::InsufficientFunds(message.to_string())
    } else if lower.contains("revert") {
        SubmissionError::Reverted
    } else {
        SubmissionError::Network(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_rejection() {
        let err = classify_submission_error("user rejected transaction signing");
        assert!(matches!(err, SubmissionError::WalletRejected(_)));
    }

    #[test]
    fn classifies_insufficient_funds() {
        let err = classify_submission_error("insufficient funds for gas * price + value");
        assert!(matches!(err, SubmissionError::InsufficientFunds(_)));
    }

    #[test]
    fn classifies_revert() {
        let err = classify_submission_error("execution reverted: DEADLINE_EXPIRED");
        assert!(matches!(err, SubmissionError::Reverted));
    }

    #[test]
    fn defaults_to_network() {
        let err = classify_submission_error("connection reset by peer");
        assert!(matches!(err, SubmissionError::Network(_)));
    }

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(
            TradeError::VenueResolution("boom".into()).reason_code(),
            "venue-resolution-failed"
        );
        assert_eq!(
            TradeError::Submission(SubmissionError::Reverted).reason_code(),
            "reverted"
        );
        assert_eq!(
            TradeError::InvalidInput("zero amount".into()).reason_code(),
            "invalid-input"
        );
    }
}
