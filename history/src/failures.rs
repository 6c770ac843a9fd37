//! Classifier for failed submissions: user cancellations stay out of the
//! ledger, real failures go in.

/// Provider error code for a user-rejected request (EIP-1193).
pub const USER_REJECTED_CODE: i64 = 4001;

/// Message fragments that mean the user cancelled the submission.
const CANCELLATION_PHRASES: &[&str] = &["user rejected", "user denied"];

/// A failed transaction submission as reported by the wallet/provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionError {
    pub code: Option<i64>,
    pub message: Option<String>,
}

impl SubmissionError {
    pub fn new(code: Option<i64>, message: Option<impl Into<String>>) -> Self {
        Self {
            code,
            message: message.map(Into::into),
        }
    }
}

/// Whether a failed submission belongs in the history ledger.
///
/// Returns `false` for user-initiated cancellations (the rejection code or
/// a case-insensitive cancellation phrase in the message), `true` for every
/// other error, including errors without a message. Decision function only;
/// the caller skips the store call.
pub fn should_store_failure(error: &SubmissionError) -> bool {
    if error.code == Some(USER_REJECTED_CODE) {
        return false;
    }
    if let Some(message) = &error.message {
        let lower = message.to_lowercase();
        if CANCELLATION_PHRASES.iter().any(|p| lower.contains(p)) {
            return false;
        }
    }
    true
}
