use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A payment row holds a status string outside the known set.
    ///
    /// The database only ever receives "pending", "partial" or "paid"; anything
    /// else means a write path skipped the status enum. Results in a 500
    /// Internal Server Error with a generic message returned to the client.
    #[error("Unknown payment status '{0}' in database")]
    UnknownPaymentStatus(String),

    /// A transaction row holds a payment method string outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Unknown payment method '{0}' in database")]
    UnknownPaymentMethod(String),
}
