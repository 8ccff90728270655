use near_sdk::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GiveawayError {
    #[error("Giveaway: ID already exist")]
    AlreadyExists,

    #[error("Giveaway: ID not exist")]
    NotFound,

    #[error("Giveaway: Sender not giveaway owner")]
    NotOwner,

    #[error("Giveaway: Winners have been drawn")]
    AlreadyDrawn,

    #[error("Giveaway: Winners have not been drawn")]
    DrawNotPerformed,
}

/// Aborts the running function call on error. The host reverts every state
/// change made by the call.
pub(crate) trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for Result<T, GiveawayError> {
    fn or_panic(self) -> T {
        self.unwrap_or_else(|err| env::panic_str(&err.to_string()))
    }
}
