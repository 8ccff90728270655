use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::{env, log, near_bindgen, AccountId, PanicOnDefault};
use interfaces::giveaway::{Giveaway, GiveawayRegistry, ParticipantLedger, WinnerDrawer, WinnerReader};
use errors::{GiveawayError, OrPanic};
use participants::Participants;
use registry::Giveaways;
use utils::MAX_PAGE_SIZE;

mod draw;
mod errors;
mod events;
mod interfaces;
mod participants;
mod registry;
mod utils;
mod winners;

#[cfg(test)]
mod test_utils;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract{
    giveaways: Giveaways,
    participants: Participants,
}

#[near_bindgen]
impl Contract{
    #[init]
    pub fn new() -> Self{
        assert!(!env::state_exists(), "Already initialized");

        Self {
            giveaways: Giveaways::default(),
            participants: Participants::default(),
        }
    }
}
