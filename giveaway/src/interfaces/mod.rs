pub mod giveaway {
    use common::types::{GiveawayId, WinnersCount};
    use near_sdk::AccountId;
    use near_sdk::{borsh::{self, BorshDeserialize, BorshSerialize}, serde::{Serialize, Deserialize}};

    use crate::errors::GiveawayError;

    #[derive(Clone, Debug, PartialEq, Eq)]
    #[derive(BorshDeserialize, BorshSerialize)]
    #[derive(Serialize, Deserialize)]
    #[serde(crate = "near_sdk::serde")]
    pub struct Giveaway {
        pub id: GiveawayId,
        pub name: String,
        pub start_date: String,
        pub end_date: String,
        pub owner: AccountId,
        /// block timestamp of the draw, empty while winners are not drawn
        pub draw_date: String,
        pub winners_count: WinnersCount,
    }

    impl Giveaway {
        pub fn new(id: GiveawayId, name: String, start_date: String, end_date: String, owner: AccountId) -> Self {
            Self {
                id,
                name,
                start_date,
                end_date,
                owner,
                draw_date: String::new(),
                winners_count: 0,
            }
        }

        pub fn is_drawn(&self) -> bool {
            !self.draw_date.is_empty()
        }

        pub fn ensure_owner(&self, caller: &AccountId) -> Result<(), GiveawayError> {
            if &self.owner != caller {
                return Err(GiveawayError::NotOwner);
            }
            Ok(())
        }
    }

    pub trait GiveawayRegistry {
        fn create_giveaway(&mut self, id: GiveawayId, name: String, start_date: String, end_date: String) -> GiveawayId;
        fn get_giveaway(&self, id: GiveawayId) -> Option<Giveaway>;
        fn list_giveaways(&self, start: u64, end: u64) -> Vec<Giveaway>;
        fn get_giveaway_count(&self) -> u64;
    }

    pub trait ParticipantLedger {
        fn add_participant(&mut self, giveaway_id: GiveawayId, account_id: AccountId) -> AccountId;
        fn add_participant_bulk(&mut self, giveaway_id: GiveawayId, account_ids: Vec<AccountId>) -> Vec<AccountId>;
        fn get_participants(&self, giveaway_id: GiveawayId, start: u64, end: u64) -> Vec<AccountId>;
        fn get_participant_count(&self, giveaway_id: GiveawayId) -> u64;
    }

    pub trait WinnerDrawer {
        fn draw_winners(&mut self, giveaway_id: GiveawayId, length: WinnersCount) -> Vec<AccountId>;
    }

    pub trait WinnerReader {
        fn get_winners(&self, giveaway_id: GiveawayId, start: u64, end: u64) -> Vec<AccountId>;
    }
}
