/// Largest number of entries a paginated read returns.
pub const MAX_PAGE_SIZE: u64 = 10;

pub mod storage_keys{
    use near_sdk::{BorshStorageKey, CryptoHash};
    use near_sdk::borsh::{self, BorshSerialize};

    #[derive(BorshStorageKey, BorshSerialize)]
    pub enum StorageKeys {
        Giveaways,
        ParticipantTracker,
        ParticipantLists,
        ParticipantList {giveaway_hash: CryptoHash},
    }
}

pub mod utils{
    use common::types::GiveawayId;
    use near_sdk::{env, CryptoHash};

    pub(crate) fn get_hash(giveaway_id: &GiveawayId) -> CryptoHash {
        env::sha256_array(giveaway_id.as_bytes())
    }
}
