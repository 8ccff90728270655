use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Serialize, Deserialize};
use uint::construct_uint;

pub type GiveawayId = String;
pub type WinnersCount = u32;

construct_uint!{
    /// 256-bit unsigned integer
    #[derive(Serialize, Deserialize, BorshDeserialize, BorshSerialize)]
    pub struct U256(4);
}
