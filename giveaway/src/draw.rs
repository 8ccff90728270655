use common::rng::BoundedRng;
use common::types::{GiveawayId, WinnersCount};
use near_sdk::Timestamp;
use near_sdk::collections::Vector;
use crate::*;

/// Per-call entropy read from the host once, at the start of the call.
pub struct Entropy{
    pub timestamp: Timestamp,
    pub random_seed: Vec<u8>,
}

impl Entropy{
    pub fn from_env() -> Self{
        Self {
            timestamp: env::block_timestamp(),
            random_seed: env::random_seed(),
        }
    }

    fn seed(&self) -> Vec<u8>{
        [self.random_seed.as_slice(), &self.timestamp.to_le_bytes()].concat()
    }
}

/// Moves `length` winners to the front of `list`.
///
/// Position `i` is swapped with an index drawn from the whole list, earlier
/// winners included. `length` is clamped to the list size; the clamped value
/// is returned.
pub(crate) fn shuffle_winners(list: &mut Vector<AccountId>, length: WinnersCount, entropy: &Entropy) -> WinnersCount{
    let total = list.len();
    if total == 0 {
        return 0;
    }

    // never exceeds `length`, so it fits back into WinnersCount
    let winners = (length as u64).min(total);
    let buff_len = entropy.timestamp % total + 1;
    let mut rng = BoundedRng::new(&entropy.seed(), buff_len, total);

    for idx in 0..winners{
        let swap_idx = rng.next_index();
        if swap_idx == idx {
            continue;
        }

        if let (Some(current), Some(picked)) = (list.get(idx), list.get(swap_idx)) {
            list.replace(idx, &picked);
            list.replace(swap_idx, &current);
        }
    }

    return winners as WinnersCount;
}

impl Contract{
    pub(crate) fn internal_draw_winners(
        &mut self,
        giveaway_id: &GiveawayId,
        length: WinnersCount,
        caller: &AccountId,
        entropy: &Entropy,
    ) -> Result<Vec<AccountId>, GiveawayError>{
        let mut giveaway = self.giveaways.find_owned(giveaway_id, caller)?;
        if giveaway.is_drawn() {
            return Err(GiveawayError::AlreadyDrawn);
        }

        let mut list = match self.participants.list(giveaway_id) {
            Some(list) => list,
            None => {
                log!("Giveaway {} has no participants, nothing to draw", giveaway_id);
                return Ok(Vec::new());
            }
        };

        let winners_count = shuffle_winners(&mut list, length, entropy);

        giveaway.draw_date = entropy.timestamp.to_string();
        giveaway.winners_count = winners_count;
        self.giveaways.save(&giveaway);

        events::winners_drawn(giveaway_id, winners_count, &giveaway.draw_date);

        return self.internal_get_winners(giveaway_id, 0, winners_count as u64);
    }
}

#[near_bindgen]
impl WinnerDrawer for Contract{
    fn draw_winners(&mut self, giveaway_id: GiveawayId, length: WinnersCount) -> Vec<AccountId>{
        let caller = env::predecessor_account_id();
        let entropy = Entropy::from_env();

        self.internal_draw_winners(&giveaway_id, length, &caller, &entropy).or_panic()
    }
}
