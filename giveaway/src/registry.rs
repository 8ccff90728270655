use common::pagination::clamp_window;
use common::types::GiveawayId;
use near_sdk::collections::UnorderedMap;
use crate::utils::storage_keys::StorageKeys;
use crate::*;

/// Giveaway records in insertion order. Records are never removed, so the
/// order of the underlying values vector is stable.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct Giveaways{
    records: UnorderedMap<GiveawayId, Giveaway>,
}

impl Default for Giveaways{
    fn default() -> Self {
        Giveaways { records: UnorderedMap::new(StorageKeys::Giveaways) }
    }
}

impl Giveaways{
    pub fn create(&mut self, giveaway: Giveaway) -> Result<GiveawayId, GiveawayError>{
        if self.records.get(&giveaway.id).is_some() {
            return Err(GiveawayError::AlreadyExists);
        }

        self.records.insert(&giveaway.id, &giveaway);
        return Ok(giveaway.id);
    }

    pub fn get(&self, id: &GiveawayId) -> Option<Giveaway>{
        self.records.get(id)
    }

    pub fn find(&self, id: &GiveawayId) -> Result<Giveaway, GiveawayError>{
        self.get(id).ok_or(GiveawayError::NotFound)
    }

    /// Existing giveaway that `caller` owns.
    pub fn find_owned(&self, id: &GiveawayId, caller: &AccountId) -> Result<Giveaway, GiveawayError>{
        let giveaway = self.find(id)?;
        giveaway.ensure_owner(caller)?;

        return Ok(giveaway);
    }

    pub fn save(&mut self, giveaway: &Giveaway){
        self.records.insert(&giveaway.id, giveaway);
    }

    pub fn list(&self, start: u64, end: u64) -> Vec<Giveaway>{
        let values = self.records.values_as_vector();

        return clamp_window(start, end, MAX_PAGE_SIZE, values.len())
            .filter_map(|idx| values.get(idx))
            .collect();
    }

    pub fn count(&self) -> u64{
        self.records.len()
    }
}

impl Contract{
    pub(crate) fn internal_create_giveaway(&mut self, giveaway: Giveaway) -> Result<GiveawayId, GiveawayError>{
        let owner = giveaway.owner.clone();
        let id = self.giveaways.create(giveaway)?;

        log!("Giveaway {} created by @{}", id, owner);
        events::giveaway_created(&id, &owner);

        return Ok(id);
    }
}

#[near_bindgen]
impl GiveawayRegistry for Contract{
    fn create_giveaway(&mut self, id: GiveawayId, name: String, start_date: String, end_date: String) -> GiveawayId{
        let owner = env::predecessor_account_id();
        let giveaway = Giveaway::new(id, name, start_date, end_date, owner);

        self.internal_create_giveaway(giveaway).or_panic()
    }

    fn get_giveaway(&self, id: GiveawayId) -> Option<Giveaway>{
        self.giveaways.get(&id)
    }

    fn list_giveaways(&self, start: u64, end: u64) -> Vec<Giveaway>{
        self.giveaways.list(start, end)
    }

    fn get_giveaway_count(&self) -> u64{
        self.giveaways.count()
    }
}
