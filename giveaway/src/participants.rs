use common::pagination::clamp_window;
use common::types::GiveawayId;
use near_sdk::collections::{LookupMap, LookupSet, Vector};
use crate::utils::storage_keys::StorageKeys;
use crate::utils::utils::get_hash;
use crate::*;

/// Participants of every giveaway: a registration marker per
/// `(giveaway, account)` pair and an ordered list per giveaway.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct Participants{
    registered: LookupSet<(GiveawayId, AccountId)>,
    lists: LookupMap<GiveawayId, Vector<AccountId>>,
}

impl Default for Participants{
    fn default() -> Self {
        Participants {
            registered: LookupSet::new(StorageKeys::ParticipantTracker),
            lists: LookupMap::new(StorageKeys::ParticipantLists),
        }
    }
}

impl Participants{
    pub fn is_registered(&self, giveaway_id: &GiveawayId, account_id: &AccountId) -> bool{
        self.registered.contains(&(giveaway_id.clone(), account_id.clone()))
    }

    /// Appends `account_id` unless it is already registered.
    /// Returns whether the list grew.
    pub fn register(&mut self, giveaway_id: &GiveawayId, account_id: &AccountId) -> bool{
        if self.is_registered(giveaway_id, account_id) {
            return false;
        }

        let mut list = self.list(giveaway_id).unwrap_or_else(|| {
            Vector::new(
                StorageKeys::ParticipantList {
                    giveaway_hash: get_hash(giveaway_id)
                }
            )
        });
        list.push(account_id);

        self.lists.insert(giveaway_id, &list);
        self.registered.insert(&(giveaway_id.clone(), account_id.clone()));

        return true;
    }

    pub fn list(&self, giveaway_id: &GiveawayId) -> Option<Vector<AccountId>>{
        self.lists.get(giveaway_id)
    }

    pub fn page(&self, giveaway_id: &GiveawayId, start: u64, end: u64) -> Vec<AccountId>{
        let list = match self.list(giveaway_id) {
            Some(list) => list,
            None => return Vec::new(),
        };

        return clamp_window(start, end, MAX_PAGE_SIZE, list.len())
            .filter_map(|idx| list.get(idx))
            .collect();
    }

    pub fn count(&self, giveaway_id: &GiveawayId) -> u64{
        self.list(giveaway_id).map(|list| list.len()).unwrap_or_default()
    }
}

impl Contract{
    pub(crate) fn internal_add_participant(
        &mut self,
        giveaway_id: &GiveawayId,
        account_id: AccountId,
        caller: &AccountId,
    ) -> Result<AccountId, GiveawayError>{
        self.giveaways.find_owned(giveaway_id, caller)?;

        if self.participants.register(giveaway_id, &account_id) {
            events::participant_added(giveaway_id, &account_id);
        }

        return Ok(account_id);
    }

    /// Registers accounts one by one. Accounts registered before a failing one
    /// stay registered, reverting them is left to the host.
    pub(crate) fn internal_add_participant_bulk(
        &mut self,
        giveaway_id: &GiveawayId,
        account_ids: Vec<AccountId>,
        caller: &AccountId,
    ) -> Result<Vec<AccountId>, GiveawayError>{
        for account_id in account_ids.iter() {
            self.internal_add_participant(giveaway_id, account_id.clone(), caller)?;
        }

        return Ok(account_ids);
    }
}

#[near_bindgen]
impl ParticipantLedger for Contract{
    fn add_participant(&mut self, giveaway_id: GiveawayId, account_id: AccountId) -> AccountId{
        let caller = env::predecessor_account_id();
        self.internal_add_participant(&giveaway_id, account_id, &caller).or_panic()
    }

    fn add_participant_bulk(&mut self, giveaway_id: GiveawayId, account_ids: Vec<AccountId>) -> Vec<AccountId>{
        let caller = env::predecessor_account_id();
        self.internal_add_participant_bulk(&giveaway_id, account_ids, &caller).or_panic()
    }

    fn get_participants(&self, giveaway_id: GiveawayId, start: u64, end: u64) -> Vec<AccountId>{
        self.participants.page(&giveaway_id, start, end)
    }

    fn get_participant_count(&self, giveaway_id: GiveawayId) -> u64{
        self.participants.count(&giveaway_id)
    }
}
