use common::types::{GiveawayId, WinnersCount};
use near_sdk::{AccountId, log};
use near_sdk::serde::Serialize;
use near_sdk::serde_json::json;

const EVENT_STANDARD: &str = "giveaway";
const EVENT_STANDARD_VERSION: &str = "1.0.0";

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct GiveawayCreated<'a> {
    pub id: &'a GiveawayId,
    pub owner: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct ParticipantAdded<'a> {
    pub giveaway_id: &'a GiveawayId,
    pub account_id: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct WinnersDrawn<'a> {
    pub giveaway_id: &'a GiveawayId,
    pub winners_count: WinnersCount,
    pub draw_date: &'a str,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": EVENT_STANDARD,
        "version": EVENT_STANDARD_VERSION,
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub fn giveaway_created(id: &GiveawayId, owner: &AccountId){
    log_event(
        "giveaway_created",
        GiveawayCreated { id, owner },
    );
}

pub fn participant_added(giveaway_id: &GiveawayId, account_id: &AccountId){
    log_event(
        "participant_added",
        ParticipantAdded { giveaway_id, account_id },
    );
}

pub fn winners_drawn(giveaway_id: &GiveawayId, winners_count: WinnersCount, draw_date: &str){
    log_event(
        "winners_drawn",
        WinnersDrawn { giveaway_id, winners_count, draw_date },
    );
}
