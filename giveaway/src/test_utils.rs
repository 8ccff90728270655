#[cfg(test)]
pub mod tests {
    use common::types::GiveawayId;
    use near_sdk::serde_json::{self, Value};
    use near_sdk::test_utils::{get_logs, VMContextBuilder};
    use near_sdk::{testing_env, AccountId, VMContext};

    use crate::*;

    pub const START_TIMESTAMP: u64 = 1_650_000_000_000_000_000;

    pub fn account(name: &str) -> AccountId {
        name.parse().unwrap()
    }

    pub fn giveaway_contract() -> AccountId {
        account("giveaway")
    }

    pub fn alice() -> AccountId {
        account("alice")
    }
    pub fn bob() -> AccountId {
        account("bob")
    }
    pub fn carol() -> AccountId {
        account("carol")
    }
    pub fn denise() -> AccountId {
        account("denise")
    }
    pub fn elijah() -> AccountId {
        account("elijah")
    }

    /// `EVENT_JSON` payloads named `event` logged in the current context.
    pub fn logged_events(event: &str) -> Vec<Value> {
        get_logs()
            .iter()
            .filter_map(|log| log.strip_prefix("EVENT_JSON:"))
            .map(|payload| serde_json::from_str::<Value>(payload).unwrap())
            .filter(|payload| payload["event"] == event)
            .collect()
    }

    pub struct Emulator {
        pub contract: Contract,
        pub caller: AccountId,
        pub block_timestamp: u64,
        pub random_seed: [u8; 32],
        pub context: VMContext,
    }

    impl Emulator {
        pub fn new(caller: AccountId) -> Self {
            let context = Self::build_context(&caller, START_TIMESTAMP, [0; 32]);
            testing_env!(context.clone());
            let contract = Contract::new();
            Emulator {
                contract,
                caller,
                block_timestamp: START_TIMESTAMP,
                random_seed: [0; 32],
                context,
            }
        }

        fn build_context(caller: &AccountId, block_timestamp: u64, random_seed: [u8; 32]) -> VMContext {
            VMContextBuilder::new()
                .current_account_id(giveaway_contract())
                .signer_account_id(caller.clone())
                .predecessor_account_id(caller.clone())
                .block_timestamp(block_timestamp)
                .random_seed(random_seed)
                .build()
        }

        pub fn update_context(&mut self) {
            self.context = Self::build_context(&self.caller, self.block_timestamp, self.random_seed);
            testing_env!(self.context.clone());
        }

        pub fn set_caller(&mut self, caller: AccountId) {
            self.caller = caller;
            self.update_context();
        }

        pub fn skip_time(&mut self, nanos: u64, random_seed: [u8; 32]) {
            self.block_timestamp += nanos;
            self.random_seed = random_seed;
            self.update_context();
        }

        /// Giveaway owned by the current caller.
        pub fn create(&mut self, id: &str) -> GiveawayId {
            self.contract.create_giveaway(id.to_string(), id.to_string(), "123".to_string(), "456".to_string())
        }
    }
}
