use common::types::GiveawayId;
use crate::*;

impl Contract{
    /// Page of the drawn prefix of the participant list. The window never
    /// reaches past `winners_count`.
    pub(crate) fn internal_get_winners(
        &self,
        giveaway_id: &GiveawayId,
        start: u64,
        end: u64,
    ) -> Result<Vec<AccountId>, GiveawayError>{
        let giveaway = self.giveaways.find(giveaway_id)?;
        if !giveaway.is_drawn() {
            return Err(GiveawayError::DrawNotPerformed);
        }

        let end = end.min(giveaway.winners_count as u64);
        return Ok(self.participants.page(giveaway_id, start, end));
    }
}

#[near_bindgen]
impl WinnerReader for Contract{
    fn get_winners(&self, giveaway_id: GiveawayId, start: u64, end: u64) -> Vec<AccountId>{
        self.internal_get_winners(&giveaway_id, start, end).or_panic()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::tests::*;
    use super::*;

    #[test]
    #[should_panic(expected = "Giveaway: Winners have not been drawn")]
    fn test_winners_before_draw_panics(){
        let mut emulator = Emulator::new(alice());
        emulator.create("abc");
        emulator.contract.add_participant("abc".to_string(), bob());

        emulator.contract.get_winners("abc".to_string(), 0, 10);
    }

    #[test]
    fn test_winners_of_missing_giveaway(){
        let emulator = Emulator::new(alice());
        assert_eq!(
            emulator.contract.internal_get_winners(&"abc".to_string(), 0, 10),
            Err(GiveawayError::NotFound)
        );
    }

    #[test]
    fn test_winners_never_include_remainder(){
        let mut emulator = Emulator::new(alice());
        emulator.create("abc");
        emulator.contract.add_participant_bulk("abc".to_string(), vec![bob(), carol(), denise(), elijah()]);
        emulator.contract.draw_winners("abc".to_string(), 2);

        let participants = emulator.contract.get_participants("abc".to_string(), 0, 10);
        assert_eq!(emulator.contract.get_winners("abc".to_string(), 0, 1000), participants[0..2].to_vec());
        assert_eq!(emulator.contract.get_winners("abc".to_string(), 1, 1000), participants[1..2].to_vec());
        assert!(emulator.contract.get_winners("abc".to_string(), 2, 4).is_empty());
    }

    #[test]
    fn test_anyone_can_read_winners(){
        let mut emulator = Emulator::new(alice());
        emulator.create("abc");
        emulator.contract.add_participant_bulk("abc".to_string(), vec![bob(), carol()]);
        let winners = emulator.contract.draw_winners("abc".to_string(), 1);

        emulator.set_caller(bob());
        assert_eq!(emulator.contract.get_winners("abc".to_string(), 0, 1), winners);
    }
}
