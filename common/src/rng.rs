use near_sdk::env;

use crate::types::U256;

fn as_u256(arr: &[u8; 32]) -> U256{
    let mut result:U256 = U256::zero();
    let mut shift:u16 = 0;

    for idx in 0..arr.len(){
        result += U256::from(arr[idx]) << shift;
        shift += 8;
    }

    return result;
}

/// Pseudo-random index generator over `[0, max)`.
///
/// Values come in batches of `buff_len`: the value at `position` of a batch is
/// the SHA-256 digest of `seed || round || position` reduced modulo `max`. Once
/// a batch is consumed the round counter is bumped. Values are derived only
/// when asked for, so the cost of a draw follows the number of values taken,
/// not the batch length. The output is fully determined by the seed, the batch
/// length and the range, it is not suitable where cryptographic strength is
/// required.
pub struct BoundedRng{
    seed: Vec<u8>,
    buff_len: u64,
    max: u64,
    round: u32,
    cursor: u64,
}

impl BoundedRng{
    pub fn new(seed: &[u8], buff_len: u64, max: u64) -> Self{
        assert!(max > 0, "Generator range cannot be empty");

        Self {
            seed: seed.to_vec(),
            buff_len: buff_len.max(1),
            max,
            round: 0,
            cursor: 0,
        }
    }

    /// next index in `[0, max)`
    pub fn next_index(&mut self) -> u64{
        if self.cursor >= self.buff_len{
            self.round += 1;
            self.cursor = 0;
        }

        let value = self.value_at(self.round, self.cursor);
        self.cursor += 1;

        return value;
    }

    fn value_at(&self, round: u32, position: u64) -> u64{
        let digest = env::sha256_array(&[
            self.seed.as_slice(),
            &round.to_le_bytes(),
            &position.to_le_bytes(),
        ].concat());

        return (as_u256(&digest) % U256::from(self.max)).as_u64();
    }
}
