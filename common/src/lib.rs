pub mod pagination{
    use std::ops::Range;

    /// Index window `[start, end)` shortened to at most `max_len` entries and
    /// to the `available` length of the underlying collection.
    /// An inverted window yields an empty range.
    pub fn clamp_window(start: u64, end: u64, max_len: u64, available: u64) -> Range<u64>{
        let end = end
            .min(start.saturating_add(max_len))
            .min(available);

        if end < start {
            return start..start;
        }

        return start..end;
    }
}

pub mod rng;
pub mod types;

#[cfg(test)]
mod tests {
    use crate::pagination::clamp_window;

    #[test]
    fn test_window_is_capped_by_page_size() {
        assert_eq!(clamp_window(0, 1000, 10, 50), 0..10);
        assert_eq!(clamp_window(5, 1000, 10, 50), 5..15);
    }

    #[test]
    fn test_window_is_capped_by_length() {
        assert_eq!(clamp_window(0, 1000, 10, 3), 0..3);
        assert_eq!(clamp_window(2, 4, 10, 3), 2..3);
    }

    #[test]
    fn test_window_keeps_narrow_requests() {
        assert_eq!(clamp_window(1, 3, 10, 50), 1..3);
    }

    #[test]
    fn test_out_of_range_window_is_empty() {
        assert_eq!(clamp_window(7, 9, 10, 3).count(), 0);
        assert_eq!(clamp_window(4, 2, 10, 50).count(), 0);
        assert_eq!(clamp_window(u64::MAX, u64::MAX, 10, 3).count(), 0);
    }
}
