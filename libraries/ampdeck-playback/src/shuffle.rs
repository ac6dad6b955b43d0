//! Shuffle index selection
//!
//! Shuffle does not reorder the playlist. Each "next" draws a fresh index,
//! so the display order stays what the user built.

use crate::types::ShufflePolicy;
use rand::Rng;

/// Draw a random playlist index
///
/// Returns `None` for an empty playlist. With
/// [`ShufflePolicy::ExcludeCurrent`] and more than one track, the draw is
/// uniform over every index except `current`.
pub fn pick_index<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    current: Option<usize>,
    policy: ShufflePolicy,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match (policy, current) {
        (ShufflePolicy::ExcludeCurrent, Some(current)) if len > 1 && current < len => {
            // Draw from len - 1 slots and skip over the current one
            let drawn = rng.gen_range(0..len - 1);
            Some(if drawn >= current { drawn + 1 } else { drawn })
        }
        _ => Some(rng.gen_range(0..len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_playlist_has_no_index() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_index(&mut rng, 0, None, ShufflePolicy::AllowCurrent), None);
        assert_eq!(pick_index(&mut rng, 0, Some(0), ShufflePolicy::ExcludeCurrent), None);
    }

    #[test]
    fn single_track_always_picks_it() {
        let mut rng = StdRng::seed_from_u64(2);
        for policy in [ShufflePolicy::AllowCurrent, ShufflePolicy::ExcludeCurrent] {
            assert_eq!(pick_index(&mut rng, 1, Some(0), policy), Some(0));
        }
    }

    #[test]
    fn allow_current_covers_every_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<usize> = (0..500)
            .filter_map(|_| pick_index(&mut rng, 5, Some(2), ShufflePolicy::AllowCurrent))
            .collect();
        assert_eq!(seen, (0..5).collect());
    }

    #[test]
    fn exclude_current_never_repeats() {
        let mut rng = StdRng::seed_from_u64(4);
        let seen: HashSet<usize> = (0..500)
            .filter_map(|_| pick_index(&mut rng, 5, Some(2), ShufflePolicy::ExcludeCurrent))
            .collect();
        assert_eq!(seen, HashSet::from([0, 1, 3, 4]));
    }

    #[test]
    fn exclude_current_without_selection_is_uniform() {
        let mut rng = StdRng::seed_from_u64(5);
        let seen: HashSet<usize> = (0..300)
            .filter_map(|_| pick_index(&mut rng, 3, None, ShufflePolicy::ExcludeCurrent))
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn exclude_current_with_stale_index() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let index = pick_index(&mut rng, 3, Some(9), ShufflePolicy::ExcludeCurrent).unwrap();
            assert!(index < 3);
        }
    }
}
