//! d6 dice pools

use serde::{Deserialize, Serialize};

pub const DIE_FACES: u8 = 6;
/// Faces strictly above this count as successes.
pub const SUCCESS_FACE: u8 = 3;

/// Number of dice to roll, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSize {
    requested: i32,
    dice: usize,
}

impl PoolSize {
    pub fn new(requested: i32) -> Self {
        Self {
            requested,
            dice: usize::try_from(requested).unwrap_or(0),
        }
    }

    pub fn requested(&self) -> i32 {
        self.requested
    }

    pub fn dice(&self) -> usize {
        self.dice
    }

    /// The requested size was negative and got clamped to zero dice.
    pub fn was_clamped(&self) -> bool {
        self.requested < 0
    }
}

/// Faces of one pool, in roll order. The extra die never joins `values`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DicePool {
    pub values: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<u8>,
}

fn draw<R>(rng: &mut R) -> u8
where
    R: FnMut(i32, i32) -> i32,
{
    let face = rng(1, i32::from(DIE_FACES)).clamp(1, i32::from(DIE_FACES));
    u8::try_from(face).unwrap_or(1)
}

impl DicePool {
    pub fn roll<R>(size: PoolSize, rng: &mut R) -> Self
    where
        R: FnMut(i32, i32) -> i32,
    {
        Self {
            values: (0..size.dice()).map(|_| draw(rng)).collect(),
            extra: None,
        }
    }

    /// Draws the bonus die once; later calls keep the first draw.
    pub fn roll_extra<R>(&mut self, rng: &mut R) -> u8
    where
        R: FnMut(i32, i32) -> i32,
    {
        *self.extra.get_or_insert_with(|| draw(rng))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the pool dice, without the extra die.
    pub fn sum(&self) -> i32 {
        self.values.iter().map(|v| i32::from(*v)).sum()
    }

    /// Sum including the extra die.
    pub fn total(&self) -> i32 {
        self.sum() + self.extra.map(i32::from).unwrap_or(0)
    }

    pub fn successes(&self) -> usize {
        self.values.iter().filter(|v| **v > SUCCESS_FACE).count()
    }

    pub fn max_face(&self) -> Option<u8> {
        self.values.iter().copied().max()
    }
}

/// Roll `size` independent d6, plus one extra die when asked.
pub fn roll_pool<R>(size: PoolSize, extra_die: bool, rng: &mut R) -> DicePool
where
    R: FnMut(i32, i32) -> i32,
{
    let mut pool = DicePool::roll(size, rng);
    if extra_die {
        pool.roll_extra(rng);
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scripted(faces: Vec<i32>) -> impl FnMut(i32, i32) -> i32 {
        let mut faces = faces.into_iter().cycle();
        move |_, _| faces.next().unwrap_or(1)
    }

    #[test]
    fn negative_pool_is_clamped_to_zero_dice() {
        let size = PoolSize::new(-2);
        assert!(size.was_clamped());
        assert_eq!(size.dice(), 0);

        let pool = roll_pool(size, false, &mut scripted(vec![6]));
        assert!(pool.is_empty());
        assert_eq!(pool.total(), 0);
        assert_eq!(pool.max_face(), None);
    }

    #[test]
    fn extra_die_adds_to_total_but_not_values() {
        let pool = roll_pool(PoolSize::new(2), true, &mut scripted(vec![6, 6, 4]));
        assert_eq!(pool.values, vec![6, 6]);
        assert_eq!(pool.extra, Some(4));
        assert_eq!(pool.sum(), 12);
        assert_eq!(pool.total(), 16);
    }

    #[test]
    fn successes_count_faces_above_three() {
        let pool = roll_pool(PoolSize::new(5), false, &mut scripted(vec![1, 3, 4, 5, 6]));
        assert_eq!(pool.successes(), 3);
        assert_eq!(pool.max_face(), Some(6));
    }

    #[test]
    fn out_of_range_draws_are_clamped_to_die_faces() {
        let pool = roll_pool(PoolSize::new(2), false, &mut scripted(vec![0, 9]));
        assert_eq!(pool.values, vec![1, 6]);
    }

    #[test]
    fn roll_extra_is_idempotent() {
        let mut rng = scripted(vec![2, 5]);
        let mut pool = DicePool::roll(PoolSize::new(1), &mut rng);
        assert_eq!(pool.roll_extra(&mut rng), 5);
        assert_eq!(pool.roll_extra(&mut rng), 5);
    }

    proptest! {
        #[test]
        fn pool_length_matches_clamped_size(
            size in -10i32..30,
            faces in prop::collection::vec(-3i32..10, 1..8),
        ) {
            let pool = roll_pool(PoolSize::new(size), false, &mut scripted(faces));
            prop_assert_eq!(pool.values.len(), size.max(0) as usize);
            prop_assert!(pool.values.iter().all(|v| (1..=DIE_FACES).contains(v)));
        }
    }
}
