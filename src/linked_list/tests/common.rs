//! Checks shared by both chain kinds, written against the [`Chain`] trait.
extern crate std;

use std::{cell::Cell, rc::Rc, vec, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{error::ChainError, linked_list::traits::Chain};

/// Reads a chain's contents from head to tail.
pub(super) type Contents<C> = fn(&C) -> Vec<i32>;

/// Runs a seeded random sequence of operations against both `chain` and a
/// `Vec`, comparing every result and the final contents.
pub(super) fn check_against_vec<C>(mut chain: C, contents: Contents<C>, seed: u64)
where
    C: Chain<Item = i32>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model: Vec<i32> = vec![];

    for step in 0..2_000 {
        let value = rng.random_range(0..50);
        match rng.random_range(0..9) {
            0 => {
                chain.append(value);
                model.push(value);
            }
            1 => {
                chain.prepend(value);
                model.insert(0, value);
            }
            2 => {
                let index = rng.random_range(0..=model.len());
                assert_eq!(chain.insert_at(index, value), Ok(()));
                model.insert(index, value);
            }
            3 => {
                let expected = if model.is_empty() {
                    Err(ChainError::EmptyCollection)
                } else {
                    Ok(model.remove(0))
                };
                assert_eq!(chain.delete_first(), expected, "step {step}");
            }
            4 => {
                let expected = model.pop().ok_or(ChainError::EmptyCollection);
                assert_eq!(chain.delete_last(), expected, "step {step}");
            }
            5 if !model.is_empty() => {
                let index = rng.random_range(0..model.len());
                assert_eq!(chain.delete_at(index), Ok(model.remove(index)));
            }
            6 if !model.is_empty() => {
                let index = rng.random_range(0..model.len());
                assert_eq!(chain.get(index), Ok(&model[index]));
            }
            7 => {
                let expected = model.iter().position(|item| *item == value);
                assert_eq!(chain.search(&value), expected);
            }
            8 => {
                chain.reverse();
                model.reverse();
            }
            _ => {}
        }
        assert_eq!(chain.len(), model.len());
        assert_eq!(chain.is_empty(), model.is_empty());
    }

    assert_eq!(contents(&chain), model);
}

/// Every out-of-bounds call fails without touching the chain.
pub(super) fn check_bounds<C>(mut chain: C, contents: Contents<C>)
where
    C: Chain<Item = i32>,
{
    assert_eq!(chain.delete_first(), Err(ChainError::EmptyCollection));
    assert_eq!(chain.delete_last(), Err(ChainError::EmptyCollection));
    assert_eq!(
        chain.get(0),
        Err(ChainError::OutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        chain.delete_at(0),
        Err(ChainError::OutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        chain.insert_at(1, 7),
        Err(ChainError::OutOfRange { index: 1, len: 0 })
    );
    assert!(chain.is_empty());

    for value in [1, 2, 3] {
        chain.append(value);
    }
    let len = chain.len();
    assert_eq!(
        chain.get(usize::MAX),
        Err(ChainError::OutOfRange {
            index: usize::MAX,
            len
        })
    );
    assert_eq!(chain.get(len), Err(ChainError::OutOfRange { index: len, len }));
    assert_eq!(
        chain.insert_at(len + 1, 9),
        Err(ChainError::OutOfRange {
            index: len + 1,
            len
        })
    );
    assert_eq!(
        chain.delete_at(len),
        Err(ChainError::OutOfRange { index: len, len })
    );
    assert_eq!(chain.len(), 3);
    assert_eq!(contents(&chain), vec![1, 2, 3]);
    assert_eq!(chain.get(0), Ok(&1));
    assert_eq!(chain.get(2), Ok(&3));
}

/// Reversing twice restores the original order and ends.
pub(super) fn check_reverse_involution<C>(mut chain: C, contents: Contents<C>)
where
    C: Chain<Item = i32>,
{
    chain.reverse();
    chain.reverse();
    assert!(chain.is_empty());

    chain.append(1);
    chain.reverse();
    assert_eq!(contents(&chain), vec![1]);

    for value in 2..=5 {
        chain.append(value);
    }
    chain.reverse();
    assert_eq!(contents(&chain), vec![5, 4, 3, 2, 1]);
    assert_eq!(chain.get(0), Ok(&5));
    assert_eq!(chain.get(4), Ok(&1));

    // Ends must follow the reversal, not just the order.
    chain.append(0);
    chain.prepend(6);
    assert_eq!(contents(&chain), vec![6, 5, 4, 3, 2, 1, 0]);

    chain.reverse();
    chain.reverse();
    assert_eq!(contents(&chain), vec![6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(chain.delete_last(), Ok(0));
    assert_eq!(chain.delete_first(), Ok(6));
}

/// An element that counts how many times it has been dropped.
pub(super) struct Tracked(pub Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Removed elements are handed back, everything left is freed with the chain.
pub(super) fn check_drops<C>(mut chain: C)
where
    C: Chain<Item = Tracked>,
{
    let drops = Rc::new(Cell::new(0));
    for _ in 0..10 {
        chain.append(Tracked(drops.clone()));
    }
    chain.insert_at(5, Tracked(drops.clone())).unwrap();

    drop(chain.delete_first().unwrap());
    drop(chain.delete_last().unwrap());
    drop(chain.delete_at(4).unwrap());
    assert_eq!(drops.get(), 3);

    chain.reverse();
    drop(chain);
    assert_eq!(drops.get(), 11);
}
