//! Singly and doubly linked chains.
//!
//! Both chains own their nodes, track head, tail and length, and expose the
//! same operations through the [`Chain`](traits::Chain) trait. They differ in
//! what the links allow:
//!
//! - [`SinglyLinkedChain`](single::SinglyLinkedChain) only links forward, so
//!   removing the tail walks the whole chain.
//! - [`DoublyLinkedChain`](double::DoublyLinkedChain) also links backward,
//!   removes the tail in O(1), walks from the nearer end on index lookups and
//!   can be iterated in both directions.
//!
//! # Examples
//!
//! ```
//! use linked_chains::{Chain, ChainError, DoublyLinkedChain, SinglyLinkedChain};
//!
//! let mut single = SinglyLinkedChain::new();
//! single.append(1);
//! single.append(2);
//! single.prepend(0);
//! single.insert_at(2, 99).unwrap();
//! assert_eq!(single.to_string(), "0 -> 1 -> 99 -> 2");
//! assert_eq!(single.search(&99), Some(2));
//! assert_eq!(single.get(7), Err(ChainError::OutOfRange { index: 7, len: 4 }));
//!
//! let mut double: DoublyLinkedChain<i32> = (1..=4).collect();
//! assert_eq!(double.delete_last(), Ok(4));
//! assert_eq!(double.to_string(), "1 <-> 2 <-> 3");
//! assert_eq!(double.display_rev().to_string(), "3 <-> 2 <-> 1");
//!
//! double.reverse();
//! assert!(double.iter().eq([3, 2, 1].iter()));
//! ```
pub mod double;
pub mod iter;
pub mod single;
pub mod traits;

mod display;
mod node;

#[cfg(test)]
mod tests;
