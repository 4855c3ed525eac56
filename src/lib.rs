//! Linear sequence containers built on singly and doubly linked chains.
//!
//! See [`linked_list`] for the two chain types and [`error`] for the
//! failures their operations report.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{ChainError, Result};
pub use linked_list::{double::DoublyLinkedChain, single::SinglyLinkedChain, traits::Chain};
