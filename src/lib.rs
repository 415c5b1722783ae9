//! A heat-or-stay blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that seats any number of players next
//! to a dealer, deals from a single shuffled shoe, collects heat/stay
//! decisions turn by turn, and picks the participant closest to 21.
//!
//! Human decisions and all presentation go through the [`Console`] trait.
//!
//! # Example
//!
//! ```
//! use twentyone::{Console, GameOptions, Participant, Round};
//!
//! struct AlwaysStay;
//!
//! impl Console for AlwaysStay {
//!     fn ask(&mut self, _participant: &Participant) -> String {
//!         "stay".to_string()
//!     }
//!
//!     fn render(&mut self, _participant: &Participant) {}
//! }
//!
//! let mut round = Round::new(GameOptions::default().with_players(2), 42);
//! round.play(&mut AlwaysStay).unwrap();
//! assert!(round.is_ended());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod shoe;

// Re-export main types
pub use card::{BLACKJACK, Card, DECK_SIZE, Suit};
pub use console::Console;
pub use error::{DealError, DrawError, RoundError, TurnError};
pub use game::{Round, RoundState, select_winner};
pub use hand::Hand;
pub use options::GameOptions;
pub use participant::{Decision, Participant, Seat, Status, Strategy};
pub use shoe::Shoe;
