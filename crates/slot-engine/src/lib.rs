//! # slot-engine
//!
//! Finds meeting slots of a requested length that every participant has free.
//!
//! Each participant is described by a daily availability window and a list of
//! busy intervals on a single reference day. The engine derives each
//! participant's free time, intersects free time across all participants, and
//! cuts the shared time into back-to-back slots of the requested duration.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::Duration;
//! use slot_engine::{suggest, Interval, Participant};
//!
//! let john = Participant::new(
//!     vec![Interval::parse("9:00", "10:30").unwrap()],
//!     Interval::parse("8:00", "12:00").unwrap(),
//! )
//! .unwrap();
//! let annie = Participant::new(
//!     vec![Interval::parse("8:00", "11:00").unwrap()],
//!     Interval::parse("8:00", "12:00").unwrap(),
//! )
//! .unwrap();
//!
//! let slots = suggest(Duration::minutes(30), &[john, annie]);
//! let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
//! assert_eq!(rendered, ["{11:00, 11:30}", "{11:30, 12:00}"]);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Interval` value type, clock parsing, canonical rendering
//! - [`participant`] — Free-time derivation from busy intervals and daily bounds
//! - [`overlap`] — Pairwise overlap of two free-time sets
//! - [`split`] — Cut intervals into duration-sized slots
//! - [`suggest`] — Slots common to every participant
//! - [`record`] — JSON input records and loader
//! - [`error`] — Error types

pub mod error;
pub mod interval;
pub mod overlap;
pub mod participant;
pub mod record;
pub mod split;
pub mod suggest;

pub use error::ScheduleError;
pub use interval::{parse_clock, Interval};
pub use overlap::overlap;
pub use participant::{derive_free, Participant};
pub use record::{load_participants, ParticipantRecord};
pub use split::split;
pub use suggest::suggest;
