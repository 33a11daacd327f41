//! Transcript Analysis for StayQuote
//!
//! Turns a lowercase voice transcript into the two halves of a resolved
//! stay: when (date expression resolution) and what (room attribute
//! classification). Both passes are pure functions over the phrase plus an
//! explicit reference time; no call-to-call state exists.
//!
//! # Architecture
//!
//! ```text
//! Voice Transcript (plain text)
//!       │
//!       ├──────────────────────────────┐
//!       ▼                              ▼
//! ┌─────────────────────────┐  ┌─────────────────────────────┐
//! │  DateExpressionResolver │  │  Phonetic Confusion Pass    │
//! │  ordered rule cascade:  │  │  king/keen/kin vs           │
//! │  explicit date →        │  │  queen/clean/green counts   │
//! │  tomorrow/today →       │  └─────────────────────────────┘
//! │  next week → weekend →  │               │ bias
//! │  named weekdays →       │               ▼
//! │  default                │  ┌─────────────────────────────┐
//! └─────────────────────────┘  │  RoomAttributeClassifier    │
//!       │                      │  keyword +1 / pattern +2    │
//!       │                      │  scoring per category,      │
//!       │                      │  amenity + combination      │
//!       │                      │  validation                 │
//!       ▼                      └─────────────────────────────┘
//!  ResolvedStay                         │
//!       └──────────────┬────────────────┘
//!                      ▼
//!        StayRequest (assembled by the caller)
//! ```
//!
//! Unrecognized input never fails: the resolver falls back to a one-night
//! default stay and the classifier falls back to a Queen room. The only
//! typed error is a transcript rejected as noise before analysis starts.

pub mod classifier;
pub mod dates;
pub mod phonetic;
pub mod types;

pub use classifier::RoomAttributeClassifier;
pub use dates::DateExpressionResolver;
pub use phonetic::PhoneticLean;
pub use types::{
    InterpretError, InterpreterConfig, InvalidRoomType, ResolvedStay, RoomAttributes,
};
