//! Engine notifications.
//!
//! The engine never renders anything. It describes each transition as a
//! sequence of `Event`s carrying read-only snapshots, and the presentation
//! layer decides what to draw, animate, or toast.

pub mod event;
pub mod table;

pub use event::{
    Event, MatchEndSnapshot, PlaySnapshot, RoundResultSnapshot, RoundStartSnapshot, TrickSnapshot,
    WagerSnapshot,
};
pub use table::{RoundView, TableSnapshot};
