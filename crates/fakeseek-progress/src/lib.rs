//! fakeseek-progress: learning progress tracking (sans-IO).
//!
//! Owns the digital safety score, module completion state, quiz
//! grading, and the phishing-sorting exercise. Persistence is
//! abstracted behind the [`ProgressStorage`] port so the same tracker
//! runs against browser localStorage, an in-memory map, or anything
//! else that stores strings.

pub mod event;
pub mod phishing;
pub mod quiz;
pub mod score;
pub mod storage;
pub mod tracker;

pub use event::{ProgressEvent, completion_bonus};
pub use score::{Level, SafetyScore};
pub use storage::{
    ACTIVITY_KEY, MODULES_KEY, MemoryStorage, ProgressStorage, SCORE_KEY, StorageError,
};
pub use tracker::ProgressTracker;
