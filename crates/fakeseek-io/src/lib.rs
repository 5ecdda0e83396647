//! fakeseek-io: Browser I/O and Dioxus component library.
//!
//! Handles Blob URL creation for variation images, localStorage-backed
//! progress persistence, fetch-backed adapter implementations, and the
//! reusable UI components for the fakeseek web application.

pub mod adapters;
pub mod components;
pub mod fetch;
pub mod raster;
pub mod storage;

pub use adapters::{HttpAnalyst, HttpChat, HttpNewsFeed, HttpProfileStore, HttpSearchProvider};
pub use components::{
    ChatMessage, ChatRole, ChatWidget, NewsList, PhishingSorter, PhotoUpload, ProfileForm,
    ProgressIndicator, Quiz, ScanPanel, VariationGrid,
};
pub use storage::{LocalStorage, subscribe_storage_events};
