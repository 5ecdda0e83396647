//! Dioxus UI components for fakeseek.
//!
//! Provides the photo upload zone, the four-tile variation grid, the
//! safety-score indicator, the chat widget, the quiz and phishing
//! exercises, the profile form, the scan panel, and the news list.

mod chat;
mod news;
mod phishing;
mod profile_form;
mod progress;
mod quiz;
mod scan_panel;
mod upload;
mod variations;

pub use chat::{ChatMessage, ChatRole, ChatWidget};
pub use news::NewsList;
pub use phishing::PhishingSorter;
pub use profile_form::ProfileForm;
pub use progress::ProgressIndicator;
pub use quiz::Quiz;
pub use scan_panel::ScanPanel;
pub use upload::PhotoUpload;
pub use variations::VariationGrid;
