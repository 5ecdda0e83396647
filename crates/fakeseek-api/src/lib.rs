//! Sans-IO service layer for fakeseek.
//!
//! Each endpoint is a typed handler over serde request/response
//! types, with external services (assistant backend, news feed,
//! profile store, search provider) abstracted behind adapter traits.
//! Handlers validate first, then consult adapters, and degrade to
//! canned fallbacks where the user experience calls for it: chat,
//! analysis, news, and scan all fail soft, while validation failures
//! surface as [`ApiError`] values carrying an HTTP-style status.
//!
//! No handler performs IO of its own. Timestamps arrive as arguments
//! so callers own the clock; transports (fetch, native HTTP) live in
//! the adapter implementations.

pub mod analysis;
pub mod chat;
pub mod dataurl;
pub mod error;
pub mod news;
pub mod profile;
pub mod scan;

pub use analysis::{Analysis, AnalysisRequest, AnalysisResponse, ImageAnalyst, handle_analysis};
pub use chat::{ChatAssistant, ChatRequest, ChatResponse, handle_chat};
pub use dataurl::{DataUrlError, decode_payload, encode_jpeg_data_url};
pub use error::{AdapterError, ApiError, ErrorBody};
pub use news::{NewsArticle, NewsFeed, handle_news};
pub use profile::{
    MemoryProfileStore, ProfileEnvelope, ProfileStore, SaveProfileRequest, UserProfile,
    handle_get_profile, handle_save_profile,
};
pub use scan::{
    ScanReport, ScanResponse, ScanResult, ScanStatus, SearchHit, SearchProvider, handle_scan,
    run_scan,
};
