use std::rc::Rc;

use dioxus::prelude::*;
use fakeseek_api::analysis::{Analysis, AnalysisRequest};
use fakeseek_api::chat::ChatRequest;
use fakeseek_api::dataurl::encode_jpeg_data_url;
use fakeseek_api::news::NewsArticle;
use fakeseek_api::profile::SaveProfileRequest;
use fakeseek_api::scan::ScanReport;
use fakeseek_io::storage::LocalStorage;
use fakeseek_io::{
    ChatMessage, ChatRole, ChatWidget, HttpAnalyst, HttpChat, HttpNewsFeed, HttpProfileStore,
    HttpSearchProvider, NewsList, PhishingSorter, PhotoUpload, ProfileForm, ProgressIndicator,
    Quiz, ScanPanel, VariationGrid,
};
use fakeseek_pipeline::{ConfidenceLabel, PipelineConfig, VariationSet};
use fakeseek_progress::tracker::ProgressTracker;
use fakeseek_progress::{ProgressEvent, phishing, quiz};
use wasm_bindgen::JsValue;

/// Single-user demo: authentication is out of scope, every browser
/// profile maps to this id.
const USER_ID: &str = "local-user";

/// Activity tag recorded when a photo is run through the pipeline.
const UPLOAD_ACTIVITY: &str = "deepfake_image_upload";

fn main() {
    dioxus::launch(app);
}

/// Milliseconds since the epoch, for timestamping handler calls.
fn now_ms() -> u64 {
    web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Log a non-fatal failure to the browser console.
fn log_error(context: &str, detail: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {detail}")));
}

/// Top-level navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Detect,
    Learn,
    Phishing,
    Profile,
}

impl Section {
    const ALL: [Self; 4] = [Self::Detect, Self::Learn, Self::Phishing, Self::Profile];

    const fn label(self) -> &'static str {
        match self {
            Self::Detect => "Spot the Deepfake",
            Self::Learn => "Learn",
            Self::Phishing => "Phishing Protection",
            Self::Profile => "Profile & Scan",
        }
    }
}

/// Root application component.
///
/// Owns the progress tracker (provided to the tree via context) and
/// the per-section state, and wires the components to the fetch-backed
/// adapters through the sans-IO handlers.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    let mut tracker =
        use_context_provider(|| Signal::new(ProgressTracker::new(Box::new(LocalStorage::new()))));

    // Another tab's writes win; reload on storage events.
    use_hook(move || {
        fakeseek_io::subscribe_storage_events(move || {
            tracker.write().reload();
        });
    });

    let mut section = use_signal(|| Section::Detect);
    let score = tracker.read().score();

    let body = match section() {
        Section::Detect => rsx! { DetectSection {} },
        Section::Learn => rsx! { LearnSection {} },
        Section::Phishing => rsx! { PhishingSection {} },
        Section::Profile => rsx! { ProfileSection {} },
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/styles.css") }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] flex flex-col",

            header { class: "px-6 py-4 border-b border-[var(--border)]",
                h1 { class: "text-2xl font-bold", "FakeSeek" }
                p { class: "text-[var(--muted)] text-sm",
                    "Learn to recognize deepfakes, phishing, and other synthetic deception"
                }
            }

            nav { class: "px-6 py-3 flex gap-2 border-b border-[var(--border)]",
                for tab in Section::ALL {
                    button {
                        class: if section() == tab {
                            "px-3 py-1 rounded bg-[var(--btn-primary)] text-white text-sm"
                        } else {
                            "px-3 py-1 rounded text-[var(--text-secondary)] hover:bg-[var(--surface-active)] text-sm"
                        },
                        onclick: move |_| section.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            div { class: "px-6 py-4",
                ProgressIndicator { score }
            }

            main { class: "flex-1 px-6 pb-6",
                {body}
            }
        }
    }
}

/// Upload, variation grid, analysis, and the chat widget.
#[component]
#[allow(clippy::too_many_lines)]
fn DetectSection() -> Element {
    let mut tracker = use_context::<Signal<ProgressTracker>>();

    let mut image_bytes = use_signal(|| Option::<Rc<Vec<u8>>>::None);
    let mut variations = use_signal(|| Option::<Rc<VariationSet>>::None);
    let mut generating = use_signal(|| false);
    let mut analysis = use_signal(|| Option::<Analysis>::None);
    let mut analyzing = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut generation = use_signal(|| 0u64);

    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut chat_busy = use_signal(|| false);

    let on_upload = move |(bytes, _name): (Vec<u8>, String)| {
        variations.set(None);
        analysis.set(None);
        error.set(None);
        image_bytes.set(Some(Rc::new(bytes)));
    };

    // Pipeline effect: re-runs when the image changes. Spawned so the
    // "Generating..." state paints before the synchronous pixel work
    // blocks the thread.
    use_effect(move || {
        let Some(bytes) = image_bytes() else {
            return;
        };

        // Increment generation so an in-flight run from a prior upload
        // knows it is stale and discards its result.
        generation += 1;
        let my_generation = *generation.peek();

        generating.set(true);

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = fakeseek_pipeline::generate_variations(&bytes, &PipelineConfig::default());

            if *generation.peek() != my_generation {
                return;
            }

            match outcome {
                Ok(set) => {
                    let set = Rc::new(set);
                    variations.set(Some(Rc::clone(&set)));

                    {
                        let mut tracker = tracker.write();
                        if let Err(e) = tracker.apply(&ProgressEvent::ImageUpload) {
                            log_error("progress", &e.to_string());
                        }
                        if let Err(e) = tracker.touch_activity(UPLOAD_ACTIVITY) {
                            log_error("progress", &e.to_string());
                        }
                    }

                    // Compare the original against the strongest
                    // variation; the handler supplies the fallback
                    // analysis if the backend is down.
                    if let Some(extreme) = set.get(ConfidenceLabel::Extreme) {
                        analyzing.set(true);
                        let request = AnalysisRequest {
                            original_image: Some(encode_jpeg_data_url(&bytes)),
                            deepfake_image: Some(encode_jpeg_data_url(&extreme.jpeg)),
                        };
                        let result = fakeseek_api::handle_analysis(
                            &HttpAnalyst::default(),
                            &request,
                            now_ms(),
                        )
                        .await;
                        if *generation.peek() == my_generation {
                            match result {
                                Ok(response) => analysis.set(Some(response.analysis)),
                                Err(e) => log_error("analysis", &e.to_string()),
                            }
                            analyzing.set(false);
                        }
                    }
                }
                Err(e) => {
                    error.set(Some(format!("{e}")));
                }
            }

            generating.set(false);
        });
    });

    let on_send = move |text: String| {
        messages.with_mut(|m| {
            m.push(ChatMessage {
                role: ChatRole::User,
                text: text.clone(),
            });
        });
        chat_busy.set(true);
        spawn(async move {
            let request = ChatRequest { message: text };
            match fakeseek_api::handle_chat(&HttpChat::default(), &request).await {
                Ok(response) => messages.with_mut(|m| {
                    m.push(ChatMessage {
                        role: ChatRole::Assistant,
                        text: response.response,
                    });
                }),
                Err(e) => log_error("chat", &e.to_string()),
            }
            chat_busy.set(false);
        });
    };

    rsx! {
        div { class: "flex flex-col lg:flex-row gap-6",
            div { class: "flex-1 flex flex-col gap-4",
                PhotoUpload { on_upload }

                if generating() {
                    p { class: "text-[var(--text-secondary)] text-lg animate-pulse text-center",
                        "Generating variations..."
                    }
                } else if let Some(ref set) = variations() {
                    VariationGrid { variations: Rc::clone(set) }
                }

                if let Some(ref err) = error() {
                    div { class: "bg-[var(--error-bg)] border border-[var(--error-border)] rounded p-3",
                        p { class: "text-[var(--text-error)] text-sm", "{err}" }
                    }
                }

                if analyzing() {
                    p { class: "text-[var(--text-secondary)] text-sm animate-pulse",
                        "Analyzing image pair..."
                    }
                } else if let Some(ref result) = analysis() {
                    {render_analysis(result)}
                }
            }

            div { class: "lg:w-96 flex-shrink-0",
                ChatWidget {
                    messages: messages(),
                    busy: chat_busy(),
                    on_send,
                }
            }
        }
    }
}

/// Render the similarities/anomalies lists of one analysis.
fn render_analysis(analysis: &Analysis) -> Element {
    rsx! {
        div { class: "bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)]",
            h3 { class: "text-base font-semibold text-[var(--text-heading)] mb-2",
                {format!("Analysis · {:.0}% confidence", analysis.confidence_score)}
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div {
                    h4 { class: "text-sm font-medium text-[var(--text-success)] mb-1", "Similarities" }
                    for (i, item) in analysis.similarities.iter().enumerate() {
                        p { key: "{i}", class: "text-sm text-[var(--text-secondary)]", "• {item}" }
                    }
                }
                div {
                    h4 { class: "text-sm font-medium text-[var(--text-error)] mb-1", "Anomalies" }
                    for (i, item) in analysis.anomalies.iter().enumerate() {
                        p { key: "{i}", class: "text-sm text-[var(--text-secondary)]", "• {item}" }
                    }
                }
            }
        }
    }
}

/// Quiz plus the news feed.
#[component]
fn LearnSection() -> Element {
    let mut tracker = use_context::<Signal<ProgressTracker>>();

    let news = use_resource(|| async {
        fakeseek_api::handle_news(&HttpNewsFeed::default()).await
    });

    let on_event = move |event: ProgressEvent| {
        let mut tracker = tracker.write();
        if let Err(e) = tracker.apply(&event) {
            log_error("progress", &e.to_string());
        }
        if let Err(e) = tracker.touch_activity(quiz::ACTIVITY_TAG) {
            log_error("progress", &e.to_string());
        }
    };

    let on_complete = move |summary: quiz::QuizSummary| {
        let mut tracker = tracker.write();
        for event in [
            summary.completion_event(),
            ProgressEvent::ModuleCompleted {
                module: quiz::MODULE_NAME.to_owned(),
            },
        ] {
            if let Err(e) = tracker.apply(&event) {
                log_error("progress", &e.to_string());
            }
        }
    };

    let articles: Vec<NewsArticle> = news().unwrap_or_default();
    let loading = news().is_none();

    rsx! {
        div { class: "flex flex-col lg:flex-row gap-6",
            div { class: "flex-1",
                Quiz {
                    questions: quiz::default_questions(),
                    on_event,
                    on_complete,
                }
            }
            div { class: "lg:w-96 flex-shrink-0",
                h3 { class: "text-base font-semibold text-[var(--text-heading)] mb-2",
                    "Deepfakes in the news"
                }
                NewsList { articles, loading }
            }
        }
    }
}

/// The inbox-sorting exercise.
#[component]
fn PhishingSection() -> Element {
    let mut tracker = use_context::<Signal<ProgressTracker>>();

    let on_complete = move |outcome: phishing::SortOutcome| {
        let mut tracker = tracker.write();

        // Score per placement the way the live exercise does, then the
        // completion bonus and module record.
        let mut events = Vec::new();
        events.extend(std::iter::repeat_n(ProgressEvent::QuizCorrect, outcome.correct));
        events.extend(std::iter::repeat_n(ProgressEvent::QuizIncorrect, outcome.wrong));
        events.push(phishing::SortOutcome::completion_event());

        for event in events {
            if let Err(e) = tracker.apply(&event) {
                log_error("progress", &e.to_string());
            }
        }
        if let Err(e) = tracker.touch_activity(phishing::ACTIVITY_TAG) {
            log_error("progress", &e.to_string());
        }
    };

    rsx! {
        PhishingSorter {
            emails: phishing::sample_inbox(),
            on_complete,
        }
    }
}

/// Profile editor plus the identity scan.
#[component]
fn ProfileSection() -> Element {
    let mut saving = use_signal(|| false);
    let mut scanning = use_signal(|| false);
    let mut report = use_signal(|| Option::<ScanReport>::None);

    let mut profile = use_resource(|| async {
        match fakeseek_api::handle_get_profile(&HttpProfileStore::default(), USER_ID).await {
            Ok(envelope) => envelope.profile,
            Err(e) => {
                log_error("profile", &e.to_string());
                None
            }
        }
    });

    let on_save = move |request: SaveProfileRequest| {
        saving.set(true);
        spawn(async move {
            let mut store = HttpProfileStore::default();
            let outcome =
                fakeseek_api::handle_save_profile(&mut store, USER_ID, request, now_ms()).await;
            if let Err(e) = outcome {
                log_error("profile", &e.to_string());
            }
            profile.restart();
            saving.set(false);
        });
    };

    let on_scan = move |()| {
        scanning.set(true);
        spawn(async move {
            let outcome = fakeseek_api::handle_scan(
                &HttpProfileStore::default(),
                &HttpSearchProvider::default(),
                USER_ID,
                now_ms(),
            )
            .await;
            match outcome {
                Ok(response) => report.set(Some(response.result)),
                Err(e) => log_error("scan", &e.to_string()),
            }
            scanning.set(false);
        });
    };

    rsx! {
        div { class: "flex flex-col gap-6",
            ProfileForm {
                profile: profile().flatten(),
                saving: saving(),
                on_save,
            }
            ScanPanel {
                report: report(),
                scanning: scanning(),
                on_scan,
            }
        }
    }
}
