//! Identity-scan trigger and report display.

use dioxus::prelude::*;
use fakeseek_api::scan::{ScanReport, ScanStatus};

/// Props for the [`ScanPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ScanPanelProps {
    /// The most recent report, if a scan has completed.
    report: Option<ScanReport>,
    /// A scan is in flight.
    scanning: bool,
    /// Fired when the user requests a scan.
    on_scan: EventHandler<()>,
}

/// Scan button plus the aggregated report once one exists.
#[component]
pub fn ScanPanel(props: ScanPanelProps) -> Element {
    let on_scan = props.on_scan;

    rsx! {
        div {
            class: "flex flex-col gap-4 bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)]",

            div { class: "flex items-center justify-between",
                div {
                    h3 { class: "text-base font-semibold text-[var(--text-heading)]",
                        "Digital identity scan"
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "Search the web for deepfake content using your profile name."
                    }
                }
                button {
                    class: "px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded text-white font-medium transition-colors disabled:opacity-50",
                    disabled: props.scanning,
                    onclick: move |_| on_scan.call(()),
                    if props.scanning { "Scanning..." } else { "Run scan" }
                }
            }

            if props.scanning {
                p { class: "text-[var(--text-secondary)] text-sm animate-pulse",
                    "Searching the web for deepfake content..."
                }
            }

            if let Some(ref report) = props.report {
                {render_report(report)}
            }
        }
    }
}

/// Render one completed report.
fn render_report(report: &ScanReport) -> Element {
    let (banner, text) = match report.status {
        ScanStatus::Found => ("bg-[var(--error-bg)] border-[var(--border-error)]", "text-[var(--text-error)]"),
        ScanStatus::Clean => ("bg-[var(--success-bg)] border-[var(--border-success)]", "text-[var(--text-success)]"),
    };

    rsx! {
        div { class: "flex flex-col gap-3",
            div { class: "rounded border p-3 {banner}",
                p { class: "text-sm font-medium {text}", "{report.message}" }
                p { class: "text-xs text-[var(--text-secondary)] mt-1",
                    "{report.deepfake_related_count} of {report.total_results} results flagged for {report.full_name}"
                }
            }

            for (i, result) in report.results.iter().filter(|r| r.is_deepfake_related).enumerate() {
                div {
                    key: "{i}",
                    class: "rounded border border-[var(--border)] p-3",
                    a {
                        href: "{result.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "text-sm font-medium text-[var(--text-link)] hover:underline",
                        "{result.title}"
                    }
                    p { class: "text-xs text-[var(--text-secondary)] mt-1", "{result.snippet}" }
                    p { class: "text-xs text-[var(--muted)] mt-1",
                        {format!("Confidence {:.0}% · {}", result.confidence * 100.0, result.query_used)}
                    }
                }
            }
        }
    }
}
