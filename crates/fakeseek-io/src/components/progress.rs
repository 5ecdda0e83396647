//! Safety-score progress indicator.

use dioxus::prelude::*;
use fakeseek_progress::SafetyScore;

/// Props for the [`ProgressIndicator`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ProgressIndicatorProps {
    /// Current clamped safety score.
    score: SafetyScore,
}

/// Score bar with the qualitative level and its encouragement line.
#[component]
pub fn ProgressIndicator(props: ProgressIndicatorProps) -> Element {
    let score = props.score.value();
    let level = props.score.level();

    rsx! {
        div {
            class: "bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)]",

            div { class: "flex items-baseline justify-between mb-2",
                span { class: "text-sm font-semibold text-[var(--text-heading)]",
                    "Digital Safety Score"
                }
                span { class: "text-sm text-[var(--text-secondary)]",
                    "{score}/100 · {level}"
                }
            }

            div {
                class: "w-full h-2 rounded-full bg-[var(--surface-active)] overflow-hidden",
                role: "progressbar",
                aria_valuenow: "{score}",
                aria_valuemin: "0",
                aria_valuemax: "100",
                div {
                    class: "h-full rounded-full bg-[var(--btn-primary)] transition-all",
                    style: "width: {score}%",
                }
            }

            p { class: "text-xs text-[var(--text-secondary)] mt-2",
                "{level.message()}"
            }
        }
    }
}
