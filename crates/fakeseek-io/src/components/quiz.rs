//! AI-safety quiz component.
//!
//! Walks through the question list one at a time, fires a progress
//! event per answer, and reports a summary when the last question is
//! answered.

use dioxus::prelude::*;
use fakeseek_progress::ProgressEvent;
use fakeseek_progress::quiz::{self, QuizQuestion, QuizSummary};

/// Props for the [`Quiz`] component.
#[derive(Props, Clone, PartialEq)]
pub struct QuizProps {
    /// Questions to ask, in order.
    questions: Vec<QuizQuestion>,
    /// Fired once per answered question with the score delta event.
    on_event: EventHandler<ProgressEvent>,
    /// Fired once when every question has been answered.
    on_complete: EventHandler<QuizSummary>,
}

/// One-question-at-a-time quiz with per-answer explanations.
#[component]
pub fn Quiz(props: QuizProps) -> Element {
    let total = props.questions.len();
    let mut current = use_signal(|| 0usize);
    let mut answers = use_signal(|| vec![Option::<usize>::None; total]);
    // The just-answered option, kept visible until "Next".
    let mut revealed = use_signal(|| Option::<usize>::None);

    if total == 0 {
        return rsx! {
            p { class: "text-[var(--text-placeholder)]", "No questions available." }
        };
    }

    if current() >= total {
        let summary = quiz::summarize(&props.questions, &answers());
        return rsx! {
            div {
                class: "bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)] text-center",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)] mb-2",
                    "Quiz complete"
                }
                p { class: "text-[var(--text-secondary)]",
                    "{summary.correct_answers}/{summary.total_questions} correct ({summary.percent_score}%)"
                }
            }
        };
    }

    let index = current();
    let question = props.questions[index].clone();

    let on_answer = {
        let question = question.clone();
        let on_event = props.on_event;
        EventHandler::new(move |choice: usize| {
            if revealed().is_some() {
                return;
            }
            revealed.set(Some(choice));
            answers.with_mut(|a| a[index] = Some(choice));
            on_event.call(quiz::grade_answer(&question, choice));
        })
    };

    let questions = props.questions.clone();
    let on_complete = props.on_complete;
    let advance = move |_| {
        if revealed().is_none() {
            return;
        }
        revealed.set(None);
        let next = index + 1;
        current.set(next);
        if next >= total {
            let summary = quiz::summarize(&questions, &answers());
            on_complete.call(summary);
        }
    };

    rsx! {
        div {
            class: "bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)] flex flex-col gap-3",

            span { class: "text-xs text-[var(--text-secondary)]",
                "Question {index + 1} of {total}"
            }
            h3 { class: "text-base font-semibold text-[var(--text-heading)]",
                "{question.question}"
            }

            for (i, option) in question.options.iter().enumerate() {
                {render_option(i, option, &question, revealed(), on_answer)}
            }

            if let Some(choice) = revealed() {
                div { class: "rounded p-3 bg-[var(--surface-active)]",
                    p { class: "text-sm font-medium text-[var(--text-heading)] mb-1",
                        if question.is_correct(choice) { "Correct!" } else { "Not quite." }
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "{question.explanation}"
                    }
                }
                button {
                    class: "self-end px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded text-white font-medium transition-colors",
                    onclick: advance,
                    if index + 1 == total { "Finish" } else { "Next question" }
                }
            }
        }
    }
}

/// Render one answer option button.
fn render_option(
    index: usize,
    option: &str,
    question: &QuizQuestion,
    revealed: Option<usize>,
    on_answer: EventHandler<usize>,
) -> Element {
    let state = match revealed {
        None => "border-[var(--border-muted)] hover:bg-[var(--surface-active)] cursor-pointer",
        Some(_) if question.is_correct(index) => {
            "border-[var(--border-success)] bg-[var(--success-bg)]"
        }
        Some(choice) if choice == index => "border-[var(--border-error)] bg-[var(--error-bg)]",
        Some(_) => "border-[var(--border-muted)] opacity-60",
    };

    rsx! {
        button {
            key: "{index}",
            class: "text-left px-3 py-2 rounded border text-sm text-[var(--text)] transition-colors {state}",
            disabled: revealed.is_some(),
            onclick: move |_| on_answer.call(index),
            "{option}"
        }
    }
}
