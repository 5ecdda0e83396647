//! Phishing inbox-sorting exercise.
//!
//! Emails are dragged (or clicked) into a Safe or Suspicious bin.
//! Once every email is placed, the exercise grades the sort and
//! reports the outcome.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use fakeseek_progress::phishing::{self, Bin, PhishingEmail, SortOutcome};

/// Props for the [`PhishingSorter`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PhishingSorterProps {
    /// The inbox to sort.
    emails: Vec<PhishingEmail>,
    /// Fired once when every email has been placed.
    on_complete: EventHandler<SortOutcome>,
}

/// Drag-and-drop email sorter with two destination bins.
#[component]
pub fn PhishingSorter(props: PhishingSorterProps) -> Element {
    let mut placements = use_signal(BTreeMap::<u32, Bin>::new);
    let mut dragging = use_signal(|| Option::<u32>::None);
    let mut outcome = use_signal(|| Option::<SortOutcome>::None);

    let emails = props.emails.clone();
    let on_complete = props.on_complete;
    let place = EventHandler::new(move |(id, bin): (u32, Bin)| {
        if outcome().is_some() {
            return;
        }
        placements.with_mut(|p| {
            p.insert(id, bin);
        });
        dragging.set(None);
        if placements().len() == emails.len() {
            let graded = phishing::grade_sort(&emails, &placements());
            outcome.set(Some(graded.clone()));
            on_complete.call(graded);
        }
    });

    let unplaced: Vec<&PhishingEmail> = props
        .emails
        .iter()
        .filter(|e| !placements().contains_key(&e.id))
        .collect();

    rsx! {
        div { class: "flex flex-col gap-4",

            if let Some(ref graded) = outcome() {
                div {
                    class: "bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)] text-center",
                    h3 { class: "text-lg font-semibold text-[var(--text-heading)] mb-2",
                        "Inbox sorted"
                    }
                    p { class: "text-[var(--text-secondary)]",
                        "{graded.correct} correct, {graded.wrong} misplaced"
                    }
                }
            } else {
                div { class: "flex flex-col gap-2",
                    for email in unplaced {
                        {render_email(email, dragging, place)}
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-4",
                {render_bin(Bin::Safe, "Safe", dragging, place, &placements(), &props.emails)}
                {render_bin(Bin::Suspicious, "Suspicious", dragging, place, &placements(), &props.emails)}
            }
        }
    }
}

/// Render one draggable email card with click-to-place buttons.
fn render_email(
    email: &PhishingEmail,
    mut dragging: Signal<Option<u32>>,
    place: EventHandler<(u32, Bin)>,
) -> Element {
    let id = email.id;

    rsx! {
        div {
            key: "{id}",
            class: "bg-[var(--surface)] rounded-lg p-3 border border-[var(--border)] cursor-grab",
            draggable: true,
            ondragstart: move |_| dragging.set(Some(id)),

            p { class: "text-sm font-semibold text-[var(--text-heading)]", "{email.subject}" }
            p { class: "text-xs text-[var(--text-secondary)] mb-1", "From: {email.sender}" }
            p { class: "text-sm text-[var(--text)]", "{email.content}" }

            div { class: "flex gap-2 mt-2",
                button {
                    class: "px-3 py-1 rounded text-xs border border-[var(--border-success)] text-[var(--text-success)] hover:bg-[var(--success-bg)]",
                    onclick: move |_| place.call((id, Bin::Safe)),
                    "Looks safe"
                }
                button {
                    class: "px-3 py-1 rounded text-xs border border-[var(--border-error)] text-[var(--text-error)] hover:bg-[var(--error-bg)]",
                    onclick: move |_| place.call((id, Bin::Suspicious)),
                    "Suspicious"
                }
            }
        }
    }
}

/// Render one destination bin with the emails already placed in it.
fn render_bin(
    bin: Bin,
    title: &'static str,
    dragging: Signal<Option<u32>>,
    place: EventHandler<(u32, Bin)>,
    placements: &BTreeMap<u32, Bin>,
    emails: &[PhishingEmail],
) -> Element {
    let placed: Vec<String> = emails
        .iter()
        .filter(|e| placements.get(&e.id) == Some(&bin))
        .map(|e| e.subject.clone())
        .collect();

    rsx! {
        div {
            class: "min-h-32 rounded-lg border-2 border-dashed border-[var(--border-muted)] p-3",
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| {
                evt.prevent_default();
                if let Some(id) = dragging() {
                    place.call((id, bin));
                }
            },

            h4 { class: "text-sm font-semibold text-[var(--text-heading)] mb-2", "{title}" }

            for (i, subject) in placed.iter().enumerate() {
                p {
                    key: "{i}",
                    class: "text-xs text-[var(--text-secondary)] truncate",
                    "{subject}"
                }
            }
        }
    }
}
