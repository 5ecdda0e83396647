//! The phishing inbox-sorting exercise.
//!
//! The user drags each email into a "safe" or "suspicious" bin;
//! grading awards +2 per correct placement and -1 per wrong one.
//! Unplaced emails carry no penalty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::ProgressEvent;

/// Activity tag recorded when the sorting exercise is graded.
pub const ACTIVITY_TAG: &str = "phishing_protection_quiz";
/// Module name recorded on first completion.
pub const MODULE_NAME: &str = "phishing_protection";

/// One email in the exercise inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishingEmail {
    /// Stable email id.
    pub id: u32,
    /// Subject line.
    pub subject: String,
    /// Sender address as displayed.
    pub sender: String,
    /// Body preview.
    pub content: String,
    /// Whether the email is actually safe.
    pub is_safe: bool,
    /// Shown after grading: why the email is or is not safe.
    pub reason: String,
}

/// The bin the user dropped an email into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bin {
    /// Judged legitimate.
    Safe,
    /// Judged phishing.
    Suspicious,
}

/// Result of grading a sorted inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOutcome {
    /// Emails placed in the right bin.
    pub correct: usize,
    /// Emails placed in the wrong bin.
    pub wrong: usize,
    /// Emails never placed.
    pub unsorted: usize,
    /// Net score delta: `+2` per correct, `-1` per wrong.
    pub delta: i32,
}

impl SortOutcome {
    /// The completion event for finishing the exercise.
    #[must_use]
    pub fn completion_event() -> ProgressEvent {
        ProgressEvent::ModuleCompleted {
            module: MODULE_NAME.to_owned(),
        }
    }
}

/// Grade the user's placements against the inbox.
#[must_use]
pub fn grade_sort(emails: &[PhishingEmail], placements: &BTreeMap<u32, Bin>) -> SortOutcome {
    let mut correct = 0usize;
    let mut wrong = 0usize;
    let mut unsorted = 0usize;

    for email in emails {
        match placements.get(&email.id) {
            None => unsorted += 1,
            Some(bin) => {
                let placed_safe = matches!(bin, Bin::Safe);
                if placed_safe == email.is_safe {
                    correct += 1;
                } else {
                    wrong += 1;
                }
            }
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let delta = (correct as i32) * 2 - (wrong as i32);

    SortOutcome {
        correct,
        wrong,
        unsorted,
        delta,
    }
}

/// The built-in exercise inbox: three phishing attempts interleaved
/// with three legitimate messages.
#[must_use]
pub fn sample_inbox() -> Vec<PhishingEmail> {
    let email = |id: u32,
                 subject: &str,
                 sender: &str,
                 content: &str,
                 is_safe: bool,
                 reason: &str| PhishingEmail {
        id,
        subject: subject.to_owned(),
        sender: sender.to_owned(),
        content: content.to_owned(),
        is_safe,
        reason: reason.to_owned(),
    };

    vec![
        email(
            1,
            "Your account has been compromised - Action Required",
            "security@yourbank.com",
            "URGENT: We detected suspicious activity on your account. Click here \
             immediately to secure your account or it will be suspended within 24 hours.",
            false,
            "Creates urgency and pressure, asks for immediate action",
        ),
        email(
            2,
            "Monthly Newsletter - March 2024",
            "newsletter@techcompany.com",
            "Hello! Here's our monthly update with new features and company news. No \
             action required on your part.",
            true,
            "Informational content, no urgent action required, legitimate sender",
        ),
        email(
            3,
            "You've won $10,000! Click to claim",
            "noreply@lottowinner.net",
            "Congratulations! You've been selected as our grand prize winner. Click the \
             link below to claim your $10,000 prize now!",
            false,
            "Too good to be true offer, suspicious domain, asks for immediate action",
        ),
        email(
            4,
            "Invoice #12345 - Payment Confirmation",
            "billing@paypal.com",
            "Thank you for your recent payment of $29.99. Your transaction has been \
             processed successfully. Invoice attached.",
            true,
            "Confirmation message, legitimate service, no action required",
        ),
        email(
            5,
            "Verify your identity - Account Suspension Warning",
            "noreply@amazon-security.com",
            "We need to verify your identity to prevent account suspension. Please enter \
             your password and social security number immediately.",
            false,
            "Asks for sensitive information, creates false urgency, suspicious sender",
        ),
        email(
            6,
            "Your order has been shipped",
            "orders@shopify.com",
            "Good news! Your order #ORD-789 has been shipped and is on its way. Track \
             your package using the tracking number provided.",
            true,
            "Informational update, legitimate service, no sensitive information requested",
        ),
    ]
}
