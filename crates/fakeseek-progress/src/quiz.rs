//! Quiz model and grading for the learning module.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::{ProgressEvent, completion_bonus};

/// Activity tag recorded when the safety quiz is played.
pub const ACTIVITY_TAG: &str = "ai_safety_quiz";
/// Module name recorded on quiz completion.
pub const MODULE_NAME: &str = "learn";

/// Topic area a quiz question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Foundations of AI and synthetic media.
    AiBasics,
    /// Spotting manipulated images and video.
    DeepfakeDetection,
    /// Safe habits around unexpected content.
    DigitalSafety,
    /// General security hygiene.
    Cybersecurity,
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Stable question id.
    pub id: u32,
    /// The question text.
    pub question: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    /// Explanation shown after answering.
    pub explanation: String,
    /// Topic area.
    pub category: Category,
}

impl QuizQuestion {
    /// Whether `selected` is the correct option index.
    #[must_use]
    pub const fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }
}

/// Grade a single answer into the progress event it causes.
#[must_use]
pub const fn grade_answer(question: &QuizQuestion, selected: usize) -> ProgressEvent {
    if question.is_correct(selected) {
        ProgressEvent::QuizCorrect
    } else {
        ProgressEvent::QuizIncorrect
    }
}

/// Per-category tally of correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryTally {
    /// Questions answered correctly in this category.
    pub correct: usize,
    /// Questions in this category.
    pub total: usize,
}

/// Outcome of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Percent of questions answered correctly, rounded, 0-100.
    pub percent_score: u8,
    /// Total number of questions.
    pub total_questions: usize,
    /// Questions answered correctly.
    pub correct_answers: usize,
    /// Questions answered incorrectly or left unanswered.
    pub wrong_answers: usize,
    /// Per-category breakdown.
    pub category_scores: BTreeMap<Category, CategoryTally>,
}

impl QuizSummary {
    /// The completion event this summary produces.
    #[must_use]
    pub const fn completion_event(&self) -> ProgressEvent {
        ProgressEvent::QuizCompleted {
            percent_correct: self.percent_score,
        }
    }

    /// The completion bonus in points.
    #[must_use]
    pub const fn bonus(&self) -> i32 {
        completion_bonus(self.percent_score)
    }
}

/// Summarize a finished quiz. `answers[i]` is the selected option for
/// `questions[i]`, or `None` if the question was skipped (counted as
/// wrong).
#[must_use]
pub fn summarize(questions: &[QuizQuestion], answers: &[Option<usize>]) -> QuizSummary {
    let mut correct_answers = 0;
    let mut category_scores: BTreeMap<Category, CategoryTally> = BTreeMap::new();

    for (i, question) in questions.iter().enumerate() {
        let tally = category_scores.entry(question.category).or_default();
        tally.total += 1;
        let is_correct = answers
            .get(i)
            .copied()
            .flatten()
            .is_some_and(|selected| question.is_correct(selected));
        if is_correct {
            correct_answers += 1;
            tally.correct += 1;
        }
    }

    let total_questions = questions.len();
    let percent_score = if total_questions == 0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        {
            ((correct_answers as f64 / total_questions as f64) * 100.0).round() as u8
        }
    };

    QuizSummary {
        percent_score,
        total_questions,
        correct_answers,
        wrong_answers: total_questions - correct_answers,
        category_scores,
    }
}

/// The built-in safety quiz.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn default_questions() -> Vec<QuizQuestion> {
    let q = |id: u32,
             question: &str,
             options: [&str; 4],
             correct_answer: usize,
             explanation: &str,
             category: Category| QuizQuestion {
        id,
        question: question.to_owned(),
        options: options.iter().map(|&o| o.to_owned()).collect(),
        correct_answer,
        explanation: explanation.to_owned(),
        category,
    };

    vec![
        q(
            1,
            "What is a deepfake?",
            [
                "A type of computer virus",
                "AI-generated synthetic media that replaces a person's likeness",
                "A social media filter",
                "A video editing software",
            ],
            1,
            "A deepfake is AI-generated synthetic media that uses deep learning to replace \
             a person's likeness with someone else's, often creating convincing but fake \
             videos or images.",
            Category::AiBasics,
        ),
        q(
            2,
            "Which of these is NOT a common sign of a deepfake video?",
            [
                "Inconsistent lighting on the face",
                "Unnatural eye movements or blinking",
                "High video quality",
                "Audio that doesn't match lip movements",
            ],
            2,
            "High video quality is not a sign of a deepfake. Common signs include \
             inconsistent lighting, unnatural eye movements, and audio-visual mismatches.",
            Category::DeepfakeDetection,
        ),
        q(
            3,
            "What should you do if you receive a suspicious video claiming to be from a \
             family member?",
            [
                "Share it immediately on social media",
                "Call the person directly to verify",
                "Ignore it completely",
                "Forward it to all your contacts",
            ],
            1,
            "Always verify suspicious content by calling the person directly through a \
             known phone number or meeting them in person. Never share unverified content.",
            Category::DigitalSafety,
        ),
        q(
            4,
            "Which technology is commonly used to create deepfakes?",
            [
                "Blockchain",
                "Generative Adversarial Networks (GANs)",
                "Quantum computing",
                "Cloud storage",
            ],
            1,
            "Generative Adversarial Networks (GANs) are the primary technology used to \
             create deepfakes, where two neural networks compete to create increasingly \
             realistic synthetic content.",
            Category::AiBasics,
        ),
        q(
            5,
            "What is the best way to protect yourself from deepfake scams?",
            [
                "Never use video calls",
                "Be skeptical of unexpected video content and verify through other channels",
                "Only trust videos from verified accounts",
                "Use only the latest smartphones",
            ],
            1,
            "The best protection is to be skeptical of unexpected video content and always \
             verify through other communication channels, especially for financial or \
             personal requests.",
            Category::DigitalSafety,
        ),
        q(
            6,
            "Which of these is a red flag for a deepfake image?",
            [
                "Perfect symmetry in facial features",
                "Slight blur around the edges of the face",
                "Natural skin texture",
                "Consistent lighting throughout the image",
            ],
            1,
            "Blur around the edges of the face is a common red flag for deepfakes, as the \
             AI often struggles to perfectly blend the face with the background.",
            Category::DeepfakeDetection,
        ),
        q(
            7,
            "What is 'phishing' in the context of digital security?",
            [
                "A type of fishing game",
                "A method of catching fish using technology",
                "A cyber attack that tricks people into revealing sensitive information",
                "A way to store passwords securely",
            ],
            2,
            "Phishing is a cyber attack method where attackers trick people into revealing \
             sensitive information like passwords or credit card numbers through fake \
             emails, websites, or messages.",
            Category::Cybersecurity,
        ),
        q(
            8,
            "How can you verify if a video call is legitimate?",
            [
                "Ask the person to move their hand in front of their face",
                "Check if the video quality is high",
                "Verify the caller's identity through a separate channel",
                "All of the above",
            ],
            3,
            "All of these methods help verify a video call. Asking for specific movements, \
             checking video quality, and verifying identity through separate channels are \
             all good practices.",
            Category::DigitalSafety,
        ),
        q(
            9,
            "What does 'AI' stand for?",
            [
                "Automated Intelligence",
                "Artificial Intelligence",
                "Advanced Internet",
                "Automated Internet",
            ],
            1,
            "AI stands for Artificial Intelligence, which refers to computer systems that \
             can perform tasks that typically require human intelligence.",
            Category::AiBasics,
        ),
        q(
            10,
            "Which of these is the most secure way to share sensitive information?",
            [
                "Through social media DMs",
                "Via email",
                "Through encrypted messaging apps",
                "By posting it publicly",
            ],
            2,
            "Encrypted messaging apps provide the highest level of security for sharing \
             sensitive information, as the messages are encrypted and harder to intercept.",
            Category::Cybersecurity,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_quiz_shape() {
        let questions = default_questions();
        assert_eq!(questions.len(), 10);
        for q in &questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.correct_answer < q.options.len());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn grading_maps_to_events() {
        let questions = default_questions();
        let first = &questions[0];
        assert_eq!(
            grade_answer(first, first.correct_answer),
            ProgressEvent::QuizCorrect
        );
        assert_eq!(grade_answer(first, 0), ProgressEvent::QuizIncorrect);
    }

    #[test]
    fn perfect_quiz_summary() {
        let questions = default_questions();
        let answers: Vec<Option<usize>> =
            questions.iter().map(|q| Some(q.correct_answer)).collect();
        let summary = summarize(&questions, &answers);
        assert_eq!(summary.percent_score, 100);
        assert_eq!(summary.correct_answers, 10);
        assert_eq!(summary.wrong_answers, 0);
        assert_eq!(summary.bonus(), 5);
        assert_eq!(
            summary.completion_event(),
            ProgressEvent::QuizCompleted {
                percent_correct: 100
            }
        );
    }

    #[test]
    fn skipped_questions_count_as_wrong() {
        let questions = default_questions();
        let mut answers: Vec<Option<usize>> =
            questions.iter().map(|q| Some(q.correct_answer)).collect();
        answers[3] = None;
        answers[7] = None;
        let summary = summarize(&questions, &answers);
        assert_eq!(summary.correct_answers, 8);
        assert_eq!(summary.wrong_answers, 2);
        assert_eq!(summary.percent_score, 80);
        assert_eq!(summary.bonus(), 5);
    }

    #[test]
    fn middling_quiz_gets_middle_bonus() {
        let questions = default_questions();
        let answers: Vec<Option<usize>> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i < 7 {
                    Some(q.correct_answer)
                } else {
                    Some((q.correct_answer + 1) % q.options.len())
                }
            })
            .collect();
        let summary = summarize(&questions, &answers);
        assert_eq!(summary.percent_score, 70);
        assert_eq!(summary.bonus(), 3);
    }

    #[test]
    fn category_tallies_cover_all_questions() {
        let questions = default_questions();
        let answers: Vec<Option<usize>> =
            questions.iter().map(|q| Some(q.correct_answer)).collect();
        let summary = summarize(&questions, &answers);
        let total: usize = summary.category_scores.values().map(|t| t.total).sum();
        let correct: usize = summary.category_scores.values().map(|t| t.correct).sum();
        assert_eq!(total, 10);
        assert_eq!(correct, 10);
        assert_eq!(summary.category_scores.len(), 4);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.percent_score, 0);
        assert_eq!(summary.bonus(), 1);
    }
}
