//! Safety-assistant chat widget.

use dioxus::prelude::*;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Props for the [`ChatWidget`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ChatWidgetProps {
    /// Transcript so far, oldest first.
    messages: Vec<ChatMessage>,
    /// A reply is in flight; input is disabled meanwhile.
    busy: bool,
    /// Fired with the trimmed message text on send.
    on_send: EventHandler<String>,
}

/// Transcript plus a single-line input with a send button.
///
/// Empty input never fires `on_send`; the handler owns the adapter
/// call and appends both sides of the exchange to `messages`.
#[component]
pub fn ChatWidget(props: ChatWidgetProps) -> Element {
    let mut draft = use_signal(String::new);

    let mut send = {
        let on_send = props.on_send;
        move || {
            let text = draft().trim().to_owned();
            if text.is_empty() {
                return;
            }
            draft.set(String::new());
            on_send.call(text);
        }
    };

    rsx! {
        div {
            class: "flex flex-col gap-3 bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)]",

            div { class: "flex flex-col gap-2 max-h-80 overflow-y-auto",
                if props.messages.is_empty() {
                    p { class: "text-[var(--text-placeholder)] text-sm",
                        "Ask about deepfakes, phishing, or staying safe online."
                    }
                }

                for (i, message) in props.messages.iter().enumerate() {
                    {render_message(i, message)}
                }

                if props.busy {
                    p { class: "text-[var(--text-secondary)] text-sm animate-pulse",
                        "Thinking..."
                    }
                }
            }

            div { class: "flex gap-2",
                input {
                    r#type: "text",
                    class: "flex-1 px-3 py-2 rounded bg-[var(--bg)] border border-[var(--border-muted)] text-[var(--text)]",
                    placeholder: "Type a question",
                    value: "{draft}",
                    disabled: props.busy,
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            send();
                        }
                    },
                }
                button {
                    class: "px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded text-white font-medium transition-colors disabled:opacity-50",
                    disabled: props.busy,
                    onclick: move |_| send(),
                    "Send"
                }
            }
        }
    }
}

/// Render one transcript bubble.
fn render_message(index: usize, message: &ChatMessage) -> Element {
    let (align, bubble) = match message.role {
        ChatRole::User => (
            "self-end",
            "bg-[var(--btn-primary)] text-white",
        ),
        ChatRole::Assistant => (
            "self-start",
            "bg-[var(--surface-active)] text-[var(--text)]",
        ),
    };

    rsx! {
        div {
            key: "{index}",
            class: "max-w-[85%] rounded-lg px-3 py-2 text-sm {align} {bubble}",
            "{message.text}"
        }
    }
}
