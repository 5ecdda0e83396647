//! Profile editor: name fields plus two photo slots.

use dioxus::prelude::*;
use fakeseek_api::dataurl::encode_jpeg_data_url;
use fakeseek_api::profile::{SaveProfileRequest, UserProfile};

use super::upload::PhotoUpload;

/// Props for the [`ProfileForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ProfileFormProps {
    /// Existing profile to prefill from, if any.
    profile: Option<UserProfile>,
    /// A save is in flight; the submit button is disabled meanwhile.
    saving: bool,
    /// Fired with the assembled request on submit.
    on_save: EventHandler<SaveProfileRequest>,
}

/// Name inputs and two photo uploads feeding a save request.
///
/// Photos are stored as data URLs, matching what the profile endpoint
/// persists. Validation happens server-side; the form only disables
/// submit while blank.
#[component]
pub fn ProfileForm(props: ProfileFormProps) -> Element {
    let initial = props.profile.clone();
    let mut first_name =
        use_signal(|| initial.as_ref().map(|p| p.first_name.clone()).unwrap_or_default());
    let mut last_name =
        use_signal(|| initial.as_ref().map(|p| p.last_name.clone()).unwrap_or_default());
    let mut image1 =
        use_signal(|| initial.as_ref().map(|p| p.profile_image1.clone()).unwrap_or_default());
    let mut image2 =
        use_signal(|| initial.map(|p| p.profile_image2).unwrap_or_default());

    let blank = first_name().trim().is_empty() || last_name().trim().is_empty();

    let on_save = props.on_save;
    let submit = move |_| {
        on_save.call(SaveProfileRequest {
            first_name: Some(first_name()),
            last_name: Some(last_name()),
            profile_image1: Some(image1()),
            profile_image2: Some(image2()),
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-4 bg-[var(--surface)] rounded-lg p-4 border border-[var(--border)]",

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                label { class: "flex flex-col gap-1 text-sm text-[var(--text-secondary)]",
                    "First name"
                    input {
                        r#type: "text",
                        class: "px-3 py-2 rounded bg-[var(--bg)] border border-[var(--border-muted)] text-[var(--text)]",
                        value: "{first_name}",
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                }
                label { class: "flex flex-col gap-1 text-sm text-[var(--text-secondary)]",
                    "Last name"
                    input {
                        r#type: "text",
                        class: "px-3 py-2 rounded bg-[var(--bg)] border border-[var(--border-muted)] text-[var(--text)]",
                        value: "{last_name}",
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                div {
                    p { class: "text-sm text-[var(--text-secondary)] mb-1", "Photo 1" }
                    PhotoUpload {
                        prompt: "Drop your first photo here or",
                        on_upload: move |(bytes, _name): (Vec<u8>, String)| {
                            image1.set(encode_jpeg_data_url(&bytes));
                        },
                    }
                }
                div {
                    p { class: "text-sm text-[var(--text-secondary)] mb-1", "Photo 2" }
                    PhotoUpload {
                        prompt: "Drop your second photo here or",
                        on_upload: move |(bytes, _name): (Vec<u8>, String)| {
                            image2.set(encode_jpeg_data_url(&bytes));
                        },
                    }
                }
            }

            button {
                class: "self-start px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded text-white font-medium transition-colors disabled:opacity-50",
                disabled: props.saving || blank,
                onclick: submit,
                if props.saving { "Saving..." } else { "Save profile" }
            }
        }
    }
}
