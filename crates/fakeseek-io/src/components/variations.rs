//! Side-by-side grid of generated variation images.

use std::rc::Rc;

use dioxus::prelude::*;
use fakeseek_pipeline::{ConfidenceLabel, VariationSet};

use crate::raster;

/// Props for the [`VariationGrid`] component.
#[derive(Props, Clone)]
pub struct VariationGridProps {
    /// All four generated variations.
    variations: Rc<VariationSet>,
}

impl PartialEq for VariationGridProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.variations, &other.variations)
    }
}

/// Four labeled variation tiles, escalating left to right.
///
/// Each tile shows the encoded output for one confidence label with
/// its display name and assumed-confidence badge.
#[component]
pub fn VariationGrid(props: VariationGridProps) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-2 lg:grid-cols-4 gap-4",

            for label in ConfidenceLabel::ALL {
                {render_tile(&props.variations, label)}
            }
        }
    }
}

/// Render a single variation tile.
fn render_tile(variations: &VariationSet, label: ConfidenceLabel) -> Element {
    let Some(variation) = variations.get(label) else {
        return rsx! {};
    };

    let thumbnail = match raster::variation_to_blob_url(variation) {
        Ok(url) => rsx! {
            img {
                src: "{url}",
                class: "w-full h-full object-cover",
                alt: "{variation.display_name()} variation",
                onload: move |_| raster::revoke_blob_url(&url),
            }
        },
        Err(_) => rsx! {
            div { class: "w-full h-full flex items-center justify-center text-[var(--text-disabled)] text-xs",
                "display failed"
            }
        },
    };

    rsx! {
        div {
            class: "flex flex-col gap-2 bg-[var(--surface)] rounded-lg p-3 border border-[var(--border)]",

            div { class: "w-full aspect-square overflow-hidden rounded bg-[var(--preview-bg)]",
                {thumbnail}
            }

            span { class: "text-sm font-medium text-[var(--text-heading)] truncate",
                "{variation.display_name()}"
            }
            span { class: "text-xs text-[var(--text-secondary)]",
                "{variation.confidence()}% manipulation confidence"
            }
        }
    }
}
