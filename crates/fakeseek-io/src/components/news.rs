//! Deepfake-news article list.

use dioxus::prelude::*;
use fakeseek_api::news::NewsArticle;

/// Props for the [`NewsList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NewsListProps {
    /// Articles to show, newest first.
    articles: Vec<NewsArticle>,
    /// Articles are still being fetched.
    loading: bool,
}

/// Linked article cards for the education feed.
#[component]
pub fn NewsList(props: NewsListProps) -> Element {
    if props.loading {
        return rsx! {
            p { class: "text-[var(--text-secondary)] text-sm animate-pulse",
                "Loading news..."
            }
        };
    }

    rsx! {
        div { class: "flex flex-col gap-3",
            for (i, article) in props.articles.iter().enumerate() {
                a {
                    key: "{i}",
                    href: "{article.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "block bg-[var(--surface)] rounded-lg p-3 border border-[var(--border)] hover:bg-[var(--surface-active)] transition-colors",

                    h4 { class: "text-sm font-semibold text-[var(--text-heading)]",
                        "{article.title}"
                    }
                    p { class: "text-xs text-[var(--text-secondary)] mt-1",
                        "{article.description}"
                    }
                    p { class: "text-xs text-[var(--muted)] mt-1",
                        "{article.source} · {article.published_at}"
                    }
                }
            }
        }
    }
}
