//! Collapsible long-form text.

use leptos::prelude::*;

/// Character limit before text is collapsed.
const LIMIT: usize = 255;

/// The truncated form of the text, or `None` when it fits within the
/// limit and needs no toggle.
fn collapsed(text: &str) -> Option<String> {
    if text.chars().count() <= LIMIT {
        return None;
    }
    Some(format!("{}...", text.chars().take(LIMIT).collect::<String>()))
}

/// Renders text as-is up to 255 characters; longer text is truncated
/// with a Show More / Show Less toggle.
#[component]
pub fn ExpandableText(text: String) -> impl IntoView {
    let Some(truncated) = collapsed(&text) else {
        return view! { <article>{text}</article> }.into_any();
    };

    let expanded = RwSignal::new(false);

    view! {
        <article>
            {move || if expanded.get() { text.clone() } else { truncated.clone() }}
            <button class="btn" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Show Less" } else { "Show More" }}
            </button>
        </article>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_collapsed() {
        assert_eq!(collapsed("Short text"), None);
    }

    #[test]
    fn test_text_at_limit_is_not_collapsed() {
        assert_eq!(collapsed(&"a".repeat(255)), None);
    }

    #[test]
    fn test_text_over_limit_is_truncated() {
        let truncated = collapsed(&"a".repeat(256)).unwrap();
        assert_eq!(truncated, format!("{}...", "a".repeat(255)));
    }
}
