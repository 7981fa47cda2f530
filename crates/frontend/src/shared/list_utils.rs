/// List helpers shared by the search widgets (filtering, highlighting, input field)
use leptos::prelude::*;

/// Items that can be matched against a search query
pub trait Searchable {
    /// Whether the item matches the query.
    /// `filter_lower` is already lowercased and not empty.
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

impl Searchable for String {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.to_lowercase().contains(filter_lower)
    }
}

/// Case-insensitive substring filter. An empty query keeps the whole list.
pub fn filter_items<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Split text into `(fragment, is_match)` pieces for highlighting.
///
/// Matching runs on the lowercased text; a match is only highlighted when both of
/// its ends fall on a character boundary of the original text.
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return vec![(text, false)];
    }

    // lowercasing changes byte lengths per char (İ grows, Ω shrinks), so keep
    // (lowercased offset, original offset) for every char start
    let mut text_lower = String::with_capacity(text.len());
    let mut bounds = Vec::with_capacity(text.len() + 1);
    for (pos, c) in text.char_indices() {
        bounds.push((text_lower.len(), pos));
        text_lower.extend(c.to_lowercase());
    }
    bounds.push((text_lower.len(), text.len()));

    let original = |lower_pos: usize| {
        bounds
            .binary_search_by_key(&lower_pos, |&(lower, _)| lower)
            .ok()
            .map(|i| bounds[i].1)
    };

    let mut parts = Vec::new();
    let mut last_pos = 0;
    let mut search_from = 0;

    while let Some(found) = text_lower[search_from..].find(&filter_lower) {
        let start = search_from + found;
        let end = start + filter_lower.len();
        match (original(start), original(end)) {
            (Some(match_start), Some(match_end)) => {
                if match_start > last_pos {
                    parts.push((&text[last_pos..match_start], false));
                }
                parts.push((&text[match_start..match_end], true));
                last_pos = match_end;
                search_from = end;
            }
            _ => {
                // match starts or ends inside the expansion of one char: skip it
                let step = text_lower[start..].chars().next().map_or(1, char::len_utf8);
                search_from = start + step;
            }
        }
    }

    if last_pos < text.len() {
        parts.push((&text[last_pos..], false));
    }

    parts
}

/// Highlight query matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(part, is_match)| {
            let part = part.to_string();
            if is_match {
                view! { <mark class="search-match">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Search field with a clear button.
///
/// No debounce here: every keystroke goes to `on_input`, the delay is handled by
/// [`crate::shared::search::DebouncedSearch`].
#[component]
pub fn SearchInput(
    /// Current query
    #[prop(into)]
    value: Signal<String>,
    /// Called on every text change
    #[prop(into)]
    on_input: Callback<String>,
    /// Field got focus (open the dropdown if there is something to show)
    #[prop(optional, into)]
    on_focus: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| {
        on_input.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| {
                    if let Some(cb) = on_focus {
                        cb.run(());
                    }
                }
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Clear"
                >
                    {crate::shared::icons::IconName::X.render()}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["Chicago".into(), "Houston".into(), "Hyderabad".into()]
    }

    #[test]
    fn test_filter_items() {
        assert_eq!(filter_items(&names(), "ch"), vec!["Chicago".to_string()]);
        assert_eq!(filter_items(&names(), " HOU "), vec!["Houston".to_string()]);
        assert!(filter_items(&names(), "xyz").is_empty());
        assert_eq!(filter_items(&names(), "").len(), 3);
    }

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Hyderabad", "a"),
            vec![
                ("Hyder", false),
                ("a", true),
                ("b", false),
                ("a", true),
                ("d", false)
            ]
        );
        assert_eq!(split_matches("Chicago", "CH"), vec![("Ch", true), ("icago", false)]);
        assert_eq!(split_matches("Chicago", ""), vec![("Chicago", false)]);
        assert_eq!(split_matches("Chicago", "xyz"), vec![("Chicago", false)]);
    }

    #[test]
    fn test_split_matches_when_lowercase_changes_byte_lengths() {
        // "İ" lowercases to 3 bytes, "Ω" to 2: totals match, offsets do not
        assert_eq!(
            split_matches("\u{130}\u{2126}", "\u{3c9}"),
            vec![("\u{130}", false), ("\u{2126}", true)]
        );
        assert_eq!(
            split_matches("İstanbul", "stan"),
            vec![("İ", false), ("stan", true), ("bul", false)]
        );
        assert_eq!(split_matches("Straße", "SSE"), vec![("Straße", false)]);
    }

    #[test]
    fn test_split_matches_skips_partial_char_expansion() {
        // "i" alone is only the first half of lowercased "İ"
        assert_eq!(split_matches("İi", "i"), vec![("İ", false), ("i", true)]);
    }
}
