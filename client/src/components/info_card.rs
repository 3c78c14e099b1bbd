//! Titled panel container used across the admin pages.

use leptos::children::{Children, ViewFn};
use leptos::prelude::*;

#[cfg(test)]
#[path = "info_card_test.rs"]
mod info_card_test;

/// Base class plus any caller-supplied augmentation.
fn card_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("info-card {extra}"),
        _ => "info-card".to_owned(),
    }
}

/// The header row only exists when there is something to put in it.
fn has_header(has_title: bool, has_subtitle: bool, has_actions: bool) -> bool {
    has_title || has_subtitle || has_actions
}

/// Panel shell with an optional titled header and a body wrapping the
/// supplied children verbatim. Purely structural; no state, no callbacks.
#[component]
pub fn InfoCard(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Rendered top-right in the header, e.g. an edit button.
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = card_class(class.as_deref());
    let header = has_header(title.is_some(), subtitle.is_some(), actions.is_some());

    view! {
        <section class=class>
            {header
                .then(|| {
                    view! {
                        <div class="info-card__header">
                            <div class="info-card__titles">
                                {title.map(|t| view! { <h3 class="info-card__title">{t}</h3> })}
                                {subtitle
                                    .map(|s| view! { <p class="info-card__subtitle">{s}</p> })}
                            </div>
                            {actions
                                .map(|a| view! { <div class="info-card__actions">{a.run()}</div> })}
                        </div>
                    }
                })}
            <div class="info-card__body">{children()}</div>
        </section>
    }
}
