use common::model::DisplayCategory;
use yew::{classes, html, Html};

/// Rounded status pill coloured by `category`.
pub fn badge(category: DisplayCategory, label: &str) -> Html {
    html! {
        <span class={classes!("inline-flex", "px-3", "py-1", "text-sm", "font-semibold", "rounded-full", category.css_class())}>
            { label.to_string() }
        </span>
    }
}
