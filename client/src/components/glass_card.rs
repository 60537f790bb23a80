//! Frosted card container shared by every page.

use leptos::prelude::*;

#[component]
pub fn GlassCard(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] gradient: bool,
    #[prop(optional)] hover: bool,
) -> impl IntoView {
    view! {
        <section
            class=format!("glass-card {class}")
            class:glass-card--gradient=gradient
            class:glass-card--hover=hover
        >
            {title.map(|title| view! {
                <header class="glass-card__header">
                    <h3 class="glass-card__title">{title}</h3>
                    {description.map(|d| view! { <p class="glass-card__description">{d}</p> })}
                </header>
            })}
            <div class="glass-card__content">{children()}</div>
        </section>
    }
}
