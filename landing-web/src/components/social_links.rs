//! Social links in the bottom bar

use leptos::prelude::*;
use lib_landing::config::SocialLink;

#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a class="social-link" href=link.href target="_blank" rel="noopener noreferrer">
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
