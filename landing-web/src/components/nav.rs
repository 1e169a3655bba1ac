//! Navigation Surface - desktop tiles and mobile drawer
//!
//! The page mounts `DesktopNav` once the intro settles and `MobileDrawer` only
//! while the drawer is open. `HamburgerButton` is always mounted. The stylesheet
//! hides `.nav-buttons-desktop` at 1024px and below and `.hamburger-menu` above it.

use leptos::prelude::*;
use lib_landing::nav::Destination;

use crate::components::NavIconSvg;

#[component]
pub fn DesktopNav(on_select: Callback<Destination>, animated: bool) -> impl IntoView {
    let class = if animated {
        "nav-buttons-desktop nav-animated"
    } else {
        "nav-buttons-desktop"
    };

    view! {
        <nav class=class>
            {Destination::ALL
                .into_iter()
                .enumerate()
                .map(|(idx, destination)| {
                    let style = destination.style();
                    view! {
                        <a
                            href=destination.route()
                            class=format!("nav-tile accent-{}", style.accent)
                            style=format!(
                                "box-shadow: 0 0 10px {}40; --tile-index: {};",
                                style.glow,
                                idx,
                            )
                            on:click=move |_| on_select.run(destination)
                        >
                            <div class="nav-tile-scanlines">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                            <div class="nav-tile-body">
                                <NavIconSvg icon=destination.icon() class="nav-tile-icon"/>
                                <div class="nav-tile-label">{destination.label()}</div>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn HamburgerButton(on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <div class="hamburger-menu">
            <button
                class="hamburger-button"
                aria-label="Open navigation menu"
                on:click=move |_| on_toggle.run(())
            >
                <span class="hamburger-bar"></span>
                <span class="hamburger-bar"></span>
                <span class="hamburger-bar"></span>
            </button>
        </div>
    }
}

#[component]
pub fn MobileDrawer(on_select: Callback<Destination>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="mobile-drawer">
            <button
                class="drawer-close"
                aria-label="Close navigation menu"
                on:click=move |_| on_close.run(())
            >
                <span class="drawer-close-bar rotate-left"></span>
                <span class="drawer-close-bar rotate-right"></span>
            </button>
            <div class="drawer-links">
                {Destination::ALL
                    .into_iter()
                    .map(|destination| {
                        view! {
                            <a
                                href=destination.route()
                                class=format!("drawer-link accent-{}", destination.style().accent)
                                on:click=move |_| on_select.run(destination)
                            >
                                <NavIconSvg icon=destination.icon() class="drawer-icon"/>
                                <span>{destination.label()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
