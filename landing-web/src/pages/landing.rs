//! # Landing Page
//!
//! Layered composition, back to front:
//!
//! 1. digital rain
//! 2. 3D scene (pointer parallax) and sponsor wheel
//! 3. static noise overlay
//! 4. foreground UI: brand, countdown, hero, navigation, bottom bar
//! 5. mobile drawer and terminal overlay
//!
//! The intro controller decides on mount whether the first-visit intro plays.
//! Its timer and the pointer subscription are torn down when the page unmounts.

use leptos::ev;
use leptos::prelude::*;
use lib_landing::hero::{HeroContent, BRAND, INFILTRATE_LABEL, NETWORK_STATUS};
use lib_landing::intro::{IntroController, IntroState, MountOutcome};
use lib_landing::nav::{activate, Destination, LegacyCallbacks, LegacySlot, NavIcon, NavSurface};
use lib_landing::overlay::OverlayState;
use lib_landing::pointer::{PointerPosition, PointerTracker};

use crate::components::{
    CountdownTimer, CyberpunkScene, DesktopNav, DigitalRain, GlitchText, HamburgerButton,
    MobileDrawer, NavIconSvg, SocialLinks, SponsorsWheel, TerminalInterface,
};
use crate::services::{BrowserStore, HtmlAudioPlayer};
use crate::state::landing::use_landing_context;
use crate::utils::viewport::now_utc;

#[component]
pub fn LandingPage(
    /// Legacy callbacks; route-based navigation happens regardless.
    #[prop(optional)]
    on_speakers_click: Option<Callback<()>>,
    #[prop(optional)] on_about_click: Option<Callback<()>>,
    #[prop(optional)] on_events_click: Option<Callback<()>>,
    #[prop(optional)] on_sponsors_click: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_landing_context();
    let config = ctx.config;

    // Intro
    let controller = StoredValue::new(IntroController::new(
        BrowserStore,
        config.with_value(|c| c.intro_settings()),
    ));
    let outcome = controller
        .try_update_value(|c| c.mount())
        .unwrap_or(MountOutcome::Settled);
    let intro = RwSignal::new(controller.with_value(|c| c.state()));

    let reveal = move || {
        if controller.try_update_value(|c| c.reveal()).unwrap_or(false) {
            if let Some(state) = controller.try_with_value(|c| c.state()) {
                intro.try_set(state);
            }
        }
    };

    let pending_reveal = match outcome {
        MountOutcome::Settled => None,
        MountOutcome::ScheduleReveal(delay) => match set_timeout_with_handle(reveal, delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Intro timer not scheduled, revealing now: {:?}", e);
                reveal();
                None
            }
        },
    };

    // Pointer
    let pointer = RwSignal::new(PointerPosition::default());
    let tracker = StoredValue::new(PointerTracker::default());
    tracker.update_value(|t| t.attach());
    let pointer_listener = window_event_listener(ev::mousemove, move |e| {
        let latest = tracker
            .try_update_value(|t| {
                t.record(e.client_x() as f64, e.client_y() as f64)
                    .then(|| t.latest())
            })
            .flatten();
        if let Some(position) = latest {
            pointer.set(position);
        }
    });

    on_cleanup(move || {
        controller.try_update_value(|c| c.unmount());
        if let Some(handle) = pending_reveal {
            handle.clear();
        }
        tracker.try_update_value(|t| t.detach());
        pointer_listener.remove();
    });

    // Overlays and navigation
    let overlay = RwSignal::new(OverlayState::default());

    let mut legacy = LegacyCallbacks::default();
    for (slot, callback) in [
        (LegacySlot::Speakers, on_speakers_click),
        (LegacySlot::About, on_about_click),
        (LegacySlot::Events, on_events_click),
        (LegacySlot::Sponsors, on_sponsors_click),
    ] {
        if let Some(callback) = callback {
            legacy.set(slot, move || callback.run(()));
        }
    }
    let legacy = StoredValue::new(legacy);

    let navigate_from = move |surface: NavSurface| {
        Callback::new(move |destination: Destination| {
            let sound = ctx.click_sound();
            let mut state = overlay.get_untracked();
            legacy.with_value(|callbacks| {
                activate(destination, surface, &HtmlAudioPlayer, &sound, callbacks, &mut state)
            });
            overlay.set(state);
            // The link's href carries the navigation.
            log::debug!("{:?} nav -> {}", surface, destination.route());
        })
    };
    let on_desktop_select = navigate_from(NavSurface::Desktop);
    let on_drawer_select = navigate_from(NavSurface::Drawer);

    let on_toggle_drawer = Callback::new(move |_: ()| overlay.update(|o| o.toggle_drawer()));
    let on_close_drawer = Callback::new(move |_: ()| overlay.update(|o| o.close_drawer()));
    let on_close_terminal = Callback::new(move |_: ()| overlay.update(|o| o.close_terminal()));
    let on_infiltrate = move |_| overlay.update(|o| o.open_terminal());

    let hero = Memo::new(move |_| HeroContent::for_state(&intro.get()));

    let countdown_target = config
        .with_value(|c| c.event_start_utc())
        .unwrap_or_else(|e| {
            log::warn!("Bad event_start, countdown disabled: {}", e);
            now_utc()
        });
    let wheel = config.with_value(|c| c.sponsor_wheel.clone());
    let social_links = config.with_value(|c| c.social_links.clone());

    view! {
        <div class="landing">
            <DigitalRain/>
            <CyberpunkScene pointer=pointer/>
            <SponsorsWheel wheel=wheel/>
            <div class="static-overlay" aria-hidden="true"></div>

            <div class="main-ui">
                <div class="top-bar">
                    <BrandBlock intro=intro.read_only()/>
                    <div class="countdown-timer-responsive">
                        <CountdownTimer target=countdown_target/>
                    </div>
                </div>

                <div class="hero-column">
                    <HeroSection content=hero/>
                    <Show when=move || hero.get().show_nav>
                        <DesktopNav on_select=on_desktop_select animated=hero.get_untracked().animated/>
                    </Show>
                </div>

                <HamburgerButton on_toggle=on_toggle_drawer/>
                <Show when=move || overlay.get().drawer_open>
                    <MobileDrawer on_select=on_drawer_select on_close=on_close_drawer/>
                </Show>

                <div class="bottom-bar">
                    <SocialLinks links=social_links/>
                    <button class="infiltrate-button" on:click=on_infiltrate>
                        <span class="infiltrate-label">{INFILTRATE_LABEL}</span>
                        <div class="infiltrate-pulse"></div>
                    </button>
                </div>
            </div>

            <Show when=move || overlay.get().terminal_open>
                <TerminalInterface on_close=on_close_terminal/>
            </Show>
        </div>
    }
}

#[component]
fn BrandBlock(intro: ReadSignal<IntroState>) -> impl IntoView {
    // Only the first-visit path slides the brand in
    let class = if intro.get_untracked().skip_intro {
        "brand"
    } else {
        "brand brand-animated"
    };

    view! {
        <div class=class>
            <div class="brand-title">
                <NavIconSvg icon=NavIcon::Monitor class="brand-icon"/>
                <span class="brand-name">{BRAND}</span>
            </div>
            <div class="brand-status">{NETWORK_STATUS}</div>
        </div>
    }
}

#[component]
fn HeroSection(#[prop(into)] content: Signal<HeroContent>) -> impl IntoView {
    let ctx = use_landing_context();
    let register_href = ctx.config.with_value(|c| c.legacy_register_href.clone());

    move || {
        let content = content.get();
        let mode = if content.animated { "hero hero-animated" } else { "hero" };
        let register_href = register_href.clone();

        view! {
            <div class=mode>
                {content.headline.map(|text| {
                    view! {
                        <GlitchText text=text class="hero-headline main-corruption-heading-responsive"/>
                    }
                })}
                {content.show_logo.then(|| {
                    view! {
                        <div class="hero-logo">
                            <img src="/logo.png" alt="ELICIT FEST Logo"/>
                        </div>
                    }
                })}
                {content.tagline.map(|text| {
                    view! {
                        <div class="hero-tagline-wrap">
                            <GlitchText text=text class="hero-tagline"/>
                        </div>
                    }
                })}
                {content.show_register_cta.then(move || {
                    view! {
                        <button
                            class="register-cta"
                            on:click=move |_| open_legacy_register(&register_href)
                        >
                            <img src="/Register/register.png" alt="Register Box"/>
                            <span class="register-cta-label">"REGISTER"</span>
                        </button>
                    }
                })}
            </div>
        }
    }
}

/// Full-page navigation to the legacy registration target
fn open_legacy_register(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        log::warn!("Register navigation failed: {:?}", e);
    }
}
