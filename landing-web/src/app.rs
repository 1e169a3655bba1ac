//! ELICIT FEST Landing - Leptos Frontend
//!
//! Router shell: the landing page at `/`, a page per navigation destination.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::{DestinationPage, LandingPage};
use crate::state::landing::provide_landing_context;

#[component]
pub fn App() -> impl IntoView {
    provide_landing_context();

    // Backup in case main() ran before the splash was in the DOM
    Effect::new(move || crate::hide_loading_screen());

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=|| view! { <LandingPage/> }/>
                    <Route path=path!("/events") view=DestinationPage/>
                    <Route path=path!("/speakers") view=DestinationPage/>
                    <Route path=path!("/about") view=DestinationPage/>
                    <Route path=path!("/contact") view=DestinationPage/>
                    <Route path=path!("/sponsors") view=DestinationPage/>
                    <Route path=path!("/register") view=DestinationPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card">
                <h1 class="card-title">"404 - SIGNAL LOST"</h1>
                <p class="card-text">"The node you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"RETURN TO MAINFRAME"</span>
                </A>
            </div>
        </div>
    }
}
