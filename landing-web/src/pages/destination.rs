//! Destination Page - placeholder for each navigation target

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use lib_landing::nav::Destination;

use crate::components::NavIconSvg;

#[component]
pub fn DestinationPage() -> impl IntoView {
    let location = use_location();
    let destination = Memo::new(move |_| location.pathname.with(|p| Destination::from_route(p)));

    move || match destination.get() {
        Some(destination) => {
            let style = destination.style();
            view! {
                <div class="page-center">
                    <div class=format!("card accent-{}", style.accent)>
                        <NavIconSvg icon=destination.icon() class="card-icon"/>
                        <h1 class="card-title">{destination.label()}</h1>
                        <p class="card-text">"> DECRYPTING NODE ... STAND BY"</p>
                        <A href="/">
                            <span class="btn">"RETURN TO MAINFRAME"</span>
                        </A>
                    </div>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="page-center">
                <A href="/">
                    <span class="btn">"RETURN TO MAINFRAME"</span>
                </A>
            </div>
        }
        .into_any(),
    }
}
