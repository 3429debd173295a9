//! Placeholder screens behind the tab bar. Screen content is owned by the
//! host product; these only give each route something to render.

use leptos::prelude::*;
use thaw::Card;

#[component]
fn Screen(title: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <section class="screen" style:padding="16px">
            <Card attr:style="animation: card-appear 0.28s ease-out 0ms both;">
                <h2>{title}</h2>
                <p>{caption}</p>
            </Card>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Screen title="Home" caption="Nearby roadside services" /> }
}

#[component]
pub fn RequestPage() -> impl IntoView {
    view! { <Screen title="Request" caption="Request a tow or roadside assistance" /> }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <Screen title="Profile" caption="Your account and service history" /> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <Screen title="Not found" caption="This page does not exist" /> }
}
