use super::pages::{HomePage, NotFoundPage, ProfilePage, RequestPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/request") view=RequestPage />
            <Route path=path!("/profile") view=ProfilePage />
        </Routes>
    }
}
