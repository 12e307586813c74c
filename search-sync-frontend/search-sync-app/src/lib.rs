pub mod components;
pub mod navigation;
pub mod routes;

use crate::routes::invoices::Invoices;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Invoices" />
        <Router>
            <main class="p-6">
                <Routes fallback=|| view! { <h1>"Page not found"</h1> }>
                    <Route path=path!("/") view=Invoices />
                    <Route path=path!("/dashboard/invoices") view=Invoices />
                </Routes>
            </main>
        </Router>
    }
}
