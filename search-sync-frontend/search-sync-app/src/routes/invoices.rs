use crate::components::search::Search;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

fn listing_summary(term: Option<&str>, page: Option<&str>) -> String {
    let page = page.unwrap_or("1");
    match term {
        Some(term) => format!("Page {page} of invoices matching '{term}'"),
        None => format!("Page {page} of all invoices"),
    }
}

/// Demo listing, only echoes what it would fetch for the current query.
#[component]
pub fn Invoices() -> impl IntoView {
    let query = use_query_map();
    let summary = move || {
        query.with(|q| listing_summary(q.get("query").as_deref(), q.get("page").as_deref()))
    };

    view! {
        <div class="w-full">
            <h1 class="text-2xl">"Invoices"</h1>
            <div class="mt-4 flex items-center justify-between gap-2 md:mt-8">
                <Search placeholder="Search invoices..." />
            </div>
            <p class="mt-6 text-sm text-gray-500">{summary}</p>
        </div>
    }
}
