use crate::navigation::{BrowserTimer, RouterNavigator};
use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;
use search_sync::{SearchConfig, SearchInput};

/// Text field that filters the current page through its `query` parameter.
///
/// Typing is debounced, once it settles the URL is replaced with the new
/// term and `page` reset to the first page.
#[component]
pub fn Search(
    #[prop(into)] placeholder: String,
    /// Debounce timing and parameter names, defaults to `query`/`page` and 300ms
    #[prop(optional)]
    config: Option<SearchConfig>,
) -> impl IntoView {
    let mut config = config.unwrap_or_default();
    if let Err(e) = config.validate() {
        log::error!("Invalid search config, falling back to defaults: {e}");
        config = SearchConfig::default();
    }
    let input = SearchInput::mount(RouterNavigator::new(), BrowserTimer, config);
    let initial_value = input.initial_value().to_string();
    let input = StoredValue::new_local(input);
    on_cleanup(move || {
        let _ = input.try_with_value(|input| input.cancel());
    });

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        input.with_value(|input| input.on_input(text));
    };

    view! {
        <div class="relative flex flex-1 flex-shrink-0">
            <label for="search" class="sr-only">
                "Search"
            </label>
            <input
                id="search"
                class="peer block w-full rounded-md border border-gray-200 py-[9px] pl-10 text-sm outline-2 placeholder:text-gray-500"
                placeholder=placeholder
                type="text"
                on:input=on_input
                value=initial_value
            />
            <div class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-500 peer-focus:text-gray-900">
                <Icon icon=i::AiSearchOutlined />
            </div>
        </div>
    }
}
