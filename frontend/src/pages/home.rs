use yew::prelude::*;

use shared::models::Event;
use shared::view::{compute_view, filter_options, FilterSelection};

use crate::components::event_list::EventList;
use crate::components::filter_controls::FilterControls;
use crate::services::api::ApiService;

enum FetchPhase {
    Loading,
    Loaded(Vec<Event>),
    Failed,
}

#[function_component(Home)]
pub fn home() -> Html {
    let phase = use_state(|| FetchPhase::Loading);
    let selection = use_state(FilterSelection::default);

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::fetch_events().await {
                    Ok(events) => phase.set(FetchPhase::Loaded(events)),
                    Err(e) => {
                        tracing::error!("Failed to fetch event feed: {:?}", e);
                        phase.set(FetchPhase::Failed);
                    }
                }
            });
            || ()
        });
    }

    let on_filter_change = {
        let selection = selection.clone();
        Callback::from(move |next: FilterSelection| selection.set(next))
    };

    html! {
        <div class="container">
            <h2>{ "Upcoming Events" }</h2>
            {
                match &*phase {
                    FetchPhase::Loading => html! {
                        <div class="loading">
                            <div class="spinner"></div>
                        </div>
                    },
                    FetchPhase::Failed => html! {
                        <div class="error-state">
                            <p>{ "Sorry, events could not be loaded right now. Please try again later." }</p>
                        </div>
                    },
                    FetchPhase::Loaded(events) => {
                        // Options come from the unfiltered snapshot so narrowing
                        // one dimension never empties the other dropdown.
                        let options = filter_options(events);
                        let view = compute_view(events, &selection);
                        html! {
                            <>
                                <FilterControls
                                    options={options}
                                    selection={(*selection).clone()}
                                    on_change={on_filter_change.clone()}
                                />
                                <EventList view={view} />
                            </>
                        }
                    }
                }
            }
        </div>
    }
}
