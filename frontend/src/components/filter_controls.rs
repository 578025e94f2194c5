use web_sys::HtmlSelectElement;
use yew::prelude::*;

use shared::view::{FilterOptions, FilterSelection};

#[derive(Properties, PartialEq)]
pub struct FilterControlsProps {
    pub options: FilterOptions,
    pub selection: FilterSelection,
    pub on_change: Callback<FilterSelection>,
}

/// The controls panel: one dropdown per filter dimension, each with a
/// leading "All" option. Changing either select emits a whole new
/// [`FilterSelection`]; the page owns the state.
#[function_component(FilterControls)]
pub fn filter_controls(props: &FilterControlsProps) -> Html {
    let on_state_change = {
        let on_change = props.on_change.clone();
        let city = props.selection.city.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FilterSelection {
                state: select.value(),
                city: city.clone(),
            });
        })
    };

    let on_city_change = {
        let on_change = props.on_change.clone();
        let state = props.selection.state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FilterSelection {
                state: state.clone(),
                city: select.value(),
            });
        })
    };

    html! {
        <div class="filter-controls">
            <label class="filter-label">
                { "State" }
                <select class="filter-select" onchange={on_state_change}>
                    <option value="" selected={props.selection.state.is_empty()}>
                        { "All states" }
                    </option>
                    { for props.options.states.iter().map(|value| html! {
                        <option value={value.clone()} selected={*value == props.selection.state}>
                            { value }
                        </option>
                    })}
                </select>
            </label>
            <label class="filter-label">
                { "City" }
                <select class="filter-select" onchange={on_city_change}>
                    <option value="" selected={props.selection.city.is_empty()}>
                        { "All cities" }
                    </option>
                    { for props.options.cities.iter().map(|value| html! {
                        <option value={value.clone()} selected={*value == props.selection.city}>
                            { value }
                        </option>
                    })}
                </select>
            </label>
        </div>
    }
}
