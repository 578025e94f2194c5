use yew::prelude::*;

use shared::view::ViewModel;

use crate::components::event_card::EventCard;

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub view: ViewModel,
}

/// The list panel: one section per day group. The feed is windowed upstream
/// by the publisher, hence the 60-day wording in the empty state.
#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    if props.view.groups.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{ "No events found within the next 60 days." }</p>
            </div>
        };
    }

    html! {
        <div class="event-list">
            { for props.view.groups.iter().map(|group| html! {
                <section class="day-group" key={group.date.clone()}>
                    <h3 class="day-heading">{ &group.label }</h3>
                    { for group.events.iter().map(|event| html! {
                        <EventCard event={event.clone()} />
                    })}
                </section>
            })}
        </div>
    }
}
