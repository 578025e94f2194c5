use yew::prelude::*;

use shared::models::Event;
use shared::view::{location_line, start_time_label};

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: Event,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    let location = location_line(event);

    html! {
        <div class="event-card">
            <div class="event-time">{ start_time_label(&event.start) }</div>
            <div class="event-body">
                <div class="event-title">{ &event.title }</div>
                if !location.is_empty() {
                    <div class="event-location">{ location.clone() }</div>
                }
                <div class="event-meta">
                    if let Some(cost) = &event.cost {
                        <span class="event-cost">{ format!("Cost: {}", cost) }</span>
                    }
                    if let Some(url) = &event.registration_url {
                        <a
                            class="event-link"
                            href={url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { "Details" }
                        </a>
                    }
                </div>
                if let Some(description) = &event.description {
                    <div class="event-description">{ description }</div>
                }
                if let Some(source) = &event.source {
                    <div class="event-source">{ format!("via {}", source) }</div>
                }
            </div>
        </div>
    }
}
