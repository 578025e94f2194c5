use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::api::ICS_URL;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{ "VNN Event Board" }</h1>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Events" }</Link<Route>>
                    { " | " }
                    <a href={ICS_URL} target="_blank" rel="noopener noreferrer">
                        { "Subscribe (.ics)" }
                    </a>
                </nav>
            </div>
        </header>
    }
}
