use web_sys::Element;

mod components;
mod model;
mod util;

use components::{SessionTimer, SessionTimerProps};
use util::{clog, parse_seconds};

/// Id of the element the host page provides for the countdown.
const TIMER_ELEMENT_ID: &str = "session-timer";
/// Attribute on that element carrying the initial whole-seconds count.
const SECONDS_ATTR: &str = "data-seconds";

fn timer_host() -> Option<Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(TIMER_ELEMENT_ID)
}

fn main() {
    // Pages without a timer slot (login screen etc.) get no timer at all.
    let Some(host) = timer_host() else {
        clog("no session-timer element, skipping mount");
        return;
    };
    let initial_secs = parse_seconds(host.get_attribute(SECONDS_ATTR));
    clog(&format!("session timer mounted with {}s", initial_secs));
    yew::Renderer::<SessionTimer>::with_root_and_props(host, SessionTimerProps { initial_secs })
        .render();
}
