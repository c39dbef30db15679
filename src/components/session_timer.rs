use crate::model::{TimerAction, TimerState};
use crate::util::{clog, format_mm_ss};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// Fixed display prefix; the surrounding system is pt-BR only.
const DISPLAY_PREFIX: &str = "Sessão: ";

#[derive(Properties, PartialEq, Clone)]
pub struct SessionTimerProps {
    pub initial_secs: u32,
}

/// Visible countdown of the remaining session time.
///
/// Each state change re-arms a single one-shot 1000ms timeout, so every
/// step runs roughly one second after the previous one completed. Host
/// timer coalescing (background tabs etc.) makes this drift; that is
/// accepted, the display is an approximation and the actual expiry is
/// enforced server-side.
#[function_component(SessionTimer)]
pub fn session_timer(props: &SessionTimerProps) -> Html {
    let state = use_reducer_eq({
        let initial_secs = props.initial_secs;
        move || TimerState::new(initial_secs)
    });

    {
        let state = state.clone();
        use_effect_with(*state, move |current| {
            let mut timeout_id = None;
            let mut tick_cb = None;
            if !current.is_stopped() {
                if let Some(window) = web_sys::window() {
                    let cb = {
                        let state = state.clone();
                        Closure::wrap(Box::new(move || {
                            state.dispatch(TimerAction::Tick);
                        }) as Box<dyn FnMut()>)
                    };
                    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        1000,
                    ) {
                        Ok(id) => timeout_id = Some(id),
                        Err(_) => clog("session timer: failed to arm tick timeout"),
                    }
                    tick_cb = Some(cb);
                }
            }
            move || {
                if let Some(id) = timeout_id {
                    if let Some(window) = web_sys::window() {
                        window.clear_timeout_with_handle(id);
                    }
                }
                // The pending timeout still points at this closure.
                let _keep_alive = &tick_cb;
            }
        });
    }

    html! {
        <span style="font-variant-numeric:tabular-nums;">
            { format!("{}{}", DISPLAY_PREFIX, format_mm_ss(state.remaining_secs)) }
        </span>
    }
}
