mod components;
mod hooks;
mod services;

use anyhow::Context;
use chrono::{Days, NaiveDateTime};
use shared::{format_display, PickerOptions};
use yew::prelude::*;

use components::date_picker::DatePicker;
use services::date_utils::current_datetime;

/// Settings for the appointment picker, in the JSON shape hosts load them from.
const APPOINTMENT_OPTIONS: &str = r#"{ "time_select": true }"#;

/// How far ahead appointments can be booked
const BOOKING_WINDOW_DAYS: u64 = 90;

fn load_options(json: &str) -> anyhow::Result<PickerOptions> {
    serde_json::from_str(json).context("invalid date picker options")
}

/// Appointment options: loaded settings plus a booking window starting today.
fn appointment_options(now: NaiveDateTime) -> PickerOptions {
    let options = load_options(APPOINTMENT_OPTIONS).unwrap_or_else(|e| {
        log::error!("{:#}", e);
        PickerOptions::default().with_time_select(true)
    });

    let options = options.with_min_date(now);
    match now.checked_add_days(Days::new(BOOKING_WINDOW_DAYS)) {
        Some(max) => options.with_max_date(max),
        None => options,
    }
}

#[function_component(App)]
fn app() -> Html {
    let due_date = use_state(current_datetime);
    let appointment = use_state(current_datetime);
    let options = use_memo((), |_| appointment_options(current_datetime()));

    let on_due_date_change = {
        let due_date = due_date.clone();
        Callback::from(move |value: NaiveDateTime| due_date.set(value))
    };

    let on_appointment_change = {
        let appointment = appointment.clone();
        Callback::from(move |value: NaiveDateTime| appointment.set(value))
    };

    html! {
        <main class="demo">
            <section class="demo-field">
                <h2>{"Échéance"}</h2>
                <DatePicker selected_date={Some(*due_date)} on_change={on_due_date_change} />
                <p class="demo-value">{format_display(&due_date, false)}</p>
            </section>

            <section class="demo-field">
                <h2>{"Rendez-vous"}</h2>
                <DatePicker
                    selected_date={Some(*appointment)}
                    on_change={on_appointment_change}
                    time_select={options.time_select}
                    min_date={options.min_date}
                    max_date={options.max_date}
                />
                <p class="demo-value">{format_display(&appointment, true)}</p>
            </section>

            <section class="demo-field">
                <h2>{"Sans valeur"}</h2>
                // No host value: shows the clock reading taken at mount, changes are ignored
                <DatePicker />
            </section>
        </main>
    }
}

fn main() {
    if let Err(e) = services::logging::init(log::LevelFilter::Debug) {
        gloo::console::error!(format!("{:#}", e));
    }

    yew::Renderer::<App>::new().render();
}
