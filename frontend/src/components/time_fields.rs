use shared::format::TIME_LABEL;
use shared::{parse_stepper_input, TimeField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeFieldsProps {
    pub hours: u32,
    pub minutes: u32,
    /// Raw (unclamped) stepper value for the edited field
    pub on_edit: Callback<(TimeField, i64)>,
}

/// Hour and minute steppers shown under the grid when time selection is on.
#[function_component(TimeFields)]
pub fn time_fields(props: &TimeFieldsProps) -> Html {
    html! {
        <div class="time-container">
            <label class="time-label">{TIME_LABEL}</label>
            <div class="time-fields">
                <TimeStepper field={TimeField::Hours} value={props.hours} on_edit={props.on_edit.clone()} />
                <span class="time-separator">{":"}</span>
                <TimeStepper field={TimeField::Minutes} value={props.minutes} on_edit={props.on_edit.clone()} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimeStepperProps {
    field: TimeField,
    value: u32,
    on_edit: Callback<(TimeField, i64)>,
}

#[function_component(TimeStepper)]
fn time_stepper(props: &TimeStepperProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_stepper_input(&input.value()) {
                Some(raw) => on_edit.emit((field, raw)),
                None => log::debug!("Ignoring non-numeric {:?} input {:?}", field, input.value()),
            }
        })
    };

    html! {
        <input
            type="number"
            class="time-input"
            min="0"
            max={props.field.max().to_string()}
            value={props.value.to_string()}
            {oninput}
            aria-label={props.field.aria_label()}
        />
    }
}
