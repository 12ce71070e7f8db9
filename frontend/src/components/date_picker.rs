use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use shared::{
    edit_time, format_display, month_label, resolve_cells, select_day, CalendarMonth, DayCell,
    PickerAction, PickerOptions, PickerState, TimeField, WEEKDAY_LABELS,
};
use yew::prelude::*;

use crate::components::time_fields::TimeFields;
use crate::hooks::use_outside_click::use_outside_click;
use crate::services::date_utils::{current_datetime, today};

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Selected value; when absent, a clock reading taken at mount is shown
    #[prop_or_default]
    pub selected_date: Option<NaiveDateTime>,
    /// Called with every newly constructed value
    #[prop_or_default]
    pub on_change: Callback<NaiveDateTime>,
    /// Show hour/minute steppers and include the time in the text field
    #[prop_or_default]
    pub time_select: bool,
    #[prop_or_default]
    pub min_date: Option<NaiveDateTime>,
    #[prop_or_default]
    pub max_date: Option<NaiveDateTime>,
}

impl DatePickerProps {
    pub fn options(&self) -> PickerOptions {
        PickerOptions {
            time_select: self.time_select,
            min_date: self.min_date,
            max_date: self.max_date,
        }
    }
}

/// Reducer wrapper so `PickerState` can drive `use_reducer`.
#[derive(PartialEq)]
struct PickerStore(PickerState);

impl Reducible for PickerStore {
    type Action = PickerAction;

    fn reduce(self: Rc<Self>, action: PickerAction) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            // Same Rc, no re-render
            self
        } else {
            Rc::new(PickerStore(next))
        }
    }
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let fallback = use_state(current_datetime);
    let selected = props.selected_date.unwrap_or(*fallback);
    let options = props.options();

    let store = use_reducer(move || PickerStore(PickerState::new(&selected)));
    let root_ref = use_node_ref();

    // Show the month of the host value whenever it changes
    {
        let dispatcher = store.dispatcher();
        use_effect_with(selected, move |value| {
            dispatcher.dispatch(PickerAction::Resync(*value));
        });
    }

    {
        let dispatcher = store.dispatcher();
        use_outside_click(
            root_ref.clone(),
            Callback::from(move |_| dispatcher.dispatch(PickerAction::PointerDown { inside: false })),
        );
    }

    let toggle_calendar = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PickerAction::TogglePopup))
    };

    let calendar = if store.0.is_open() {
        render_calendar(props, &store, &options, selected)
    } else {
        html! {}
    };

    html! {
        <div class="date-picker-container" ref={root_ref}>
            <input
                type="text"
                class="date-input"
                value={format_display(&selected, options.time_select)}
                onclick={toggle_calendar}
                readonly={true}
            />
            {calendar}
        </div>
    }
}

fn render_calendar(
    props: &DatePickerProps,
    store: &UseReducerHandle<PickerStore>,
    options: &PickerOptions,
    selected: NaiveDateTime,
) -> Html {
    let displayed = store.0.displayed;

    let cells = match CalendarMonth::build(displayed) {
        Ok(grid) => resolve_cells(&grid, &selected, today(), &options.bounds()),
        Err(e) => {
            log::error!("Failed to build calendar grid for {:?}: {}", displayed, e);
            Vec::new()
        }
    };

    let prev_month = navigation(store, PickerAction::PreviousMonth);
    let next_month = navigation(store, PickerAction::NextMonth);

    // Day clicks merge the time of the value the host passed in, not the fallback
    let on_select = {
        let on_change = props.on_change.clone();
        let host_value = props.selected_date;
        let time_select = options.time_select;
        Callback::from(move |date: NaiveDate| {
            let value = select_day(date, time_select, host_value.as_ref());
            log::info!("📅 Day selected: {}", value);
            on_change.emit(value);
        })
    };

    let on_time_edit = {
        let on_change = props.on_change.clone();
        Callback::from(move |(field, raw): (TimeField, i64)| match edit_time(&selected, field, raw) {
            Ok(value) => on_change.emit(value),
            Err(e) => log::error!("Failed to apply {:?} edit: {}", field, e),
        })
    };

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button type="button" class="nav-button" onclick={prev_month}>
                    <span class="arrow-icon">{"‹"}</span>
                </button>
                <div class="month-year-display">{month_label(&displayed)}</div>
                <button type="button" class="nav-button" onclick={next_month}>
                    <span class="arrow-icon reversed">{"›"}</span>
                </button>
            </div>

            <div class="weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! { <div key={*label}>{*label}</div> })}
            </div>

            <div class="days">
                {for cells.iter().enumerate().map(|(index, cell)| render_day(index, cell, &on_select))}
            </div>

            {if options.time_select {
                html! {
                    <TimeFields
                        hours={TimeField::Hours.value_of(&selected)}
                        minutes={TimeField::Minutes.value_of(&selected)}
                        on_edit={on_time_edit}
                    />
                }
            } else { html! {} }}
        </div>
    }
}

fn navigation(store: &UseReducerHandle<PickerStore>, action: PickerAction) -> Callback<MouseEvent> {
    let dispatcher = store.dispatcher();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dispatcher.dispatch(action);
    })
}

fn render_day(index: usize, cell: &DayCell, on_select: &Callback<NaiveDate>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        let cell = *cell;
        Callback::from(move |_: MouseEvent| {
            if let Some(date) = cell.activate() {
                on_select.emit(date);
            }
        })
    };

    html! {
        <div
            key={index}
            class={classes!(cell.classes())}
            {onclick}
            aria-disabled={cell.is_disabled.to_string()}
            role="button"
        >
            {cell.day}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::{Datelike, NaiveTime};
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(props: DatePickerProps) -> web_sys::Element {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<DatePicker>::with_root_and_props(root.clone(), props).render();
        root
    }

    fn march_15() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap()
    }

    fn text_field(root: &web_sys::Element) -> HtmlInputElement {
        root.query_selector(".date-input").unwrap().unwrap().dyn_into().unwrap()
    }

    fn element(root: &web_sys::Element, selector: &str) -> HtmlElement {
        root.query_selector(selector).unwrap().unwrap().dyn_into().unwrap()
    }

    /// A `mousedown` that bubbles up to the document, like a real press.
    fn bubbling_mousedown() -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        Event::new_with_event_init_dict("mousedown", &init).unwrap()
    }

    fn recorder() -> (Rc<RefCell<Vec<NaiveDateTime>>>, Callback<NaiveDateTime>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let emitted = emitted.clone();
            Callback::from(move |value: NaiveDateTime| emitted.borrow_mut().push(value))
        };
        (emitted, on_change)
    }

    async fn open(root: &web_sys::Element) {
        text_field(root).click();
        TimeoutFuture::new(0).await;
        assert!(root.query_selector(".calendar").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    async fn test_text_field_shows_formatted_value() {
        let root = mount(DatePickerProps {
            selected_date: Some(march_15()),
            on_change: Callback::noop(),
            time_select: true,
            min_date: None,
            max_date: None,
        });
        TimeoutFuture::new(0).await;

        assert_eq!(text_field(&root).value(), "15/03/2024 10:30");
        assert!(root.query_selector(".calendar").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_click_opens_and_outside_pointer_down_closes() {
        let root = mount(DatePickerProps {
            selected_date: Some(march_15()),
            on_change: Callback::noop(),
            time_select: false,
            min_date: None,
            max_date: None,
        });
        TimeoutFuture::new(0).await;

        text_field(&root).click();
        TimeoutFuture::new(0).await;
        assert!(root.query_selector(".calendar").unwrap().is_some());

        let header = root.query_selector(".month-year-display").unwrap().unwrap();
        assert_eq!(header.text_content().unwrap(), "mars 2024");

        // Presses inside the popup bubble to the document but keep it open
        for selector in [".calendar", ".day"] {
            element(&root, selector).dispatch_event(&bubbling_mousedown()).unwrap();
            TimeoutFuture::new(0).await;
            assert!(root.query_selector(".calendar").unwrap().is_some(), "{}", selector);
        }

        let event = Event::new("mousedown").unwrap();
        gloo::utils::document().dispatch_event(&event).unwrap();
        TimeoutFuture::new(0).await;

        assert!(root.query_selector(".calendar").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_disabled_day_click_is_ignored() {
        let (emitted, on_change) = recorder();
        let min = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let root = mount(DatePickerProps {
            selected_date: Some(march_15()),
            on_change,
            time_select: false,
            min_date: Some(min),
            max_date: None,
        });
        TimeoutFuture::new(0).await;
        open(&root).await;

        element(&root, ".disabled-day").click();
        TimeoutFuture::new(0).await;

        assert!(emitted.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_day_click_keeps_host_time() {
        let (emitted, on_change) = recorder();
        let root = mount(DatePickerProps {
            selected_date: Some(march_15()),
            on_change,
            time_select: true,
            min_date: None,
            max_date: None,
        });
        TimeoutFuture::new(0).await;
        open(&root).await;

        let march_20: HtmlElement = root
            .query_selector_all(".day:not(.other-month-day)")
            .unwrap()
            .item(19)
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(march_20.text_content().unwrap(), "20");
        march_20.click();
        TimeoutFuture::new(0).await;

        let expected = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap().and_hms_opt(10, 30, 0).unwrap();
        assert_eq!(*emitted.borrow(), vec![expected]);
    }

    #[wasm_bindgen_test]
    async fn test_day_click_without_host_value_is_midnight() {
        let (emitted, on_change) = recorder();
        let root = mount(DatePickerProps {
            selected_date: None,
            on_change,
            time_select: true,
            min_date: None,
            max_date: None,
        });
        TimeoutFuture::new(0).await;
        open(&root).await;

        element(&root, ".day:not(.other-month-day)").click();
        TimeoutFuture::new(0).await;

        let emitted = emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].time(), NaiveTime::MIN);
        assert_eq!(emitted[0].day(), 1);
    }
}
