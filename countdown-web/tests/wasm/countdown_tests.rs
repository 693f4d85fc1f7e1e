use chrono::{Duration, Local};
use countdown_core::{CountdownConfig, CountdownRecord};
use countdown_web::app::{App, Props};
use countdown_web::dom;
use countdown_web::interval::Interval;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};
use yew::{AppHandle, Renderer};

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("schedule timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

fn storage() -> web_sys::Storage {
    dom::local_storage().expect("localStorage")
}

fn mount(key: &str) -> (Element, AppHandle<App>) {
    countdown_web::i18n::set_lang("zh");
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    let props = Props {
        config: CountdownConfig {
            storage_key: key.to_string(),
            ..CountdownConfig::default()
        },
        storage: None,
    };
    let app = Renderer::<App>::with_root_and_props(root.clone(), props).render();
    (root, app)
}

fn find<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .expect("valid selector")
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn choose_date(root: &Element, value: &str) {
    let input: HtmlInputElement = find(root, "#countdown-date").expect("date input");
    input.set_value(value);
    input
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
}

fn click(root: &Element, selector: &str) {
    let button: HtmlElement = find(root, selector).expect("button");
    button.click();
}

#[wasm_bindgen_test]
async fn starting_from_the_picker_persists_and_locks_input() {
    let key = "countdownData.test.start";
    storage().remove_item(key).expect("reset");
    let (root, app) = mount(key);
    sleep_ms(20).await;

    let date = (Local::now() + Duration::days(10)).format("%Y-%m-%d").to_string();
    choose_date(&root, &date);
    sleep_ms(20).await;
    click(&root, "#countdown-action");
    sleep_ms(20).await;

    let raw = storage().get_item(key).expect("read").expect("record stored");
    let record = CountdownRecord::decode(&raw).expect("valid record");
    assert_eq!(record.target_date, date);
    assert_eq!(record.time_left.map(|left| left.days), Some(11));

    let input: HtmlInputElement = find(&root, "#countdown-date").expect("date input");
    assert!(input.disabled());
    let number: Element = find(&root, ".countdown-number").expect("badge number");
    assert_eq!(number.text_content().as_deref(), Some("11"));
    assert!(find::<Element>(&root, ".countdown-circle.ending").is_none());

    click(&root, "#countdown-action");
    sleep_ms(20).await;
    assert!(storage().get_item(key).expect("read").is_none());
    assert!(find::<Element>(&root, ".countdown-circle").is_none());
    app.destroy();
}

#[wasm_bindgen_test]
async fn pressing_without_a_date_changes_nothing() {
    let key = "countdownData.test.picker";
    storage().remove_item(key).expect("reset");
    let (root, app) = mount(key);
    sleep_ms(20).await;
    click(&root, "#countdown-action");
    sleep_ms(20).await;
    assert!(storage().get_item(key).expect("read").is_none());
    assert!(find::<Element>(&root, ".countdown-circle").is_none());
    app.destroy();
}

#[wasm_bindgen_test]
async fn reload_shows_saved_days_until_the_next_tick() {
    let key = "countdownData.test.reload";
    let date = (Local::now() + Duration::days(3)).format("%Y-%m-%d").to_string();
    let saved = format!(r#"{{"targetDate":"{date}","timeLeft":{{"days":99,"total":8553600000}}}}"#);
    storage().set_item(key, &saved).expect("seed");

    let (root, app) = mount(key);
    sleep_ms(20).await;
    let number: Element = find(&root, ".countdown-number").expect("badge number");
    assert_eq!(number.text_content().as_deref(), Some("99"));

    sleep_ms(1_200).await;
    let number: Element = find(&root, ".countdown-number").expect("badge number");
    assert_eq!(number.text_content().as_deref(), Some("4"));
    assert!(find::<Element>(&root, ".countdown-circle.ending").is_some());
    app.destroy();
    storage().remove_item(key).expect("cleanup");
}

#[wasm_bindgen_test]
async fn parent_reset_clears_widget_and_record() {
    let key = "countdownData.test.reset";
    let date = (Local::now() + Duration::days(20)).format("%Y-%m-%d").to_string();
    let record = CountdownRecord::new(date, None).encode().expect("encode");
    storage().set_item(key, &record).expect("seed");

    let (root, app) = mount(key);
    sleep_ms(1_200).await;
    assert!(find::<Element>(&root, ".countdown-circle").is_some());

    click(&root, "#reset-data");
    sleep_ms(20).await;
    assert!(storage().get_item(key).expect("read").is_none());
    assert!(find::<Element>(&root, ".countdown-circle").is_none());
    let input: HtmlInputElement = find(&root, "#countdown-date").expect("date input");
    assert!(!input.disabled());
    assert_eq!(input.value(), "");
    app.destroy();
}

#[wasm_bindgen_test]
async fn unmounting_stops_the_ticker() {
    let key = "countdownData.test.unmount";
    let date = (Local::now() + Duration::days(5)).format("%Y-%m-%d").to_string();
    let record = CountdownRecord::new(date, None).encode().expect("encode");
    storage().set_item(key, &record).expect("seed");

    let (root, app) = mount(key);
    sleep_ms(1_200).await;
    assert!(find::<Element>(&root, ".countdown-circle").is_some());
    let raw = storage().get_item(key).expect("read").expect("ticks persist");
    assert!(CountdownRecord::decode(&raw).and_then(|r| r.time_left).is_some());

    app.destroy();
    storage().remove_item(key).expect("remove by hand");
    sleep_ms(1_200).await;
    assert!(storage().get_item(key).expect("read").is_none());
}

#[wasm_bindgen_test]
async fn dropping_an_interval_cancels_it() {
    let fired = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&fired);
    let interval = Interval::new(20, move || counter.set(counter.get() + 1)).expect("schedule");
    sleep_ms(150).await;
    assert!(fired.get() >= 2, "interval should have fired: {}", fired.get());

    drop(interval);
    let seen = fired.get();
    sleep_ms(150).await;
    assert_eq!(fired.get(), seen);
}
