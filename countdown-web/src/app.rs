//! Host page embedding the countdown widget.

use countdown_core::{Clearable, CountdownConfig, TimeLeft};
use web_sys::HtmlSelectElement;
use yew::html::TargetCast;
use yew::prelude::*;

use crate::components::countdown::{CountdownHandle, CountdownWidget};
use crate::i18n::{current_lang, locales, set_lang, t, tr_count};
use crate::storage::StorageBackend;

/// Element the app mounts into.
pub const ROOT_ID: &str = "countdown-root";

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub config: CountdownConfig,
    #[prop_or_default]
    pub storage: Option<StorageBackend>,
}

#[function_component(App)]
pub fn app(p: &Props) -> Html {
    let handle = use_memo((), |_| CountdownHandle::new());
    let lang = use_state(current_lang);
    let remaining = use_state(|| None::<TimeLeft>);

    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let code = select.value();
            set_lang(&code);
            lang.set(current_lang());
        })
    };

    let on_reset = {
        let handle = (*handle).clone();
        Callback::from(move |_: MouseEvent| handle.clear_data())
    };

    let on_change = {
        let remaining = remaining.clone();
        Callback::from(move |left: Option<TimeLeft>| remaining.set(left))
    };

    let summary = remaining.map_or_else(
        || t("app.idle"),
        |left| tr_count("app.summary", left.days),
    );

    html! {
        <main id="main" role="main" class="dashboard">
            <header class="dashboard-header">
                <h1>{ t("app.title") }</h1>
                <label for="lang-select" class="sr-only">{ t("app.language") }</label>
                <select id="lang-select" onchange={on_lang_change} aria-label={t("app.language")}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == lang.as_str()}>{ meta.name }</option>
                    }) }
                </select>
                <button id="reset-data" type="button" onclick={on_reset}>{ t("app.reset") }</button>
            </header>
            <CountdownWidget
                config={p.config.clone()}
                storage={p.storage.clone()}
                handle={Some((*handle).clone())}
                lang={AttrValue::from((*lang).clone())}
                on_change={on_change}
            />
            <p id="countdown-summary" class="sr-only" aria-live="polite">{ summary }</p>
        </main>
    }
}

/// Mount [`App`] into `#countdown-root`.
///
/// # Errors
/// Returns an error if there is no document or the root element is missing.
pub fn mount() -> anyhow::Result<()> {
    use anyhow::Context;

    set_lang(&current_lang());
    let root = crate::dom::document()
        .context("document unavailable")?
        .get_element_by_id(ROOT_ID)
        .with_context(|| format!("missing #{ROOT_ID} element"))?;
    yew::Renderer::<App>::with_root(root).render();
    log::info!("Countdown app mounted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_core::{CountdownRecord, MemoryStore, RecordStore};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_widget_controls_and_language_picker() {
        set_lang("zh");
        let props = Props {
            config: CountdownConfig::default(),
            storage: Some(MemoryStore::new().into()),
        };
        let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
        assert!(html.contains("reset-data"), "reset button expected: {html}");
        assert!(html.contains("清除数据"));
        assert!(html.contains("lang-select"));
        assert!(html.contains("中文"));
        assert!(html.contains("countdown-container"));
        assert!(html.contains("暂无倒数"), "idle summary before any change: {html}");
    }

    #[test]
    fn app_passes_storage_through_to_widget() {
        set_lang("zh");
        let memory = MemoryStore::new();
        RecordStore::new(memory.clone(), "countdownData").save(&CountdownRecord::new(
            "2099-06-14",
            Some(TimeLeft::from_millis(86_400_000)),
        ));
        let props = Props {
            config: CountdownConfig::default(),
            storage: Some(memory.into()),
        };
        let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
        assert!(html.contains("countdown-circle ending"), "badge expected: {html}");
    }
}
