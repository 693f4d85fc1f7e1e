#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};
use serde_json::Value;
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// localStorage key holding the chosen UI language.
pub const LOCALE_KEY: &str = "countdown.locale";
/// Language used when nothing has been saved yet.
pub const DEFAULT_LANG: &str = "zh";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "zh",
        name: "中文",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("zh", include_str!("../i18n/zh.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial)
            .or_else(|| build_bundle(DEFAULT_LANG))
            .unwrap_or_else(fallback_bundle)
    });
}

/// Set the current language
///
/// Unknown codes are ignored. In the browser the choice is written to the
/// document's `lang` attribute and persisted for the next visit.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::debug!("Ignoring unsupported locale {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(LOCALE_KEY, lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

/// Entries are addressed as `section.name`.
fn entry<'a>(table: &'a Value, key: &str) -> Option<&'a Value> {
    let (section, name) = key.split_once('.')?;
    table.get(section)?.get(name)
}

fn plural_category(lang: &str, count: i64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::of1(&JsValue::from_str(lang));
        #[allow(clippy::cast_precision_loss)]
        let category = Intl::PluralRules::new(&locales, &Object::new()).select(count as f64);
        category
            .as_string()
            .unwrap_or_else(|| english_plural(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        english_plural(count).to_string()
    }
}

const fn english_plural(count: i64) -> &'static str {
    if count == 1 { "one" } else { "other" }
}

/// Pick the text for `count` from a plural entry; `_` covers missing forms.
fn select_form<'a>(value: &'a Value, lang: &str, count: Option<i64>) -> Option<&'a str> {
    match value {
        Value::String(text) => Some(text.as_str()),
        Value::Object(forms) => count
            .and_then(|n| forms.get(plural_category(lang, n).as_str()))
            .or_else(|| forms.get("_"))
            .and_then(Value::as_str),
        _ => None,
    }
}

fn lookup(key: &str, count: Option<i64>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        [&bundle.translations, &bundle.fallback]
            .into_iter()
            .find_map(|table| entry(table, key).and_then(|v| select_form(v, &bundle.lang, count)))
            .map(|text| match count {
                Some(n) => text.replace("{count}", &n.to_string()),
                None => text.to_string(),
            })
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    lookup(key, None).unwrap_or_else(|| key.to_string())
}

/// Translate a pluralised key for `count`, filling in `{count}`.
#[must_use]
pub fn tr_count(key: &str, count: i64) -> String {
    lookup(key, Some(count)).unwrap_or_else(|| key.to_string())
}
