//! The decorative particle background, reached through page globals.

use folio_app::ports::ParticleBackground;
use folio_domain::theme::{THEME_ATTRIBUTE, Theme};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Element the particle plugin draws into.
pub const HOST_ID: &str = "particles-js";

fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn global_fn(name: &str) -> Option<Function> {
    global(name)?.dyn_into().ok()
}

fn call(function: &Function, name: &str) {
    if let Err(err) = function.call0(&JsValue::NULL) {
        tracing::warn!(?err, function = name, "particle plugin call failed");
    }
}

/// Colours used when the plugin can only be recoloured in place.
fn colors(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#333333",
        Theme::Dark => "#ffffff",
    }
}

fn current_theme() -> Theme {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Path lookup through nested JS objects.
fn lookup(root: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    path.iter()
        .try_fold(root.clone(), |value, key| Reflect::get(&value, &JsValue::from_str(key)))
}

/// Recolour the first running plugin instance when no reinitialize entry
/// point exists.
fn recolor(theme: Theme) -> Result<(), JsValue> {
    let Some(instances) = global("pJSDom") else {
        return Ok(());
    };
    let first = Reflect::get(&instances, &JsValue::from_f64(0.0))?;
    if first.is_undefined() {
        return Ok(());
    }
    let plugin = lookup(&first, &["pJS"])?;
    let color = JsValue::from_str(colors(theme));
    Reflect::set(&lookup(&plugin, &["particles", "color"])?, &"value".into(), &color)?;
    Reflect::set(
        &lookup(&plugin, &["particles", "line_linked"])?,
        &"color".into(),
        &color,
    )?;
    let refresh: Function = lookup(&plugin, &["fn", "particlesRefresh"])?.dyn_into()?;
    refresh.call0(&JsValue::NULL)?;
    Ok(())
}

/// Calls `initializeParticles` / `reinitializeParticles` when the page
/// defines them.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsParticles;

impl ParticleBackground for JsParticles {
    fn is_present(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(HOST_ID))
            .is_some()
    }

    fn initialize(&self) {
        if let Some(init) = global_fn("initializeParticles") {
            call(&init, "initializeParticles");
        }
    }

    fn reinitialize(&self) {
        if let Some(reinit) = global_fn("reinitializeParticles") {
            call(&reinit, "reinitializeParticles");
            return;
        }
        if let Err(err) = recolor(current_theme()) {
            tracing::debug!(?err, "could not update particle colours");
        }
    }
}
