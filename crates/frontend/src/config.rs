//! Reading guard settings from the host page
//!
//! A page can override the defaults before the module starts:
//!
//! ```html
//! <script>
//!   window.HISTORY_GUARD_CONFIG = { landingPath: "/login" };
//! </script>
//! ```

use crate::browser::describe;
use history_guard_core::{GuardConfig, GuardError, Result};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Settings from the page global, or the defaults when it is absent or
/// unusable.
pub fn load_config(window: &Window) -> GuardConfig {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(GuardConfig::CONFIG_GLOBAL))
    {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %describe(err), "Could not read guard config, using defaults");
            return GuardConfig::default();
        }
    };

    if value.is_undefined() || value.is_null() {
        tracing::debug!("No guard config on the page, using defaults");
        return GuardConfig::default();
    }

    parse_config(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring guard config");
        GuardConfig::default()
    })
}

/// Deserialize and validate a config object
pub fn parse_config(value: JsValue) -> Result<GuardConfig> {
    let config: GuardConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|err| GuardError::InvalidConfig(err.to_string()))?;
    config.validate()?;
    Ok(config)
}
