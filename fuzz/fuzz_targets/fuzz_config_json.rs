#![no_main]

use libfuzzer_sys::fuzz_target;
use nightlight::config::AppConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse failures are fine, panics are not
        if let Ok(config) = serde_json::from_str::<AppConfig>(s) {
            let prefs = config.preferences.sanitized();
            assert!(prefs.throttle_interval_ms <= nightlight::config::models::MAX_THROTTLE_INTERVAL_MS);
        }
    }
});
