#![no_main]

use libfuzzer_sys::fuzz_target;
use nightlight::display::parse_active_monitors;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    for monitor in parse_active_monitors(&text) {
        // A parsed monitor always has a usable --output argument
        assert!(!monitor.name.is_empty());
        assert!(!monitor.name.chars().any(char::is_whitespace));
    }
});
