use log::{Level, LevelFilter};

pub fn init(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        let console_level = level.to_level().unwrap_or(Level::Error);
        wasm_logger::init(wasm_logger::Config::new(console_level));
    }

    log::set_max_level(level);
}

/// Builds the JSON line for an event: `ts`, `level`, `event`, then `fields`.
pub fn event_payload(level: Level, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_millis())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

pub fn log_event(level: Level, event: &str, fields: serde_json::Value) {
    if level > log::max_level() {
        return;
    }

    log::log!(level, "{}", event_payload(level, event, fields));
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_level_event_and_fields() {
        let payload = event_payload(
            Level::Debug,
            "theme_changed",
            serde_json::json!({ "theme": "black" }),
        );

        assert_eq!(payload["level"], "debug");
        assert_eq!(payload["event"], "theme_changed");
        assert_eq!(payload["theme"], "black");
        assert!(payload["ts"].as_u64().is_some());
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = event_payload(Level::Info, "app_mounted", serde_json::json!("ignored"));

        let object = payload.as_object().expect("payload is an object");
        assert_eq!(object.len(), 3);
    }
}
