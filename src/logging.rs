//! Browser Logging
//!
//! Routes `tracing` events through the rolling logger into the devtools console.

use rolling_logger::LogSink;
use tracing::Level;
use wasm_bindgen::JsValue;

/// Lines kept in memory
const LOG_CAPACITY: usize = 200;

pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        if level == Level::ERROR {
            web_sys::console::error_1(&line);
        } else if level == Level::WARN {
            web_sys::console::warn_1(&line);
        } else if level == Level::INFO {
            web_sys::console::info_1(&line);
        } else {
            web_sys::console::debug_1(&line);
        }
    }
}

pub fn init() {
    let max_level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = rolling_logger::init_logger(LOG_CAPACITY, max_level, ConsoleSink) {
        web_sys::console::warn_1(&format!("[LOG] logger not installed: {}", e).into());
    }
}
