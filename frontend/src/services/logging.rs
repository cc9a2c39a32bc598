use std::fmt::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Forwards tracing events to the browser console at the matching level
pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        metadata.level() <= &self.max_level
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = ConsoleVisitor::default();
        event.record(&mut visitor);
        let line = visitor.render(event.metadata().target());

        match *event.metadata().level() {
            Level::ERROR => gloo::console::error!(line),
            Level::WARN => gloo::console::warn!(line),
            Level::INFO => gloo::console::info!(line),
            _ => gloo::console::debug!(line),
        }
    }
}

#[derive(Default)]
struct ConsoleVisitor {
    component: Option<String>,
    message: String,
    fields: String,
}

impl ConsoleVisitor {
    fn render(self, target: &str) -> String {
        let origin = self.component.unwrap_or_else(|| target.to_string());
        format!("[{}] {}{}", origin, self.message, self.fields)
    }
}

impl Visit for ConsoleVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "component" => self.component = Some(value.to_string()),
            name => {
                let _ = write!(self.fields, " {}={}", name, value);
            }
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{:?}", value),
            "component" => self.component = Some(format!("{:?}", value)),
            name => {
                let _ = write!(self.fields, " {}={:?}", name, value);
            }
        }
    }
}

/// Install the console subscriber; debug builds log at DEBUG, release at INFO
pub fn init() -> anyhow::Result<()> {
    let max_level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(max_level));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        tracing::debug!(component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        tracing::info!(component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        tracing::warn!(component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        tracing::error!(component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_render_prefers_component_over_target() {
        let visitor = ConsoleVisitor {
            component: Some("gift_table".to_string()),
            message: "Delete failed".to_string(),
            fields: String::new(),
        };
        assert_eq!(visitor.render("gifter_frontend::components"), "[gift_table] Delete failed");
    }

    #[wasm_bindgen_test]
    fn test_render_falls_back_to_target_and_appends_fields() {
        let visitor = ConsoleVisitor {
            component: None,
            message: "gift deleted".to_string(),
            fields: " gift_id=g1".to_string(),
        };
        assert_eq!(visitor.render("shared::actions"), "[shared::actions] gift deleted gift_id=g1");
    }

    #[wasm_bindgen_test]
    fn test_layer_respects_max_level() {
        let layer = ConsoleLayer::new(Level::INFO);
        assert_eq!(layer.max_level, Level::INFO);
        assert!(Level::WARN <= layer.max_level);
        assert!(!(Level::DEBUG <= layer.max_level));
    }
}
