//! Share sinks
//!
//! The engine only builds the share text; a sink decides where it goes.

/// Destination for share text
pub trait ShareSink {
    fn emit(&mut self, text: &str);
}

/// Prints share text to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ShareSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Keeps every emitted text
#[derive(Debug, Default)]
pub struct BufferSink {
    pub shared: Vec<String>,
}

impl ShareSink for BufferSink {
    fn emit(&mut self, text: &str) {
        self.shared.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sink_collects_in_order() {
        let mut sink = BufferSink::default();
        sink.emit("first");
        sink.emit("second");
        assert_eq!(sink.shared, ["first", "second"]);
    }
}
