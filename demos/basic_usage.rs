//! Exercises every topic against a fancy console sink.
//!
//! Run with `cargo run --example basic_usage`.

use serde_json::json;
use topic_log::prelude::*;
use topic_log::ErrorInfo;

fn main() {
    let registry = LogRegistry::new();
    registry.set_sink(Box::new(ConsoleSink::stdout(Box::new(FancyFormat::new()))));

    let log = registry.logger("demo");
    let now = chrono::Utc::now().timestamp_millis();

    log.ok("Hello topic log!");
    log.warn(("This might come at a surprise", json!({ "ms_timeout": 15000 })));
    log.error((
        "Things happen",
        ErrorInfo::new()
            .with_name("Error")
            .with_message("Oh noes!")
            .with_stack("Error: Oh noes!\n    at main (demo:1:1)"),
    ));
    log.error(("Or just a string", json!({}), "Oh noes!"));
    log.error(ErrorInfo::new().with_message("Or only an error"));
    log.issue(("This might be an issue", json!({ "ms_slow": 567 })));
    log.ignore(("Yeah, whatever ...", json!({ "some": "random stuff" })));
    log.input(("Input received", json!({ "headers": { "Content-Length": 12 } })));
    log.output(("Output sent", json!({ "body": { "answer": 42, "status": "OK" } })));
    log.send(("Sending things", json!({ "bytes_size": 45643 })));
    log.receive(("Receiving things", json!({ "bytes_size": 2000000 })));
    log.fetch(("Fetched", json!({ "ms": 42 })));
    log.finish("Done");
    log.launch(("Starting service", json!({ "name": "demo", "ts_down_since": now })));
    log.terminate(("Killed service", json!({ "name": "demo", "ts_started": now })));
    log.spawn("Exciting things");
    log.broadcast(("Let the world know", json!({ "list": [1, 2, 3, 5, 8, 13, 21] })));
    log.broadcast(json!({ "just": "the", "data": "!" }));
    log.disk(("Writing file", json!({ "path": "/foo/bar.txt" })));
    log.timing(("Roundtrip", json!({ "ms": 789 })));
    log.money(("Received", json!({ "amount": 95 })));
    log.numbers(("Some stats", json!({ "a": 21, "b": 13, "c": 8 })));
    log.wtf((
        "WTF?!",
        json!({
            "special": "\x00\x07\x08\t\n\x0b\x0c\r\x1b",
            "hex": "\x01\x7f",
            "emoji": "🎉"
        }),
    ));
    log.wtf(());
}
