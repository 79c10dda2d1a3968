//! Generates accessors for an in-memory Go file and prints the result.
//!
//! Run with: cargo run --example widget

use gosmith::prelude::*;

const SOURCE: &str = r#"package widgets

import "time"

type Widget struct {
	// name is the display name
	name    string    `gosmith:"init,get,set"`
	created time.Time `gosmith:"init,get"`
	ID      int       `gosmith:"get"`
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let pipeline = Pipeline::new()
        .introspect_config(IntrospectConfig::new().directives(true))
        .synth_config(SynthConfig::new().setter_style(SetterStyle::Assign));

    let output = pipeline.generate_source(SOURCE, "widget.go")?;
    println!("{output}");

    Ok(())
}
