// Run every transformer against a sample input
// Usage: cargo run --example transform [text]
// Example: cargo run --example transform "hello world"

use std::env;

use devtool_core::transform::{base64, case, json, stats, timestamp, url};
use devtool_core::CaseMode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let text = args.get(1).map(|s| s.as_str()).unwrap_or("hello world");

    println!("input: {text:?}\n");

    let encoded = base64::encode(text)?;
    println!("base64 encode: {encoded}");
    println!("base64 decode: {}", base64::decode(&encoded)?);

    let escaped = url::encode(text);
    println!("url encode:    {escaped}");
    println!("url decode:    {}", url::decode(&escaped)?);

    for mode in CaseMode::ALL {
        println!("case {:>9}: {}", mode.name(), case::convert(text, mode));
    }

    let st = stats::analyze(text);
    println!(
        "stats: {} chars, {} words, {} lines, {} paragraphs",
        st.characters, st.words, st.lines, st.paragraphs
    );

    let snapshot = timestamp::now();
    println!("now: {} ({})", snapshot.human, snapshot.timestamp);

    let doc = serde_json::json!({ "input": text, "length": text.len() }).to_string();
    println!("json format:\n{}", json::format(&doc)?);

    Ok(())
}
