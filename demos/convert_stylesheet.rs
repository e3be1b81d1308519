use anyhow::Context;
use pxviewport::{convert_stylesheet, ConversionOptions, Stylesheet};

// A stylesheet tree in the JSON shape the host pipeline hands over.
const STYLESHEET_JSON: &str = r#"{
    "nodes": [
        {
            "type": "rule",
            "selector": ".banner",
            "nodes": [
                {"type": "declaration", "property": "width", "value": "750px"},
                {"type": "declaration", "property": "padding", "value": "0 32px"},
                {"type": "declaration", "property": "border", "value": "1px solid #000"},
                {"type": "declaration", "property": "content", "value": "\"100px\""}
            ]
        },
        {
            "type": "rule",
            "selector": ".ignore .banner",
            "nodes": [
                {"type": "declaration", "property": "width", "value": "100px"}
            ]
        },
        {
            "type": "atRule",
            "name": "media",
            "params": "(min-width: 750px)",
            "nodes": [
                {
                    "type": "rule",
                    "selector": ".banner",
                    "nodes": [
                        {"type": "declaration", "property": "width", "value": "375px"}
                    ]
                }
            ]
        }
    ]
}"#;

const OPTIONS_JSON: &str = r#"{
    "viewportWidth": 750,
    "selectorBlackList": [".ignore"],
    "mediaQuery": true
}"#;

fn main() -> anyhow::Result<()> {
    // Initialize the logger; RUST_LOG overrides the default level.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Loading stylesheet tree from JSON...");
    let mut stylesheet: Stylesheet =
        serde_json::from_str(STYLESHEET_JSON).context("Failed to deserialize stylesheet JSON")?;
    let options = ConversionOptions::from_json_str(OPTIONS_JSON)
        .context("Failed to load conversion options")?;
    log::info!("Stylesheet loaded successfully.");

    log::info!("Starting px-to-viewport conversion...");
    convert_stylesheet(&mut stylesheet, options)?;
    log::info!("Conversion finished.");

    let rendered = serde_json::to_string_pretty(&stylesheet)?;
    println!("{}", rendered);
    Ok(())
}
