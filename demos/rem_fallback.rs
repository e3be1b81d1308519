use pxviewport::{ConversionOptions, Declaration, PxToViewport, Rule, Stylesheet};

// Demonstrates dual-unit output: the original pixel declaration is kept and
// a rem fallback is inserted ahead of the vw value, except for properties
// listed in propList, which stay rem-only.
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut rule = Rule::new(".card");
    rule.push(Declaration::new("width", "300px"));
    rule.push(Declaration::new("font-size", "32px"));
    let mut stylesheet = Stylesheet::new();
    stylesheet.push(rule);

    let converter = PxToViewport::new(ConversionOptions {
        is_save_px: true,
        to_rem: true,
        prop_list: vec!["font-size".to_string()],
        ..Default::default()
    })?;

    log::info!("Converting with px preservation and rem fallback...");
    converter.process(&mut stylesheet);

    println!("{}", serde_json::to_string_pretty(&stylesheet)?);
    Ok(())
}
