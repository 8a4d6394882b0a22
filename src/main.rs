use anyhow::{Context, Result};
use epicurve::{Generator, DEFAULT_NUM_WEEKS, DISEASE_NAMES, LOCATION_NAMES};
use log::info;
use std::env;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<()> {
    env_logger::init();

    let mut output = "disease.json".to_string();
    let mut seed = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().context("--seed requires a value")?;
            seed = Some(value.parse::<u64>().context("Seed must be an integer")?);
        } else {
            output = arg;
        }
    }

    info!("Generating epidemic dataset");
    let mut generator = Generator::new(seed);
    let dataset = generator.generate_dataset(None, None, DEFAULT_NUM_WEEKS)?;

    let file = File::create(&output).with_context(|| format!("Cannot create {}", output))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &dataset)?;

    info!(
        "Wrote {}: {} scenarios ({} diseases x {} locations, {} weeks each)",
        output,
        dataset.len(),
        DISEASE_NAMES.len(),
        LOCATION_NAMES.len(),
        DEFAULT_NUM_WEEKS
    );
    Ok(())
}
