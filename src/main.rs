//! Command-line entry point: generates the Gym Management System deck in the
//! current directory.

use anyhow::Context;
use longan::deck;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Creating Gym Management System PowerPoint Presentation...");

    let pres = deck::build_deck();
    pres.save(deck::OUTPUT_FILE)
        .with_context(|| format!("failed to write {}", deck::OUTPUT_FILE))?;

    println!("✅ Presentation created successfully: {}", deck::OUTPUT_FILE);
    println!("📊 Total slides: {}", pres.slide_count());
    println!("🎯 Ready for professional presentation!");

    Ok(())
}
