use anyhow::Result;
use std::process::ExitCode;

use weather_icons::config::IconSet;
use weather_icons::constants::master::BASE_EDGE;
use weather_icons::export::{export_sizes, MissingEncoder};
use weather_icons::icon::{render_master, GlowMode};

fn generate_all_sizes() -> Result<IconSet> {
    let set = IconSet::default();

    println!("🎨 Generating Weather app icons...");

    println!("   Rendering {}x{} master icon...", BASE_EDGE, BASE_EDGE);
    let master = render_master(BASE_EDGE, GlowMode::Opaque);

    export_sizes(&master, &set)?;

    Ok(set)
}

fn main() -> ExitCode {
    match generate_all_sizes() {
        Ok(set) => {
            println!("✅ All icons generated!");
            println!("   Output directory: {}", set.output_dir.display());
            println!();
            println!("Next step: build the project in Xcode to see the new icon");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(missing) = e.downcast_ref::<MissingEncoder>() {
                eprintln!("❌ Error: {}", missing);
                eprintln!("   {}", missing.remediation());
            } else {
                eprintln!("❌ Failed to generate icons: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
