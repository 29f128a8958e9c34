use anyhow::{Context, Result};
use confsched_core::config::ConfschedConfig;
use owo_colors::OwoColorize;

pub fn run(config: &ConfschedConfig) -> Result<()> {
    let config_path = ConfschedConfig::config_path()?;
    let preferences_path = config.preferences_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:       {}", config_path.display());
    println!("  Preferences:  {}", preferences_path.display());

    println!();
    println!("{}", "Conferences".bold());
    for conference in config.conferences() {
        println!(
            "  {:<10} {} {}",
            conference.name,
            conference.url,
            format!("({:?})", conference.strategy).dimmed()
        );
    }

    let effective = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!();
    println!("{}", "Effective settings".bold());
    for line in effective.lines().filter(|l| !l.is_empty()) {
        println!("  {}", line.dimmed());
    }

    Ok(())
}
