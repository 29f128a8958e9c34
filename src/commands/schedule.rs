use anyhow::Result;
use confsched_core::conference::Conference;
use confsched_core::config::ConfschedConfig;
use owo_colors::OwoColorize;

use super::load_favorites;
use crate::render::{render_day, Render};
use crate::utils::tui::load_with_spinner;

/// Which day sections are shown expanded.
pub enum Expand {
    None,
    All,
    Day(usize),
}

impl Expand {
    fn includes(&self, day: usize) -> bool {
        match self {
            Expand::None => false,
            Expand::All => true,
            Expand::Day(d) => *d == day,
        }
    }
}

pub async fn run(
    config: &ConfschedConfig,
    conferences: Vec<Conference>,
    expand: Expand,
    favorites_only: bool,
) -> Result<()> {
    // Fetch everything up front so a failure leaves no partial output
    let mut loaded = Vec::with_capacity(conferences.len());
    for conference in &conferences {
        loaded.push(load_with_spinner(config, conference).await?);
    }

    let favorites = load_favorites(config)?;

    for (i, conf) in loaded.iter().enumerate() {
        println!("{}", conf.render());

        if let Expand::Day(day) = expand {
            if day >= conf.days.len() {
                println!(
                    "   {}",
                    format!("No day {} (schedule has {})", day + 1, conf.days.len()).red()
                );
            }
        }

        if conf.days.is_empty() {
            println!("   {}", "No talks scheduled".dimmed());
        }

        let mut shown = 0;
        for day in 0..conf.days.len() {
            let expanded = favorites_only || expand.includes(day);
            let lines = render_day(&conf.days, day, &favorites, expanded, favorites_only)?;
            shown += lines.len();
            for line in lines {
                println!("{}", line);
            }
        }

        if favorites_only && shown == 0 && !conf.days.is_empty() {
            println!("   {}", "No favorites yet".dimmed());
        }

        // Spacing between conferences (but not after the last one)
        if i < loaded.len() - 1 {
            println!();
        }
    }

    if matches!(expand, Expand::None) && !favorites_only && !loaded.is_empty() {
        println!(
            "\n{}",
            "Use --day <n> or --expand to list talks, then `confsched toggle <conference> <day> <row>`."
                .dimmed()
        );
    }

    Ok(())
}
