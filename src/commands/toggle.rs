use anyhow::Result;
use chrono::Local;
use confsched_core::conference::Conference;
use confsched_core::config::ConfschedConfig;
use confsched_core::presenter::{select_row, RowContext};
use owo_colors::OwoColorize;

use super::load_favorites;
use crate::render::{Render, TerminalRow};
use crate::utils::tui::load_with_spinner;

pub async fn run(config: &ConfschedConfig, conference: Conference, day: usize, row: usize) -> Result<()> {
    let loaded = load_with_spinner(config, &conference).await?;
    let mut favorites = load_favorites(config)?;

    let ctx = RowContext::new(day, row);
    let talk = ctx.resolve(&loaded.days)?;

    let mut terminal_row = TerminalRow::new(ctx, false);
    let favorite = select_row(&loaded.days, ctx, &mut favorites, &Local, &mut terminal_row)?;
    terminal_row.set_favorite(favorite);

    println!("{}", terminal_row.render());
    if favorite {
        println!("{} {}", "Added to favorites:".green(), talk.title);
    } else {
        println!("{} {}", "Removed from favorites:".yellow(), talk.title);
    }

    Ok(())
}
