use confsched_core::conference::{Conference, LoadedConference};
use confsched_core::config::ConfschedConfig;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

fn fetch_spinner(title: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
        .template("{spinner} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {} schedule", title.bold()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Load a conference's schedule while showing a spinner.
pub async fn load_with_spinner(
    config: &ConfschedConfig,
    conference: &Conference,
) -> anyhow::Result<LoadedConference> {
    let client = config.client()?;

    let spinner = fetch_spinner(&conference.title);
    let result = conference.load(&client, config.missing_script).await;
    spinner.finish_and_clear();

    result.map_err(|e| anyhow::anyhow!("Could not load {} schedule: {}", conference.title, e))
}
