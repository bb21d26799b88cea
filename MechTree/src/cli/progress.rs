//! CLI progress display utilities
//!
//! Step indicators with emojis, in the same style for every command.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

/// Magnifying glass - for graph walks
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Floppy disk - for writing extracted data
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Gear - for layout passes
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Sparkles - for the completion line
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");
/// Link - for joining data
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

/// Print a step indicator: `[1/2] 💾 Message...`
///
/// # Example
/// ```ignore
/// print_step(1, 2, DISK, "Exporting Component Skill Tree Data...");
/// print_step(2, 2, LINK, "Exporting Aggregate Skill Tree Data...");
/// ```
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Data export complete! (2 seconds)`
pub fn print_done(msg: &str, elapsed: Duration) {
    println!("{}", done_line(msg, elapsed));
}

fn done_line(msg: &str, elapsed: Duration) -> String {
    format!("{}{} ({})", SPARKLE, msg, HumanDuration(elapsed))
}
