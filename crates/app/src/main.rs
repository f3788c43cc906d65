//! Velvet - the Innovation Club door
//!
//! Terminal front-end for the club-entry flow: a landing pitch, the
//! bouncer at the velvet rope, and the dance floor roster. All the real
//! logic lives in `velvet-core` and the session modules; this file only
//! reads lines and prints screens.

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use velvet_core::{DescriptorPolicy, Error, ScreeningResult};

mod config;
mod doorman;
mod flow;
mod jukebox;
mod state;

use config::AppConfig;
use flow::Screen;
use state::ClubSession;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Velvet");

    let config = AppConfig::load();
    let (mut session, mut verdicts) = ClubSession::new(&config);

    render_landing();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            Some(verdict) = verdicts.recv() => {
                if session.apply_verdict(verdict) {
                    render(&session);
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(input)) => {
                        if !handle_line(&mut session, input.trim()) {
                            break;
                        }
                    }
                    _ => break,
                }
            }
        }
    }

    println!("{}", "🚪 Goodnight.".dimmed());
}

/// Dispatch one line of input; returns false to quit
fn handle_line(session: &mut ClubSession, input: &str) -> bool {
    match input {
        "quit" | "exit" => return false,
        "mute" => {
            let muted = session.toggle_mute();
            println!("{}", if muted { "🔇 muted" } else { "🔊 unmuted" });
            return true;
        }
        "export" => {
            match session.export_json() {
                Ok(json) => println!("{json}"),
                Err(e) => println!("export failed: {e}"),
            }
            return true;
        }
        _ => {}
    }

    match session.screen() {
        Screen::Landing => {
            if session.approach() {
                render(session);
            }
        }
        Screen::Door => handle_door_line(session, input),
        Screen::Floor => {
            if input == "another" && session.check_another() {
                render(session);
            } else {
                hint("type 'another' to check another name, 'export', or 'quit'");
            }
        }
    }
    true
}

fn handle_door_line(session: &mut ClubSession, input: &str) {
    match session.result() {
        ScreeningResult::Pending => {
            // Anything typed here is a candidate; a fresh one supersedes
            // whatever the doorman is still chewing on
            let (name, owner) = parse_candidate(input);
            match session.submit(name, owner) {
                Ok(()) => println!("{}", "🤔 *checks clipboard*...".italic()),
                Err(Error::EmptyName) => hint("give me a name first"),
                Err(e) => println!("{e}"),
            }
        }
        ScreeningResult::Rejected { .. } => {
            if input == "again" && session.try_again() {
                render(session);
            } else {
                hint("type 'again' for the walk of shame, or 'quit'");
            }
        }
        ScreeningResult::Approved { .. } => handle_approved_line(session, input),
    }
}

fn handle_approved_line(session: &mut ClubSession, input: &str) {
    if input == "nah" {
        if session.try_again() {
            render(session);
        }
        return;
    }

    let rest = match input.strip_prefix("enter") {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest,
        _ => {
            hint("type 'enter' to claim your spot, or 'nah' to walk");
            return;
        }
    };

    // Under the choose policy "enter 3" picks the third open glyph
    let chosen = match session.policy() {
        DescriptorPolicy::Hash => None,
        DescriptorPolicy::Choose => {
            let open = session.available_glyphs();
            rest.trim()
                .parse::<usize>()
                .ok()
                .and_then(|i| open.get(i.saturating_sub(1)).copied())
                .or_else(|| open.first().copied())
        }
    };

    match session.confirm(chosen) {
        Ok(true) => render(session),
        Ok(false) => hint("nothing to confirm yet"),
        Err(Error::NoDescriptorsLeft) => {
            println!(
                "{}",
                "😬 Every outfit in the wardrobe is taken. No entry tonight.".yellow()
            );
        }
        Err(e) => println!("{e}"),
    }
}

/// "Name" or "Name, Owner"
fn parse_candidate(input: &str) -> (&str, Option<String>) {
    match input.split_once(',') {
        Some((name, owner)) if !owner.trim().is_empty() => {
            (name, Some(owner.trim().to_string()))
        }
        _ => (input, None),
    }
}

fn render(session: &ClubSession) {
    match session.screen() {
        Screen::Landing => render_landing(),
        Screen::Door => render_door(session),
        Screen::Floor => render_floor(session),
    }
}

fn render_landing() {
    println!();
    println!("{}", "VIP MEDICAL GROUP PRESENTS".yellow());
    println!("{}", "✨ VIP Originality Checker ✨".yellow().bold());
    println!();
    println!("Innovation is hard. {}", "Picking a name shouldn't be.".bold());
    println!("Use this tool to avoid the embarrassment of naming your AI");
    println!("the same thing as everyone else.");
    println!();
    println!("{}", "🎭 Over 1,000 names already taken. Are you original?".dimmed());
    hint("press Enter to approach the club");
}

fn render_door(session: &ClubSession) {
    println!();
    println!("{}", "✨ EXCLUSIVE ✨  INNOVATION CLUB".yellow().bold());
    println!("{}", "Where Original Ideas Come to Party".dimmed());
    println!("{}", "🕴️  the bouncer looks you up and down".italic());
    println!();

    match session.result() {
        ScreeningResult::Pending => {
            if session.candidate().is_some() {
                println!("{}", "🤔 *checks clipboard*...".italic());
            } else {
                println!("🕴️  {}", "\"Name?\"".bold());
                hint("your AI's name (or 'Name, YourName'), 'mute', 'quit'");
            }
        }
        ScreeningResult::Rejected { line } => {
            println!("🕴️  {}", format!("\"{line}\"").red());
            println!("{}", "🚫 That name is TAKEN. Try again, wannabe.".red());
            hint("'again' for the walk of shame");
        }
        ScreeningResult::Approved { line } => {
            println!("🕴️  {}", format!("\"{line}\"").green());
            let name = session
                .candidate()
                .map(|c| c.name.as_str())
                .unwrap_or_default();
            println!(
                "{}",
                format!("✨ Nice work being unique! \"{name}\" is available.").green()
            );
            if session.policy() == DescriptorPolicy::Choose {
                let open = session.available_glyphs();
                if open.is_empty() {
                    println!("{}", "😬 Every outfit is taken tonight.".yellow());
                    hint("'nah' to walk");
                } else {
                    println!("Open outfits: {}", open.join(" "));
                    hint("'enter <number>' to claim your spot, 'nah' to walk");
                }
                return;
            }
            hint("'enter' to claim your spot, 'nah' to walk");
        }
    }

    println!(
        "{}",
        format!("👥 {} names already inside", session.roster().len()).dimmed()
    );
}

fn render_floor(session: &ClubSession) {
    println!();
    println!("{}", "🎉 WELCOME TO THE INNOVATION CLUB 🎉".yellow().bold());

    if let Some(newest) = session.newest_entry() {
        println!(
            "{}",
            format!(
                "🌟 {} just joined the party at {}! 🌟",
                newest.name,
                newest.joined_at.format("%H:%M")
            )
            .yellow()
        );
    }
    println!();

    for entry in session.roster().entries() {
        let is_newest = session
            .newest_entry()
            .map(|n| n.id == entry.id)
            .unwrap_or(false);

        let card = format!(
            "{}  {:<12} 👕 {:<18} {}",
            entry.descriptor.glyph, entry.name, entry.descriptor.shirt, entry.descriptor.tagline
        );
        if is_newest {
            println!("{} {}", card.yellow().bold(), "← new".yellow());
        } else if entry.founder {
            println!("{}", card.dimmed());
        } else {
            println!("{card}");
        }
    }

    println!();
    hint("'another' to check another name, 'export', 'mute', 'quit'");
}

fn hint(text: &str) {
    println!("{}", format!("» {text}").dimmed());
}
