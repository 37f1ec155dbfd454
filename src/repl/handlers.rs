//! Command handlers
//!
//! One function per REPL command. Handlers write user-facing text to `out`
//! and report failures as [`CommandError`]s for the loop to print.

use std::io::Write;

use rand::Rng;

use crate::catch::attempt_catch;
use crate::client::PokeClient;
use crate::error::{CommandError, CommandResult};
use crate::models::LocationAreaPage;
use crate::repl::commands::COMMANDS;
use crate::session::Session;

pub fn help(out: &mut impl Write) -> CommandResult<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for info in COMMANDS {
        writeln!(out, "{}: {}", info.name, info.description)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Shows the next page of location areas, wrapping to the first page once
/// the listing has been exhausted.
pub async fn map_forward(
    client: &PokeClient,
    session: &mut Session,
    out: &mut impl Write,
) -> CommandResult<()> {
    let page = client.location_areas(session.next_page.as_deref()).await?;
    show_page(session, &page, out)
}

/// Shows the previous page of location areas.
pub async fn map_back(
    client: &PokeClient,
    session: &mut Session,
    out: &mut impl Write,
) -> CommandResult<()> {
    let Some(url) = session.previous_page.clone() else {
        return Err(CommandError::NoPreviousPage);
    };
    let page = client.location_areas(Some(&url)).await?;
    show_page(session, &page, out)
}

fn show_page(
    session: &mut Session,
    page: &LocationAreaPage,
    out: &mut impl Write,
) -> CommandResult<()> {
    session.follow_page(page);
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}

pub async fn explore(client: &PokeClient, area: &str, out: &mut impl Write) -> CommandResult<()> {
    let location = client.location_area(area).await?;

    writeln!(out, "Exploring {}...", area)?;
    writeln!(out, "Found Pokemon:")?;
    for name in location.creature_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

pub async fn catch<R: Rng + ?Sized>(
    client: &PokeClient,
    session: &mut Session,
    rng: &mut R,
    name: &str,
    out: &mut impl Write,
) -> CommandResult<()> {
    let creature = client.creature(name).await?;

    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    if attempt_catch(rng, creature.base_experience.unwrap_or(0)) {
        session.record_catch(name, creature);
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    Ok(())
}

pub fn inspect(session: &Session, name: &str, out: &mut impl Write) -> CommandResult<()> {
    let Some(caught) = session.caught(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };
    let creature = &caught.creature;

    writeln!(out, "Name: {}", creature.name)?;
    writeln!(out, "Height: {}", creature.height)?;
    writeln!(out, "Weight: {}", creature.weight)?;
    writeln!(out, "Stats:")?;
    for slot in &creature.stats {
        writeln!(out, "  - {}: {}", slot.stat.name, slot.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for slot in &creature.types {
        writeln!(out, "  - {}", slot.kind.name)?;
    }
    writeln!(
        out,
        "Caught: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    Ok(())
}

pub fn pokedex(session: &Session, out: &mut impl Write) -> CommandResult<()> {
    writeln!(out, "Your Pokedex:")?;
    for name in session.caught_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Creature, NamedResource, StatSlot, TypeSlot};

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut buf = Vec::new();
        help(&mut buf).unwrap();
        let text = output(buf);
        for info in COMMANDS {
            assert!(text.contains(&format!("{}: {}", info.name, info.description)));
        }
    }

    #[test]
    fn test_inspect_uncaught() {
        let mut buf = Vec::new();
        inspect(&Session::new(), "mew", &mut buf).unwrap();
        assert_eq!(output(buf), "you have not caught that pokemon\n");
    }

    #[test]
    fn test_inspect_caught() {
        let mut session = Session::new();
        session.record_catch(
            "pidgey",
            Creature {
                name: "pidgey".to_string(),
                height: 3,
                weight: 18,
                base_experience: Some(50),
                stats: vec![StatSlot {
                    base_stat: 40,
                    stat: named("hp"),
                }],
                types: vec![
                    TypeSlot {
                        slot: 1,
                        kind: named("normal"),
                    },
                    TypeSlot {
                        slot: 2,
                        kind: named("flying"),
                    },
                ],
            },
        );

        let mut buf = Vec::new();
        inspect(&session, "pidgey", &mut buf).unwrap();
        let text = output(buf);
        assert!(text.starts_with("Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  - hp: 40\n"));
        assert!(text.contains("Types:\n  - normal\n  - flying\n"));
        assert!(text.contains("Caught: "));
    }

    #[test]
    fn test_pokedex_empty() {
        let mut buf = Vec::new();
        pokedex(&Session::new(), &mut buf).unwrap();
        assert_eq!(output(buf), "Your Pokedex:\n");
    }
}
