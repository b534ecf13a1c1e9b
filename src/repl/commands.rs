//! REPL Commands
//!
//! The command registry and one handler per command.

use std::io::Write;

use tracing::debug;

use crate::capture::attempt_capture;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::Context;

/// Writer every command prints to.
pub type Output<'a> = &'a mut (dyn Write + Send);

/// What the loop should do after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Command Registry ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Looks a command up by the word typed at the prompt.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Display a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Display the next page of location areas",
            Command::MapBack => "Display the previous page of location areas",
            Command::Explore => "List the pokemon found in a location area: explore <area>",
            Command::Catch => "Throw a Pokeball at a pokemon: catch <pokemon>",
            Command::Inspect => "Show details of a caught pokemon: inspect <pokemon>",
            Command::Pokedex => "List every pokemon you have caught",
        }
    }

    /// Runs the command to completion.
    pub async fn execute(
        &self,
        ctx: &mut Context,
        args: &[String],
        out: Output<'_>,
    ) -> Result<Flow> {
        debug!(command = self.name(), ?args, "Executing command");
        match self {
            Command::Help => command_help(out).map(|_| Flow::Continue),
            Command::Exit => command_exit(out).map(|_| Flow::Exit),
            Command::Map => command_map(ctx, out).await.map(|_| Flow::Continue),
            Command::MapBack => command_map_back(ctx, out).await.map(|_| Flow::Continue),
            Command::Explore => command_explore(ctx, args, out)
                .await
                .map(|_| Flow::Continue),
            Command::Catch => command_catch(ctx, args, out).await.map(|_| Flow::Continue),
            Command::Inspect => command_inspect(ctx, args, out).map(|_| Flow::Continue),
            Command::Pokedex => command_pokedex(ctx, out).map(|_| Flow::Continue),
        }
    }
}

// == Handlers ==
fn command_help(out: Output<'_>) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.name(), command.description())?;
    }
    Ok(())
}

fn command_exit(out: Output<'_>) -> Result<()> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(())
}

async fn command_map(ctx: &mut Context, out: Output<'_>) -> Result<()> {
    let url = ctx
        .next_locations_url
        .clone()
        .ok_or_else(|| PokedexError::Navigation("you're on the last page".to_string()))?;

    show_location_page(ctx, &url, out).await
}

async fn command_map_back(ctx: &mut Context, out: Output<'_>) -> Result<()> {
    let url = ctx
        .prev_locations_url
        .clone()
        .ok_or_else(|| PokedexError::Navigation("you're on the first page".to_string()))?;

    show_location_page(ctx, &url, out).await
}

/// Fetches a location page, moves the cursor to it and prints its areas.
async fn show_location_page(ctx: &mut Context, url: &str, out: Output<'_>) -> Result<()> {
    let page = ctx.client.list_locations(Some(url)).await?;

    ctx.next_locations_url = page.next.clone();
    ctx.prev_locations_url = page.previous.clone();

    for name in page.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

async fn command_explore(ctx: &mut Context, args: &[String], out: Output<'_>) -> Result<()> {
    let [area_name] = args else {
        return Err(PokedexError::Usage(
            "you must provide a location name".to_string(),
        ));
    };

    writeln!(out, "Exploring {}...", area_name)?;
    let area = ctx.client.get_location(area_name).await?;

    writeln!(out, "Found Pokemon:")?;
    for name in area.pokemon_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

async fn command_catch(ctx: &mut Context, args: &[String], out: Output<'_>) -> Result<()> {
    let [pokemon_name] = args else {
        return Err(PokedexError::Usage(
            "you must provide a pokemon name".to_string(),
        ));
    };

    writeln!(out, "Throwing a Pokeball at {}...", pokemon_name)?;
    let pokemon = match ctx.client.get_pokemon(pokemon_name).await {
        Ok(pokemon) => pokemon,
        Err(err) if err.is_not_found() => {
            writeln!(out, "Pokemon {} not found!", pokemon_name)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if attempt_capture(pokemon.difficulty(), &mut ctx.rng) {
        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        ctx.record_catch(pokemon);
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }
    Ok(())
}

fn command_inspect(ctx: &Context, args: &[String], out: Output<'_>) -> Result<()> {
    let [pokemon_name] = args else {
        return Err(PokedexError::Usage(
            "you must provide a pokemon name".to_string(),
        ));
    };

    let pokemon = ctx
        .caught
        .get(pokemon_name)
        .ok_or_else(|| PokedexError::NotCaught(pokemon_name.clone()))?;

    print_pokemon_details(pokemon, out)
}

fn command_pokedex(ctx: &Context, out: Output<'_>) -> Result<()> {
    if ctx.caught.is_empty() {
        writeln!(out, "Your Pokedex is empty. Go catch something!")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for name in ctx.caught.keys() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

fn print_pokemon_details(pokemon: &Pokemon, out: Output<'_>) -> Result<()> {
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("map"), Some(Command::Map));
        assert_eq!(Command::parse("mapb"), Some(Command::MapBack));
        assert_eq!(Command::parse("pokedex"), Some(Command::Pokedex));
        assert_eq!(Command::parse("fly"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Command::ALL.iter().enumerate() {
            for b in &Command::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut out = Vec::new();
        command_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Welcome to the Pokedex!"));
        for command in Command::ALL {
            assert!(text.contains(&format!("{}: ", command.name())));
        }
    }

    #[test]
    fn test_print_pokemon_details() {
        let pokemon: Pokemon = serde_json::from_str(
            r#"{
                "name": "pidgey", "height": 3, "weight": 18,
                "stats": [{"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": ""}}],
                "types": [{"slot": 1, "type": {"name": "normal", "url": ""}},
                          {"slot": 2, "type": {"name": "flying", "url": ""}}]
            }"#,
        )
        .unwrap();

        let mut out = Vec::new();
        print_pokemon_details(&pokemon, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  - hp: 40\nTypes:\n  - normal\n  - flying\n"
        );
    }
}
