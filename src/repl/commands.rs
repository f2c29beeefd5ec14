//! REPL Commands
//!
//! The command registry and the handlers behind each command. All user
//! output goes to stdout; diagnostics go through tracing on stderr.

use std::collections::HashMap;
use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::clean_input;

/// Upper bound (exclusive) of the catch roll; a pokemon is caught when the
/// roll beats its base experience, so anything at 400+ is uncatchable.
const CATCH_ROLL_MAX: u32 = 400;

// == Command Registry ==
/// A REPL command's name and help text.
#[derive(Debug)]
pub struct CommandSpec {
    /// The word the user types
    pub name: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
}

/// Every command the REPL understands, in `help` display order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "map",
        description: "Displays locations in the Pokemon world 20 at a time",
    },
    CommandSpec {
        name: "mapb",
        description: "Displays the previous page of locations in the Pokemon world",
    },
    CommandSpec {
        name: "explore",
        description: "Given a location area name, returns list of Pokemon found in that area",
    },
    CommandSpec {
        name: "catch",
        description: "Given a Pokemon name it makes an attempt to catch it and add it to your pokedex",
    },
    CommandSpec {
        name: "inspect",
        description: "Displays details about a pokemon you've caught",
    },
    CommandSpec {
        name: "pokedex",
        description: "Displays names of every Pokemon you've caught",
    },
];

/// Whether a command loop iteration should keep going.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Decides a catch attempt: the roll has to beat the base experience.
fn catch_succeeds(roll: u32, base_experience: u32) -> bool {
    roll > base_experience
}

// == Repl ==
/// REPL state: the injected API client, pagination cursors for `map`/`mapb`,
/// and the user's caught pokemon.
#[derive(Debug)]
pub struct Repl {
    /// PokeAPI client (owns the response cache)
    client: ApiClient,
    /// URL of the next location-area page, if any
    next_page: Option<String>,
    /// URL of the previous location-area page, if any
    previous_page: Option<String>,
    /// Caught pokemon, keyed by name
    pokedex: HashMap<String, Pokemon>,
}

impl Repl {
    // == Constructor ==
    /// Creates a REPL around an API client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            next_page: None,
            previous_page: None,
            pokedex: HashMap::new(),
        }
    }

    // == Run Loop ==
    /// Prompts, reads, and dispatches until `exit` or end of input.
    ///
    /// Only terminal I/O failures end the loop; command errors are printed
    /// and the prompt comes back.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("Pokedex > ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // EOF: treat like exit
                println!();
                break;
            };

            let words = clean_input(&line);
            let Some(name) = words.first() else {
                continue;
            };

            match self.dispatch(name, &words[1..]).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) => println!("Error with command {}: {}", name, err),
            }
        }

        Ok(())
    }

    // == Dispatch ==
    /// Runs one command by name. Unknown names are reported, not errors.
    pub async fn dispatch(&mut self, name: &str, args: &[String]) -> Result<Flow> {
        debug!(command = name, "dispatching");

        match name {
            "help" => self.cmd_help(),
            "exit" => {
                println!("Closing the Pokedex... Goodbye!");
                return Ok(Flow::Exit);
            }
            "map" => self.cmd_map().await?,
            "mapb" => self.cmd_map_back().await?,
            "explore" => self.cmd_explore(args).await?,
            "catch" => self.cmd_catch(args).await?,
            "inspect" => self.cmd_inspect(args)?,
            "pokedex" => self.cmd_pokedex(),
            _ => println!("Unknown command"),
        }

        Ok(Flow::Continue)
    }

    // == Help ==
    fn cmd_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage: ");
        println!();
        for command in COMMANDS {
            println!("{}: {}", command.name, command.description);
        }
    }

    // == Map ==
    /// Prints the next page of location areas and advances the cursors.
    async fn cmd_map(&mut self) -> Result<()> {
        let page = self
            .client
            .list_location_areas(self.next_page.as_deref())
            .await?;

        for area in &page.results {
            println!("{}", area.name);
        }

        self.next_page = page.next;
        self.previous_page = page.previous;

        Ok(())
    }

    // == Map Back ==
    /// Prints the previous page, or says so when already at the start.
    async fn cmd_map_back(&mut self) -> Result<()> {
        let Some(previous) = self.previous_page.clone() else {
            println!("You're on the first page");
            return Ok(());
        };

        let page = self.client.list_location_areas(Some(&previous)).await?;

        for area in &page.results {
            println!("{}", area.name);
        }

        self.next_page = page.next;
        self.previous_page = page.previous;

        Ok(())
    }

    // == Explore ==
    /// Lists the pokemon encountered in a named area.
    async fn cmd_explore(&mut self, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("no location area provided"))?;

        println!("Exploring {}...", name);

        let detail = self.client.location_area_detail(name).await?;

        println!("Found Pokemon:");
        for encounter in &detail.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }

        Ok(())
    }

    // == Catch ==
    /// Rolls against the pokemon's base experience; caught pokemon join the
    /// user's collection.
    async fn cmd_catch(&mut self, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("no pokemon name provided"))?;

        let pokemon = self.client.pokemon(name).await?;

        println!("Throwing a Pokeball at {}...", pokemon.name);

        let roll = rand::thread_rng().gen_range(0..CATCH_ROLL_MAX);

        if catch_succeeds(roll, pokemon.base_experience) {
            println!("{} was caught!", pokemon.name);
            println!("You may now inspect it with the inspect command.");
            self.pokedex.insert(name.clone(), pokemon);
        } else {
            println!("{} escaped!", pokemon.name);
        }

        Ok(())
    }

    // == Inspect ==
    /// Prints the details of a caught pokemon.
    fn cmd_inspect(&self, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("no pokemon name provided"))?;

        let Some(pokemon) = self.pokedex.get(name) else {
            println!("You have not caught that pokemon");
            return Ok(());
        };

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);

        println!("Stats:");
        for stat in &pokemon.stats {
            println!("  -{}: {}", stat.stat.name, stat.base_stat);
        }

        println!("Types:");
        for slot in &pokemon.types {
            println!(" - {}", slot.type_.name);
        }

        Ok(())
    }

    // == Pokedex ==
    fn cmd_pokedex(&self) {
        println!("Your Pokedex:");
        for name in self.pokedex.keys() {
            println!(" - {}", name);
        }
    }

    /// Names of every caught pokemon (for tests and future commands).
    pub fn caught(&self) -> Vec<&str> {
        self.pokedex.keys().map(String::as_str).collect()
    }
}
