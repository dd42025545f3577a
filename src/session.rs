//! The interactive menu loop.
//!
//! Modelled as a small state machine: [`Session::step`] maps the current
//! [`State`] to the next one, and [`Session::run`] steps from
//! [`State::Menu`] until [`State::Quit`].

use log::debug;
use std::io::{BufRead, Write};

use crate::console::Console;
use crate::display::display_recipe;
use crate::error::RecipeasyError;
use crate::model::{RecipeCollection, Record};
use crate::random::{choose, RandomSource};
use crate::search::{group_by_name, parse_ingredient_terms, search_by_ingredient, search_by_name};

pub const TITLE: &str = "RANDOM RECIPE RECOMMENDER";
pub const GOODBYE: &str = "Thank you for using Recipeasy!";
const EMPTY_QUERY: &str = "Please enter a search term.";
const INVALID_CHOICE: &str = "Invalid choice. Please enter 1, 2, 3 or 4.";
const RULE: &str = "------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Menu,
    RandomPick,
    SearchByName,
    SearchByIngredient,
    Quit,
}

/// Print the program title.
pub fn print_title<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{TITLE:^60}")?;
    writeln!(out, "{}", "=".repeat(60))
}

pub struct Session<'a, R, W, G> {
    recipes: &'a RecipeCollection,
    console: Console<R, W>,
    rng: G,
}

impl<'a, R, W, G> Session<'a, R, W, G>
where
    R: BufRead,
    W: Write,
    G: RandomSource,
{
    pub fn new(recipes: &'a RecipeCollection, console: Console<R, W>, rng: G) -> Self {
        Self {
            recipes,
            console,
            rng,
        }
    }

    /// Run the menu until the user quits or input ends.
    pub fn run(mut self) -> Result<Console<R, W>, RecipeasyError> {
        let mut state = State::Menu;
        while state != State::Quit {
            state = self.step(state)?;
        }
        Ok(self.console)
    }

    /// Perform one transition.
    pub fn step(&mut self, state: State) -> Result<State, RecipeasyError> {
        debug!("Session state: {:?}", state);
        match state {
            State::Menu => self.menu(),
            State::RandomPick => self.random_pick(),
            State::SearchByName => self.search_by_name(),
            State::SearchByIngredient => self.search_by_ingredient(),
            State::Quit => Ok(State::Quit),
        }
    }

    fn menu(&mut self) -> Result<State, RecipeasyError> {
        self.console.println("")?;
        self.console.println("What would you like to do?")?;
        self.console.println("  1. Surprise me with a random recipe")?;
        self.console.println("  2. Search recipes by name")?;
        self.console.println("  3. Search recipes by ingredients")?;
        self.console.println("  4. Quit")?;

        let Some(choice) = self.console.prompt("Enter your choice (1-4): ")? else {
            return self.quit();
        };

        match choice.trim().to_lowercase().as_str() {
            "1" => Ok(State::RandomPick),
            "2" => Ok(State::SearchByName),
            "3" => Ok(State::SearchByIngredient),
            "4" | "q" | "quit" | "exit" => self.quit(),
            _ => {
                self.console.println(INVALID_CHOICE)?;
                Ok(State::Menu)
            }
        }
    }

    fn quit(&mut self) -> Result<State, RecipeasyError> {
        self.console.println("")?;
        self.console.println(GOODBYE)?;
        Ok(State::Quit)
    }

    fn random_pick(&mut self) -> Result<State, RecipeasyError> {
        match choose(&mut self.rng, self.recipes.records()) {
            Some(recipe) => display_recipe(self.console.output(), recipe)?,
            None => self.console.println("The recipe collection is empty.")?,
        }
        Ok(State::Menu)
    }

    /// Prompt for a query; `None` means input ended, `Some("")` an empty query.
    fn read_query(&mut self, message: &str) -> Result<Option<String>, RecipeasyError> {
        Ok(self
            .console
            .prompt(message)?
            .map(|q| q.trim().to_string()))
    }

    fn search_by_name(&mut self) -> Result<State, RecipeasyError> {
        let Some(query) = self.read_query("Enter a recipe name to search for: ")? else {
            return self.quit();
        };
        if query.is_empty() {
            self.console.println(EMPTY_QUERY)?;
            return Ok(State::Menu);
        }

        let matches = search_by_name(self.recipes, &query);
        if matches.is_empty() {
            self.console
                .println(format!("No recipes found matching '{query}'."))?;
            return Ok(State::Menu);
        }

        let groups = group_by_name(&matches);
        if groups.len() > 1 {
            self.console.println(format!(
                "\nFound {} recipes matching '{}':",
                groups.len(),
                query
            ))?;
            for (i, (name, versions)) in groups.iter().enumerate() {
                let line = match versions.len() {
                    1 => format!("  {}. {}", i + 1, name),
                    n => format!("  {}. {} ({} versions)", i + 1, name, n),
                };
                self.console.println(line)?;
            }
            self.console
                .println(format!("\nShowing: {}", groups[0].0))?;
        }

        let (name, versions) = &groups[0];
        self.show_versions(name, versions)?;
        Ok(State::Menu)
    }

    fn show_versions(&mut self, name: &str, versions: &[&Record]) -> Result<(), RecipeasyError> {
        if let [single] = versions {
            display_recipe(self.console.output(), single)?;
            return Ok(());
        }

        self.console.println(format!(
            "\n{} versions found of '{}'",
            versions.len(),
            name
        ))?;
        for (i, recipe) in versions.iter().enumerate() {
            self.console.println("")?;
            self.console.println(RULE)?;
            self.console
                .println(format!("VERSION {} of {}", i + 1, versions.len()))?;
            self.console.println(RULE)?;
            display_recipe(self.console.output(), recipe)?;
        }
        Ok(())
    }

    fn search_by_ingredient(&mut self) -> Result<State, RecipeasyError> {
        let Some(query) =
            self.read_query("Enter ingredients separated by commas (e.g. flour, sugar): ")?
        else {
            return self.quit();
        };
        if query.is_empty() {
            self.console.println(EMPTY_QUERY)?;
            return Ok(State::Menu);
        }

        let terms = parse_ingredient_terms(&query).join(", ");
        let matches = search_by_ingredient(self.recipes, &query);
        if matches.is_empty() {
            self.console
                .println(format!("No recipes found containing ALL of: {terms}"))?;
            return Ok(State::Menu);
        }

        self.console.println(format!(
            "\nFound {} recipe(s) containing ALL of: {}",
            matches.len(),
            terms
        ))?;
        self.console.println("\nALL MATCHING RECIPES:")?;
        for (i, recipe) in matches.iter().enumerate() {
            let name = recipe.name().unwrap_or("Unknown".into());
            self.console.println(format!("  {}. {}", i + 1, name))?;
        }

        if let Some(recipe) = choose(&mut self.rng, &matches) {
            self.console.println("\nHere is one of them:")?;
            display_recipe(self.console.output(), recipe)?;
        }
        Ok(State::Menu)
    }
}
