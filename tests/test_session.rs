use std::io::Cursor;

use recipeasy::session::{GOODBYE, TITLE};
use recipeasy::{Console, RecipeCollection, Record, SeededRandom, Session};

fn sample_recipes() -> RecipeCollection {
    RecipeCollection::from_records(vec![
        Record::new()
            .with("name", "Chocolate Cake")
            .with("minutes", 45i64)
            .with("n_steps", 10i64)
            .with("n_ingredients", 8i64)
            .with("ingredients", "['flour', 'sugar', 'chocolate', 'eggs']")
            .with("steps", "['Mix ingredients', 'Bake at 350F']")
            .with("description", "Delicious chocolate cake"),
        Record::new()
            .with("name", "Vanilla Cookies")
            .with("minutes", 30i64)
            .with("n_steps", 8i64)
            .with("n_ingredients", 6i64)
            .with("ingredients", "['flour', 'sugar', 'vanilla', 'butter']")
            .with("steps", "['Mix', 'Shape', 'Bake']")
            .with("description", "Sweet vanilla cookies"),
        Record::new()
            .with("name", "Chicken Soup")
            .with("minutes", 60i64)
            .with("n_steps", 12i64)
            .with("n_ingredients", 10i64)
            .with("ingredients", "['chicken', 'carrots', 'celery', 'onion']")
            .with("steps", "['Boil water', 'Add ingredients', 'Simmer']")
            .with("description", "Hearty chicken soup"),
    ])
}

/// Run a whole session over scripted input and return everything printed.
fn run_session(recipes: &RecipeCollection, input: &str, seed: u64) -> String {
    let console = Console::new(Cursor::new(input.to_string()), Vec::new());
    let console = Session::new(recipes, console, SeededRandom::new(seed))
        .run()
        .unwrap();
    let (_, output) = console.into_inner();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_surprise_me() {
    let output = run_session(&sample_recipes(), "1\n4\n", 1);
    assert!(output.contains("RECIPE RECOMMENDATION"));
    assert!(output.contains(GOODBYE));
}

#[test]
fn test_surprise_me_is_deterministic_for_a_seed() {
    let recipes = sample_recipes();
    let first = run_session(&recipes, "1\n1\n1\n4\n", 99);
    let second = run_session(&recipes, "1\n1\n1\n4\n", 99);
    assert_eq!(first, second);
}

#[test]
fn test_search_by_name_found() {
    let output = run_session(&sample_recipes(), "2\nchocolate\n4\n", 1);
    assert!(output.contains("Name: Chocolate Cake"));
    assert!(!output.contains("VERSION"));
}

#[test]
fn test_search_by_name_not_found() {
    let output = run_session(&sample_recipes(), "2\npizza\n4\n", 1);
    assert!(output.contains("No recipes found matching 'pizza'."));
}

#[test]
fn test_search_by_name_empty() {
    let output = run_session(&sample_recipes(), "2\n   \n4\n", 1);
    assert!(output.contains("Please enter a search term"));
    assert!(!output.contains("RECIPE RECOMMENDATION"));
}

#[test]
fn test_search_by_name_lists_distinct_names() {
    let output = run_session(&sample_recipes(), "2\nc\n4\n", 1);
    assert!(output.contains("Found 3 recipes matching 'c':"));
    assert!(output.contains("  3. Chicken Soup"));
    assert!(output.contains("Name: Chocolate Cake"));
}

#[test]
fn test_search_by_name_lists_version_counts_per_name() {
    let recipes = RecipeCollection::from_records(vec![
        Record::new().with("name", "Carrot Cake").with("minutes", 40i64),
        Record::new().with("name", "Cake Pops").with("minutes", 20i64),
        Record::new().with("name", "Cake Pops").with("minutes", 25i64),
        Record::new().with("name", "Cake Pops").with("minutes", 30i64),
    ]);

    let output = run_session(&recipes, "2
cake
4
", 1);
    assert!(output.contains("Found 2 recipes matching 'cake':"));
    assert!(output.contains("  1. Carrot Cake\n"));
    assert!(output.contains("  2. Cake Pops (3 versions)\n"));
    assert!(output.contains("Showing: Carrot Cake"));
    assert!(!output.contains("VERSION"));
}

#[test]
fn test_search_by_name_multiple_versions() {
    let recipes = RecipeCollection::from_records(vec![
        Record::new()
            .with("name", "Chocolate Cake")
            .with("minutes", 45i64)
            .with("ingredients", "['flour', 'sugar']")
            .with("description", "Version 1"),
        Record::new()
            .with("name", "Chocolate Cake")
            .with("minutes", 50i64)
            .with("ingredients", "['flour', 'sugar', 'cocoa']")
            .with("description", "Version 2"),
    ]);

    let output = run_session(&recipes, "2\nchocolate\n4\n", 1);
    assert!(output.contains("2 versions found"));
    assert!(output.contains("VERSION 1 of 2"));
    assert!(output.contains("VERSION 2 of 2"));
    assert!(output.contains("Cooking Time: 45 minutes"));
    assert!(output.contains("Cooking Time: 50 minutes"));
    assert_eq!(output.matches("RECIPE RECOMMENDATION").count(), 2);
}

#[test]
fn test_search_by_ingredient_found() {
    let output = run_session(&sample_recipes(), "3\nchicken\n4\n", 1);
    assert!(output.contains("ALL MATCHING RECIPES"));
    assert!(output.contains("Name: Chicken Soup"));
}

#[test]
fn test_search_by_ingredient_multiple() {
    let output = run_session(&sample_recipes(), "3\nflour, sugar\n4\n", 1);
    assert!(output.contains("Found 2 recipe(s) containing ALL of: flour, sugar"));
    assert!(output.contains("  1. Chocolate Cake"));
    assert!(output.contains("  2. Vanilla Cookies"));
    assert!(!output.contains("Chicken Soup"));
}

#[test]
fn test_search_by_ingredient_not_found() {
    let output = run_session(&sample_recipes(), "3\nbacon\n4\n", 1);
    assert!(output.contains("No recipes found containing ALL of: bacon"));
}

#[test]
fn test_search_by_ingredient_empty() {
    let output = run_session(&sample_recipes(), "3\n\n4\n", 1);
    assert!(output.contains("Please enter a search term"));
}

#[test]
fn test_search_by_ingredient_only_commas() {
    let output = run_session(&sample_recipes(), "3\n , ,\n4\n", 1);
    assert!(output.contains("No recipes found containing ALL of: "));
}

#[test]
fn test_quit() {
    let output = run_session(&sample_recipes(), "4\n", 1);
    assert!(output.contains("Thank you for using Recipeasy!"));
    assert!(!output.contains("RECIPE RECOMMENDATION"));
}

#[test]
fn test_invalid_choice() {
    let output = run_session(&sample_recipes(), "9\n4\n", 1);
    assert!(output.contains("Invalid choice"));
    assert!(output.contains(GOODBYE));
}

#[test]
fn test_end_of_input_quits() {
    let output = run_session(&sample_recipes(), "2\nsoup\n", 1);
    assert!(output.contains("Name: Chicken Soup"));
    assert!(output.contains(GOODBYE));
}

#[test]
fn test_title_banner() {
    let mut out = Vec::new();
    recipeasy::session::print_title(&mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains(TITLE));
}
