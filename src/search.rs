use log::debug;

use crate::model::{fields, RecipeCollection, Record};

/// Case-insensitive substring test. `needle` must already be lowercase.
fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Find recipes whose name contains `query`, ignoring case.
///
/// The caller trims the query and rejects empty input. Records without a name
/// (absent or null) never match. Collection order is preserved.
pub fn search_by_name<'a>(recipes: &'a RecipeCollection, query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();

    let matches: Vec<&Record> = recipes
        .iter()
        .filter(|record| {
            record
                .name()
                .is_some_and(|name| contains_lowercase(&name, &needle))
        })
        .collect();

    debug!("Name search '{}' matched {} recipe(s)", query, matches.len());
    matches
}

/// Split a comma-separated ingredient query into lowercase, non-empty terms.
pub fn parse_ingredient_terms(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Find recipes whose ingredients text contains every term of `query`.
///
/// Returns nothing when the collection has no ingredients column or when the
/// query holds no terms at all. A record with a null or missing ingredients
/// value never matches.
pub fn search_by_ingredient<'a>(recipes: &'a RecipeCollection, query: &str) -> Vec<&'a Record> {
    if !recipes.has_column(fields::INGREDIENTS) {
        debug!("Collection has no '{}' column", fields::INGREDIENTS);
        return Vec::new();
    }

    let terms = parse_ingredient_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<&Record> = recipes.iter().collect();
    for term in &terms {
        matches.retain(|record| {
            record
                .text(fields::INGREDIENTS)
                .is_some_and(|ingredients| contains_lowercase(&ingredients, term))
        });
        debug!("After '{}': {} recipe(s) left", term, matches.len());
        if matches.is_empty() {
            break;
        }
    }

    matches
}

/// Group matches that share an identical name, keeping first-seen order both
/// between groups and inside each group.
pub fn group_by_name<'a>(matches: &[&'a Record]) -> Vec<(String, Vec<&'a Record>)> {
    let mut groups: Vec<(String, Vec<&'a Record>)> = Vec::new();

    for &record in matches {
        let name = record.name().map(|n| n.into_owned()).unwrap_or_default();
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, members)) => members.push(record),
            None => groups.push((name, vec![record])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    fn collection() -> RecipeCollection {
        RecipeCollection::from_records(vec![
            Record::new()
                .with("name", "Tomato Soup")
                .with("ingredients", "['tomato', 'Salt']"),
            Record::new()
                .with("name", FieldValue::Null)
                .with("ingredients", "['salt']"),
            Record::new()
                .with("name", "Salted Caramel")
                .with("ingredients", FieldValue::Null),
        ])
    }

    #[test]
    fn test_parse_ingredient_terms() {
        assert_eq!(
            parse_ingredient_terms(" Flour , ,SUGAR,  "),
            vec!["flour".to_string(), "sugar".to_string()]
        );
        assert!(parse_ingredient_terms("   ,  ,  ").is_empty());
        assert!(parse_ingredient_terms("").is_empty());
    }

    #[test]
    fn test_null_name_is_skipped() {
        let recipes = collection();
        let matches = search_by_name(&recipes, "salt");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name().as_deref(), Some("Salted Caramel"));
    }

    #[test]
    fn test_null_ingredients_never_match() {
        let recipes = collection();
        let matches = search_by_ingredient(&recipes, "SALT");
        let names: Vec<_> = matches.iter().map(|r| r.name()).collect();
        assert_eq!(matches.len(), 2);
        assert_eq!(names[0].as_deref(), Some("Tomato Soup"));
        assert_eq!(names[1], None);
    }

    #[test]
    fn test_group_by_name_keeps_order() {
        let a1 = Record::new().with("name", "A").with("minutes", 1i64);
        let b = Record::new().with("name", "B");
        let a2 = Record::new().with("name", "A").with("minutes", 2i64);
        let matches = vec![&a1, &b, &a2];

        let groups = group_by_name(&matches);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "A");
        assert_eq!(groups[0].1, vec![&a1, &a2]);
        assert_eq!(groups[1].0, "B");
    }
}
