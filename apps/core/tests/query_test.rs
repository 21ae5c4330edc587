use tourneycat_core::catalog::{load, Catalog, CatalogDefinition, CategoryDefinition, CommandDefinition};
use tourneycat_core::model::CategoryFilter;
use tourneycat_core::query::{matches_term, query, MatchField};

fn command(name: &str, description: &str) -> CommandDefinition {
    CommandDefinition {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn fixture() -> Catalog {
    load(CatalogDefinition {
        categories: vec![
            CategoryDefinition {
                name: "Bot".to_string(),
                commands: vec![
                    command("ping", "latency check"),
                    command("help", "list commands"),
                ],
            },
            CategoryDefinition {
                name: "Moderation".to_string(),
                commands: vec![
                    command("purge", "delete messages"),
                    command("ban", "ban users with optional reason"),
                ],
            },
        ],
    })
    .unwrap()
}

#[test]
fn empty_term_and_all_filter_return_the_whole_catalog_in_order() {
    let catalog = fixture();
    let result = query(&catalog, "", &CategoryFilter::All);

    assert_eq!(result.sections.len(), 2);
    assert_eq!(result.sections[0].category, "Bot");
    assert_eq!(result.sections[1].category, "Moderation");
    let bot_names: Vec<&str> = result.sections[0]
        .commands
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(bot_names, vec!["ping", "help"]);
}

#[test]
fn every_returned_command_matches_and_every_excluded_command_does_not() {
    let catalog = fixture();
    let result = query(&catalog, "ban", &CategoryFilter::All);

    for section in &result.sections {
        for cmd in &section.commands {
            assert!(matches_term(cmd, "ban"));
        }
    }

    let returned: Vec<&str> = result
        .sections
        .iter()
        .flat_map(|s| s.commands.iter().map(|c| c.name.as_str()))
        .collect();
    for category in catalog.categories() {
        for cmd in &category.commands {
            if !returned.contains(&cmd.name.as_str()) {
                assert!(!matches_term(cmd, "ban"));
            }
        }
    }
}

#[test]
fn matching_is_case_insensitive_on_name_and_description() {
    let catalog = fixture();

    let by_name = query(&catalog, "HELP", &CategoryFilter::All);
    assert_eq!(by_name.sections.len(), 1);
    assert_eq!(by_name.sections[0].commands[0].name, "help");

    let by_description = query(&catalog, "LATENCY", &CategoryFilter::All);
    assert_eq!(by_description.sections[0].commands[0].name, "ping");
}

#[test]
fn term_is_trimmed_before_matching() {
    let catalog = fixture();
    let result = query(&catalog, "  ping \t", &CategoryFilter::All);

    assert_eq!(result.term, "ping");
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].commands.len(), 1);
}

#[test]
fn single_letter_term_narrows_to_matching_commands() {
    let catalog = load(CatalogDefinition {
        categories: vec![CategoryDefinition {
            name: "Bot".to_string(),
            commands: vec![
                command("ping", "latency check"),
                command("help", "list commands"),
            ],
        }],
    })
    .unwrap();

    let result = query(&catalog, "p", &CategoryFilter::All);

    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].category, "Bot");
    assert_eq!(result.sections[0].commands.len(), 1);
    assert_eq!(result.sections[0].commands[0].name, "ping");
}

#[test]
fn categories_with_no_matches_are_omitted_entirely() {
    let catalog = fixture();
    let result = query(&catalog, "purge", &CategoryFilter::All);

    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].category, "Moderation");
}

#[test]
fn named_filter_restricts_to_exactly_that_category() {
    let catalog = fixture();
    let filtered = query(
        &catalog,
        "",
        &CategoryFilter::Named("Moderation".to_string()),
    );

    assert_eq!(filtered.sections.len(), 1);
    assert_eq!(filtered.sections[0].category, "Moderation");
    assert_eq!(filtered.sections[0].commands.len(), 2);
}

#[test]
fn named_filter_results_are_a_subset_of_the_all_results() {
    let catalog = fixture();
    let all = query(&catalog, "e", &CategoryFilter::All);
    let narrowed = query(&catalog, "e", &CategoryFilter::Named("Bot".to_string()));

    let all_bot: Vec<&str> = all
        .sections
        .iter()
        .filter(|s| s.category == "Bot")
        .flat_map(|s| s.commands.iter().map(|c| c.name.as_str()))
        .collect();
    let narrowed_bot: Vec<&str> = narrowed
        .sections
        .iter()
        .flat_map(|s| s.commands.iter().map(|c| c.name.as_str()))
        .collect();

    assert_eq!(narrowed_bot, all_bot);
}

#[test]
fn unknown_category_yields_an_empty_result_not_an_error() {
    let catalog = fixture();
    let result = query(&catalog, "", &CategoryFilter::Named("Tournament".to_string()));

    assert!(result.sections.is_empty());
}

#[test]
fn identical_arguments_yield_structurally_identical_results() {
    let catalog = fixture();
    let filter = CategoryFilter::Named("Bot".to_string());

    let first = query(&catalog, "ping", &filter);
    let second = query(&catalog, "ping", &filter);

    assert_eq!(first, second);
}

#[test]
fn match_field_prefers_name_over_description() {
    let catalog = fixture();
    let result = query(&catalog, "ban", &CategoryFilter::All);
    let ban = &result.sections[0].commands[0];

    assert_eq!(
        tourneycat_core::query::match_field(ban, &result.term),
        Some(MatchField::Name)
    );
    assert_eq!(tourneycat_core::query::match_field(ban, ""), None);
}
