use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cafe_recommender_rs::catalog::{all_tags, load_menu, Catalog};
use cafe_recommender_rs::cli::{Cli, Command};
use cafe_recommender_rs::error::Result;
use cafe_recommender_rs::interface::{
    collect_preference, display_bundles, display_drink_counts, display_ranked_items,
    display_tags, prompt_yes_no, resolve_tags,
};
use cafe_recommender_rs::models::Preference;
use cafe_recommender_rs::recommender::{
    name_counts, rank_items, search_bundles, SearchOptions, BAKERY_LIST_LIMIT, DRINKS_PER_PERSON,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let bakery = load_menu(&cli.bakery, command.uses_bakery())?;
    let drinks = load_menu(&cli.drinks, command.uses_drinks())?;
    info!(bakery = bakery.len(), drinks = drinks.len(), "menus loaded");

    let vocabulary = all_tags(&[&bakery, &drinks]);

    if let Command::Tags = command {
        return cmd_tags(&vocabulary, cli.json);
    }

    let mut pref = cli.prefs.to_preference();
    pref.selected_tags = resolve_tags(&pref.selected_tags, &vocabulary)?;
    if let Err(e) = pref.validate() {
        warn!(error = %e, "rejected preferences");
        return Err(e);
    }

    match command {
        Command::Bundles { threads } => cmd_bundles(&drinks, &bakery, &pref, threads, cli.json),
        Command::Bakery { limit } => cmd_bakery(&bakery, &pref, limit, cli.json),
        Command::Drinks => cmd_drinks(&drinks, &pref, cli.json),
        Command::Interactive => cmd_interactive(&drinks, &bakery, &pref, &vocabulary),
        Command::Tags => Ok(()),
    }
}

/// List all tags across both menus.
fn cmd_tags(vocabulary: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(vocabulary)?);
    } else {
        display_tags(vocabulary);
    }
    Ok(())
}

/// Recommend the top drink + bakery bundles.
fn cmd_bundles(
    drinks: &Catalog,
    bakery: &Catalog,
    pref: &Preference,
    threads: usize,
    json: bool,
) -> Result<()> {
    let options = SearchOptions {
        threads,
        cancel: None,
    };
    let report = search_bundles(drinks, bakery, pref, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&report.bundles)?);
    } else {
        display_bundles(&report.bundles, pref);
    }
    Ok(())
}

/// Recommend bakery items.
fn cmd_bakery(bakery: &Catalog, pref: &Preference, limit: usize, json: bool) -> Result<()> {
    let items = rank_items(
        bakery,
        &pref.selected_tags,
        pref.sweetness_range,
        Some(limit),
        1,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        display_ranked_items(&items, "Bakery picks");
    }
    Ok(())
}

/// Recommend one drink per person.
fn cmd_drinks(drinks: &Catalog, pref: &Preference, json: bool) -> Result<()> {
    let items = rank_items(
        drinks,
        &pref.selected_tags,
        pref.sweetness_range,
        Some(DRINKS_PER_PERSON),
        pref.party_size,
    );
    let counts = name_counts(&items);

    if json {
        let body = serde_json::json!({
            "items": items,
            "counts": counts
                .iter()
                .map(|(name, quantity)| serde_json::json!({ "name": name, "quantity": quantity }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        display_drink_counts(&counts, pref.party_size);
        display_ranked_items(&items, "Drink picks");
    }
    Ok(())
}

/// Ask for preferences, show every recommendation, repeat on request.
fn cmd_interactive(
    drinks: &Catalog,
    bakery: &Catalog,
    defaults: &Preference,
    vocabulary: &[String],
) -> Result<()> {
    let mut current = defaults.clone();

    loop {
        current = collect_preference(&current, vocabulary)?;
        println!();

        cmd_bundles(drinks, bakery, &current, 1, false)?;
        cmd_bakery(bakery, &current, BAKERY_LIST_LIMIT, false)?;
        cmd_drinks(drinks, &current, false)?;

        if !prompt_yes_no("Try different preferences?", false)? {
            break;
        }
    }

    Ok(())
}
