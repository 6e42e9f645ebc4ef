use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{Preference, SweetnessRange};
use crate::recommender::BAKERY_LIST_LIMIT;

/// Cafe recommender: picks bakery items, drinks, and budget-fitting bundles.
#[derive(Parser, Debug)]
#[command(name = "cafe_recommender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the bakery menu CSV.
    #[arg(long, default_value = "Bakery_menu.csv", global = true)]
    pub bakery: PathBuf,

    /// Path to the drink menu CSV.
    #[arg(long, default_value = "Drink_menu.csv", global = true)]
    pub drinks: PathBuf,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub prefs: PreferenceArgs,
}

/// Customer preferences shared by every recommendation command.
#[derive(Args, Debug, Clone)]
pub struct PreferenceArgs {
    /// Maximum total spend for a bundle.
    #[arg(long, default_value_t = 20_000, global = true)]
    pub budget: u64,

    /// Number of people (one drink each).
    #[arg(long, default_value_t = 2, global = true)]
    pub people: usize,

    /// Lowest acceptable sweetness (0 = unsweetened, 4 = very sweet).
    #[arg(long, default_value_t = 1, global = true)]
    pub sweet_min: u8,

    /// Highest acceptable sweetness.
    #[arg(long, default_value_t = 3, global = true)]
    pub sweet_max: u8,

    /// Desired tag; repeat for up to three tags. A leading '#' is optional.
    #[arg(long = "tag", global = true)]
    pub tags: Vec<String>,
}

impl PreferenceArgs {
    /// Build a preference; tags are used as given and checked by the caller.
    pub fn to_preference(&self) -> Preference {
        Preference {
            selected_tags: self.tags.clone(),
            sweetness_range: SweetnessRange::new(self.sweet_min, self.sweet_max),
            budget: self.budget,
            party_size: self.people,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend the top three drink + bakery bundles within budget.
    Bundles {
        /// Worker threads for the bundle search.
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },

    /// Recommend bakery items.
    Bakery {
        /// Number of items to show.
        #[arg(long, default_value_t = BAKERY_LIST_LIMIT)]
        limit: usize,
    },

    /// Recommend one drink per person.
    Drinks,

    /// List every tag found in the menus.
    Tags,

    /// Ask for preferences interactively, then show every recommendation.
    Interactive,
}

impl Command {
    /// Whether the command reads the bakery menu.
    pub fn uses_bakery(&self) -> bool {
        !matches!(self, Command::Drinks)
    }

    /// Whether the command reads the drink menu.
    pub fn uses_drinks(&self) -> bool {
        !matches!(self, Command::Bakery { .. })
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Bundles { threads: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cafe_recommender"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.bakery, PathBuf::from("Bakery_menu.csv"));
        assert_eq!(cli.prefs.to_preference(), Preference::default());
    }

    #[test]
    fn test_preference_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "cafe_recommender",
            "drinks",
            "--budget",
            "15000",
            "--people",
            "4",
            "--sweet-min",
            "0",
            "--sweet-max",
            "2",
            "--tag",
            "milk",
            "--tag",
            "#iced",
        ]);
        assert!(matches!(cli.command, Some(Command::Drinks)));
        let pref = cli.prefs.to_preference();
        assert_eq!(pref.budget, 15_000);
        assert_eq!(pref.party_size, 4);
        assert_eq!(pref.sweetness_range, SweetnessRange::new(0, 2));
        assert_eq!(pref.selected_tags, vec!["milk", "#iced"]);
    }

    #[test]
    fn test_single_menu_commands() {
        let drinks = Command::Drinks;
        assert!(drinks.uses_drinks());
        assert!(!drinks.uses_bakery());

        let bakery = Command::Bakery { limit: 4 };
        assert!(bakery.uses_bakery());
        assert!(!bakery.uses_drinks());

        for both in [Command::default(), Command::Tags, Command::Interactive] {
            assert!(both.uses_bakery() && both.uses_drinks());
        }
    }

    #[test]
    fn test_bundles_threads_flag() {
        let cli = Cli::parse_from(["cafe_recommender", "bundles", "--threads", "4"]);
        assert!(matches!(cli.command, Some(Command::Bundles { threads: 4 })));
    }
}
