use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{RecommenderError, Result};
use crate::models::{
    Preference, SweetnessRange, MAX_PARTY_SIZE, MAX_SELECTED_TAGS, MAX_SWEETNESS,
};

/// Prompt for the maximum budget.
pub fn prompt_budget(default: u64) -> Result<u64> {
    let input: String = Input::new()
        .with_prompt("What is your maximum budget?")
        .default(default.to_string())
        .interact_text()?;

    let budget: u64 = input
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| RecommenderError::InvalidInput("Invalid budget".to_string()))?;

    if budget == 0 {
        return Err(RecommenderError::InvalidInput(
            "Budget must be positive".to_string(),
        ));
    }

    Ok(budget)
}

/// Prompt for the number of people.
pub fn prompt_party_size(default: usize) -> Result<usize> {
    let input: String = Input::new()
        .with_prompt(format!("How many people (1-{})?", MAX_PARTY_SIZE))
        .default(default.to_string())
        .interact_text()?;

    let people: usize = input
        .trim()
        .parse()
        .map_err(|_| RecommenderError::InvalidInput("Invalid number".to_string()))?;

    if people == 0 || people > MAX_PARTY_SIZE {
        return Err(RecommenderError::InvalidInput(format!(
            "Party size must be between 1 and {}",
            MAX_PARTY_SIZE
        )));
    }

    Ok(people)
}

/// Prompt for a sweetness window such as `1-3`, or a single level like `2`.
pub fn prompt_sweetness_range(default: SweetnessRange) -> Result<SweetnessRange> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Preferred sweetness range (0 = unsweetened … {} = very sweet)",
            MAX_SWEETNESS
        ))
        .default(format!("{}-{}", default.min, default.max))
        .interact_text()?;

    parse_sweetness_range(&input)
}

/// Parse `min-max` or a single level into a validated range.
pub fn parse_sweetness_range(input: &str) -> Result<SweetnessRange> {
    let invalid = || RecommenderError::InvalidInput(format!("Invalid sweetness range '{}'", input));

    let (min, max) = match input.split_once('-') {
        Some((lo, hi)) => (lo.trim(), hi.trim()),
        None => (input.trim(), input.trim()),
    };
    let min: u8 = min.parse().map_err(|_| invalid())?;
    let max: u8 = max.parse().map_err(|_| invalid())?;

    if min > max || max > MAX_SWEETNESS {
        return Err(invalid());
    }
    Ok(SweetnessRange::new(min, max))
}

/// Prompt for up to three tags from the menu vocabulary.
///
/// Re-asks when too many are ticked.
pub fn prompt_tags(vocabulary: &[String]) -> Result<Vec<String>> {
    if vocabulary.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = vocabulary.iter().map(|t| format!("#{}", t)).collect();

    loop {
        let picked = MultiSelect::new()
            .with_prompt(format!(
                "Pick up to {} tags (space to toggle, enter to confirm)",
                MAX_SELECTED_TAGS
            ))
            .items(&labels)
            .interact()?;

        if picked.len() <= MAX_SELECTED_TAGS {
            return Ok(picked.into_iter().map(|i| vocabulary[i].clone()).collect());
        }

        println!(
            "You picked {} tags; please choose at most {}.",
            picked.len(),
            MAX_SELECTED_TAGS
        );
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full preference, starting from `defaults`.
pub fn collect_preference(defaults: &Preference, vocabulary: &[String]) -> Result<Preference> {
    let budget = prompt_budget(defaults.budget)?;
    let party_size = prompt_party_size(defaults.party_size)?;
    let sweetness_range = prompt_sweetness_range(defaults.sweetness_range)?;
    let selected_tags = prompt_tags(vocabulary)?;

    let pref = Preference {
        selected_tags,
        sweetness_range,
        budget,
        party_size,
    };
    pref.validate()?;
    Ok(pref)
}
