use crate::models::{Bundle, Preference, ScoredItem};

/// Format a whole-unit price with thousands separators, e.g. `₩20,000`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("₩{}", out)
}

/// One-line summary of the request.
pub fn describe_preference(pref: &Preference) -> String {
    let tags = if pref.selected_tags.is_empty() {
        "none".to_string()
    } else {
        pref.selected_tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Budget: {} | People: {} | Sweetness: {} ~ {} | Tags: {}",
        format_price(pref.budget),
        pref.party_size,
        pref.sweetness_range.min,
        pref.sweetness_range.max,
        tags
    )
}

/// Display the bundle recommendations.
pub fn display_bundles(bundles: &[Bundle], pref: &Preference) {
    println!();
    println!("=== Recommended Bundles ===");
    println!("{}", describe_preference(pref));
    println!();

    if bundles.is_empty() {
        println!(
            "No drink + bakery bundle fits the budget, party size and sweetness. Try relaxing them."
        );
        return;
    }

    for (i, bundle) in bundles.iter().enumerate() {
        println!(
            "#{}: score {} | total {}",
            i + 1,
            bundle.score,
            format_price(bundle.price)
        );
        println!("  Drinks:");
        for name in &bundle.drinks {
            println!("    - {}", name);
        }
        println!("  Bakery:");
        for name in &bundle.bakeries {
            println!("    - {}", name);
        }
        println!();
    }
}

/// Display a ranked item list with scores and tags.
pub fn display_ranked_items(items: &[ScoredItem<'_>], title: &str) {
    if items.is_empty() {
        println!("{}: no items match the sweetness or tag preferences.", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let max_name_len = items.iter().map(|s| s.name().chars().count()).max().unwrap_or(10);

    for (i, scored) in items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>8} | {} | sweetness {} | score {:>2} | {}",
            i + 1,
            scored.name(),
            format_price(u64::from(scored.price())),
            scored.item.category,
            scored.item.sweetness,
            scored.total_score,
            scored.item.hashtags(),
            width = max_name_len
        );
    }

    println!();
}

/// Display a drink list summarised as name × quantity.
pub fn display_drink_counts(counts: &[(&str, usize)], party_size: usize) {
    if counts.is_empty() {
        return;
    }

    println!();
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    println!("=== {} drinks for {} people ===", total, party_size);
    for (name, count) in counts {
        println!("  {} × {}", name, count);
    }
}

/// Display the tag vocabulary.
pub fn display_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("No tags found in the menus.");
        return;
    }

    println!("Available tags ({}):", tags.len());
    for tag in tags {
        println!("  #{}", tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SweetnessRange;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "₩0");
        assert_eq!(format_price(950), "₩950");
        assert_eq!(format_price(4500), "₩4,500");
        assert_eq!(format_price(20000), "₩20,000");
        assert_eq!(format_price(1234567), "₩1,234,567");
    }

    #[test]
    fn test_describe_preference() {
        let pref = Preference {
            selected_tags: vec!["sweet".to_string(), "iced".to_string()],
            sweetness_range: SweetnessRange::new(1, 3),
            budget: 20_000,
            party_size: 2,
        };
        assert_eq!(
            describe_preference(&pref),
            "Budget: ₩20,000 | People: 2 | Sweetness: 1 ~ 3 | Tags: #sweet, #iced"
        );
    }

    #[test]
    fn test_describe_preference_without_tags() {
        let pref = Preference::default();
        assert!(describe_preference(&pref).ends_with("Tags: none"));
    }
}
