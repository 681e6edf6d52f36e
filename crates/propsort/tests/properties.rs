use std::collections::HashMap;

use proptest::prelude::*;
use propsort::{
    canonical_name, concentric_position, is_blank, is_css_variable, is_sass_variable,
    sort_properties, PropertyGroups, SortingOptions, Strategy as SortStrategy,
};

const KNOWN: &[&str] = &[
    "position", "top", "left", "z-index", "display", "flex", "width", "height", "margin",
    "padding", "border", "border-radius", "background", "color", "font-size", "line-height",
    "transform", "transition", "opacity", "cursor", "content", "appearance", "user-select",
];

const PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-"];

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(KNOWN).prop_map(str::to_string),
        2 => (prop::sample::select(PREFIXES), prop::sample::select(KNOWN))
            .prop_map(|(prefix, name)| format!("{}{}", prefix, name)),
        1 => "[a-z]{1,6}(-[a-z]{1,5})?",
        1 => "--[a-z]{1,6}",
        1 => "\\$[a-z]{1,6}",
    ]
}

fn tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), 0..24)
}

fn custom_groups() -> PropertyGroups {
    PropertyGroups::new([
        vec!["position", "top", "left", "z-index"],
        vec!["display", "flex", "width", "height", "margin", "padding"],
        vec!["color", "font-size", "line-height"],
    ])
    .unwrap()
}

fn sorting_options() -> impl Strategy<Value = SortingOptions> {
    (0usize..5, any::<bool>(), any::<bool>()).prop_map(|(which, blank_lines, within)| {
        let strategy = SortStrategy::ALL[which];
        let mut options = SortingOptions::new(strategy)
            .empty_lines_between_groups(blank_lines)
            .sort_properties_within_groups(within);
        if strategy == SortStrategy::Custom {
            options = options.property_groups(custom_groups());
        }
        options
    })
}

fn counts<'a>(items: impl Iterator<Item = &'a String>) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.as_str()).or_insert(0) += 1;
    }
    counts
}

fn is_variable(token: &str) -> bool {
    is_css_variable(token) || is_sass_variable(token)
}

proptest! {
    #[test]
    fn sorting_is_idempotent(input in tokens(), options in sorting_options()) {
        let once = sort_properties(&input, &options).unwrap();
        let twice = sort_properties(&once, &options).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorting_never_loses_or_invents(input in tokens(), options in sorting_options()) {
        let sorted = sort_properties(&input, &options).unwrap();
        let expected = counts(input.iter());
        let actual = counts(sorted.iter().filter(|token| !is_blank(token)));
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn variables_precede_properties(input in tokens(), options in sorting_options()) {
        let sorted = sort_properties(&input, &options).unwrap();
        let last_variable = sorted.iter().rposition(|token| is_variable(token));
        let first_regular = sorted
            .iter()
            .position(|token| !is_blank(token) && !is_variable(token));

        if let (Some(last_variable), Some(first_regular)) = (last_variable, first_regular) {
            prop_assert!(last_variable < first_regular);
            prop_assert_eq!(first_regular - last_variable, 2);
            prop_assert!(is_blank(&sorted[last_variable + 1]));
        }
    }

    #[test]
    fn variables_are_sorted(input in tokens(), options in sorting_options()) {
        let sorted = sort_properties(&input, &options).unwrap();
        let css: Vec<&String> = sorted.iter().filter(|token| is_css_variable(token)).collect();
        let sass: Vec<&String> = sorted.iter().filter(|token| is_sass_variable(token)).collect();
        prop_assert!(css.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert!(sass.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn no_blank_at_either_end(input in tokens(), options in sorting_options()) {
        let sorted = sort_properties(&input, &options).unwrap();
        if let (Some(first), Some(last)) = (sorted.first(), sorted.last()) {
            prop_assert!(!is_blank(first));
            prop_assert!(!is_blank(last));
        }
        prop_assert!(sorted.windows(2).all(|pair| !(is_blank(&pair[0]) && is_blank(&pair[1]))));
    }

    #[test]
    fn vendor_variants_are_contiguous(input in tokens()) {
        let sorted = sort_properties(&input, &SortingOptions::new(SortStrategy::Alphabetical)).unwrap();
        let regular: Vec<&String> = sorted
            .iter()
            .filter(|token| !is_blank(token) && !is_variable(token))
            .collect();

        let mut seen: Vec<String> = Vec::new();
        for token in &regular {
            let base = canonical_name(token);
            if seen.last() != Some(&base) {
                prop_assert!(!seen.contains(&base), "'{}' is split in {:?}", base, regular);
                seen.push(base);
            }
        }
    }

    #[test]
    fn group_order_is_monotonic(input in tokens(), within in any::<bool>()) {
        let groups = custom_groups();
        let options = SortingOptions::new(SortStrategy::Custom)
            .property_groups(groups.clone())
            .sort_properties_within_groups(within);
        let sorted = sort_properties(&input, &options).unwrap();

        let ranks: Vec<usize> = sorted
            .iter()
            .filter(|token| !is_blank(token) && !is_variable(token))
            .map(|token| groups.group_of(&canonical_name(token)).unwrap_or(groups.len()))
            .collect();
        prop_assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn concentric_order_is_monotonic(input in tokens()) {
        let sorted = sort_properties(&input, &SortingOptions::new(SortStrategy::Concentric)).unwrap();
        let ranks: Vec<usize> = sorted
            .iter()
            .filter(|token| !is_blank(token) && !is_variable(token))
            .map(|token| concentric_position(&canonical_name(token)).unwrap_or(usize::MAX))
            .collect();
        prop_assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
