//! Capitalization variants offered as app-name suggestions.

/// Suggested app names for `domain`, in prompt order: capitalized, lowercase,
/// uppercase, title case.
///
/// Duplicates are kept (capitalized and title case match for a single word).
/// An empty domain yields no suggestions.
pub fn name_variants(domain: &str) -> Vec<String> {
    if domain.is_empty() {
        return Vec::new();
    }
    vec![
        capitalize(domain),
        domain.to_lowercase(),
        domain.to_uppercase(),
        title_case(domain),
    ]
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Every run of letters starts uppercase and continues lowercase.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_single_word() {
        assert_eq!(
            name_variants("lichess"),
            vec!["Lichess", "lichess", "LICHESS", "Lichess"]
        );
    }

    #[test]
    fn variants_empty() {
        assert!(name_variants("").is_empty());
    }

    #[test]
    fn title_case_differs_from_capitalize_on_separators() {
        assert_eq!(
            name_variants("my-site"),
            vec!["My-site", "my-site", "MY-SITE", "My-Site"]
        );
    }

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("gITHUB"), "Github");
        assert_eq!(capitalize(""), "");
    }
}
