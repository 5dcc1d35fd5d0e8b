use rand::{Rng, seq::IndexedRandom};

// onboarding hints shown when there is nothing new since the last visit
pub const DEFAULT_TIPS: [&str; 6] = [
    "Use the CMD+K keyboard shortcut to jump to search",
    "Use the CMD+. keyboard shortcut to toggle the sidebar",
    "Type ? to see a list of keyboard shortcuts",
    "You can drag and drop to reorder and move docs in the sidebar",
    "Use templates for a shared starting point for new docs",
    "Archive docs that are out of date, you can still search them",
];

pub fn default_tips() -> Vec<String> {
    DEFAULT_TIPS.iter().map(|s| s.to_string()).collect()
}

// uniform pick from the catalog, falling back to the built-in tips
// when the configured catalog is empty
pub fn sample_tip<R>(catalog: &[String], rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    match catalog.choose(rng) {
        Some(tip) => tip.clone(),
        None => DEFAULT_TIPS
            .choose(rng)
            .map(|s| s.to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn always_from_catalog() {
        let catalog = default_tips();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let tip = sample_tip(&catalog, &mut rng);
            assert!(catalog.contains(&tip), "unexpected tip {tip}");
        }
    }

    #[test]
    fn reaches_every_tip() {
        let catalog = default_tips();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(sample_tip(&catalog, &mut rng));
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn empty_catalog_uses_defaults() {
        let mut rng = StdRng::seed_from_u64(3);
        let tip = sample_tip(&[], &mut rng);
        assert!(DEFAULT_TIPS.contains(&tip.as_str()));
    }

    #[test]
    fn custom_catalog() {
        let catalog = vec![String::from("only one")];
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(sample_tip(&catalog, &mut rng), "only one");
    }
}
