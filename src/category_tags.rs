//! # Category Tags Module
//!
//! Signals read from the category tags of a product: whether it is a pack of
//! whole eggs, the weight class of its eggs, and its declared pack size.

use crate::quantity_patterns::PACK_SIZE_REGEX;
use log::trace;

/// Per-egg weight classes in precedence order, heaviest first
pub const EGG_WEIGHT_CLASSES: [(u32, &[&str]); 3] = [
    (60, &["large-eggs", "gros-oeufs"]),
    (55, &["grade-a-eggs", "grade-aa-eggs"]),
    (50, &["medium-eggs"]),
];

/// Check whether the tags mark the product as a pack of whole eggs
///
/// Absent tags never make an egg pack.
///
/// # Examples
///
/// ```rust
/// use egg_count::category_tags::is_egg_pack;
///
/// let tags = vec!["en:chicken-eggs".to_string()];
/// assert!(is_egg_pack(Some(tags.as_slice()), "en:chicken-eggs"));
/// assert!(!is_egg_pack::<String>(None, "en:chicken-eggs"));
/// ```
pub fn is_egg_pack<S: AsRef<str>>(tags: Option<&[S]>, egg_pack_tag: &str) -> bool {
    tags.is_some_and(|tags| tags.iter().any(|tag| tag.as_ref() == egg_pack_tag))
}

/// Weight of one egg implied by the tags, or 0 when no class matches
///
/// When tags from several classes are present the heaviest class wins.
pub fn weight_per_egg<S: AsRef<str>>(tags: &[S]) -> u32 {
    EGG_WEIGHT_CLASSES
        .iter()
        .find(|(_, class_tags)| {
            tags.iter()
                .any(|tag| class_tags.contains(&tag.as_ref()))
        })
        .map(|(weight, _)| *weight)
        .unwrap_or(0)
}

/// Number of eggs declared by the first `pack-of-N` tag, or 0
pub fn pack_size<S: AsRef<str>>(tags: &[S]) -> u64 {
    for tag in tags {
        let Some(captures) = PACK_SIZE_REGEX.captures(tag.as_ref()) else {
            continue;
        };
        match captures[1].parse::<u64>() {
            Ok(size) => {
                trace!("Pack size {} from tag '{}'", size, tag.as_ref());
                return size;
            }
            Err(_) => trace!("Pack size out of range in tag '{}'", tag.as_ref()),
        }
    }
    0
}

/// Total egg weight implied by the tags; 0 means no signal
///
/// # Examples
///
/// ```rust
/// use egg_count::category_tags::total_weight_from_tags;
///
/// assert_eq!(total_weight_from_tags(&["large-eggs", "pack-of-6"]), 360.0);
/// assert_eq!(total_weight_from_tags(&["pack-of-6"]), 0.0);
/// ```
pub fn total_weight_from_tags<S: AsRef<str>>(tags: &[S]) -> f64 {
    f64::from(weight_per_egg(tags)) * pack_size(tags) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_egg_pack() {
        let tags = vec!["en:eggs".to_string(), "en:chicken-eggs".to_string()];
        assert!(is_egg_pack(Some(tags.as_slice()), "en:chicken-eggs"));

        let ovo = vec!["en:egg-yolks".to_string()];
        assert!(!is_egg_pack(Some(ovo.as_slice()), "en:chicken-eggs"));

        let empty: Vec<String> = Vec::new();
        assert!(!is_egg_pack(Some(empty.as_slice()), "en:chicken-eggs"));
        assert!(!is_egg_pack::<String>(None, "en:chicken-eggs"));
    }

    #[test]
    fn test_weight_per_egg_classes() {
        assert_eq!(weight_per_egg(&["gros-oeufs"]), 60);
        assert_eq!(weight_per_egg(&["grade-aa-eggs"]), 55);
        assert_eq!(weight_per_egg(&["medium-eggs"]), 50);
        assert_eq!(weight_per_egg(&["en:chicken-eggs"]), 0);
        assert_eq!(weight_per_egg::<&str>(&[]), 0);
    }

    #[test]
    fn test_weight_per_egg_heaviest_class_wins() {
        assert_eq!(weight_per_egg(&["medium-eggs", "large-eggs"]), 60);
        assert_eq!(weight_per_egg(&["medium-eggs", "grade-a-eggs"]), 55);
    }

    #[test]
    fn test_weight_classes_match_exact_tags() {
        assert_eq!(weight_per_egg(&["en:large-eggs"]), 0);
    }

    #[test]
    fn test_pack_size_first_match_wins() {
        assert_eq!(pack_size(&["en:eggs", "pack-of-6", "pack-of-12"]), 6);
        assert_eq!(pack_size(&["en:pack-of-10-eggs"]), 10);
        assert_eq!(pack_size(&["en:eggs"]), 0);
    }

    #[test]
    fn test_pack_size_skips_oversized_numbers() {
        assert_eq!(
            pack_size(&["pack-of-99999999999999999999999", "pack-of-4"]),
            4
        );
    }

    #[test]
    fn test_total_weight_sentinel() {
        assert_eq!(total_weight_from_tags(&["large-eggs"]), 0.0);
        assert_eq!(total_weight_from_tags(&["en:chicken-eggs", "organic"]), 0.0);
        assert_eq!(total_weight_from_tags(&["grade-a-eggs", "pack-of-12"]), 660.0);
    }
}
