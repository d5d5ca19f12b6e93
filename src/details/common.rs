use crate::{Hash, HashableChar};
use rustc_hash::FxHashMap;

/// Converts a normalized similarity cutoff into a normalized distance cutoff,
/// with some slack for floating point imprecision
pub(crate) fn norm_sim_to_norm_dist(score_cutoff: f64) -> f64 {
    let imprecision = 0.00001;
    (1.0 - score_cutoff + imprecision).clamp(0.0, 1.0)
}

pub(crate) fn find_common_prefix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .zip(s2.iter())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

pub(crate) fn find_common_suffix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

/// Strips the common prefix and suffix, which never changes a unit cost edit distance
pub(crate) fn remove_common_affix<'a, 'b, Elem1, Elem2>(
    s1: &'a [Elem1],
    s2: &'b [Elem2],
) -> (&'a [Elem1], &'b [Elem2])
where
    Elem1: PartialEq<Elem2>,
{
    let prefix_len = find_common_prefix(s1, s2);
    let s1 = &s1[prefix_len..];
    let s2 = &s2[prefix_len..];

    let suffix_len = find_common_suffix(s1, s2);
    (&s1[..s1.len() - suffix_len], &s2[..s2.len() - suffix_len])
}

/// Character multiset keyed by the element hash
pub(crate) fn count_chars<Iter, Elem>(s: Iter) -> FxHashMap<Hash, usize>
where
    Iter: IntoIterator<Item = Elem>,
    Elem: HashableChar,
{
    let mut counts = FxHashMap::default();
    for ch in s {
        *counts.entry(ch.hash_char()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affix_removal() {
        let s1: Vec<char> = "kitten".chars().collect();
        let s2: Vec<char> = "sitting".chars().collect();
        let (a, b) = remove_common_affix(&s1, &s2);
        assert_eq!(&['k', 'i', 't', 't', 'e', 'n'][..], a);
        assert_eq!(&['s', 'i', 't', 't', 'i', 'n', 'g'][..], b);

        let s1: Vec<char> = "prefix_a_suffix".chars().collect();
        let s2: Vec<char> = "prefix_bc_suffix".chars().collect();
        let (a, b) = remove_common_affix(&s1, &s2);
        assert_eq!(&['a'][..], a);
        assert_eq!(&['b', 'c'][..], b);

        let s1: Vec<u8> = b"same".to_vec();
        let (a, b) = remove_common_affix(&s1, &s1);
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn cutoff_conversion_keeps_slack() {
        assert!(norm_sim_to_norm_dist(0.9) * 10.0 > 1.0);
        assert_eq!(1.0, norm_sim_to_norm_dist(0.0));
        assert_eq!(0.0, norm_sim_to_norm_dist(1.5));
    }

    #[test]
    fn char_and_byte_counts_agree() {
        let by_char = count_chars("aluminum".chars());
        let by_byte = count_chars("aluminum".bytes());
        assert_eq!(by_char, by_byte);
        assert_eq!(Some(&2), by_char.get(&'u'.hash_char()));
    }
}
