use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Picks up to `count` distinct non-blank lines of `code` to highlight.
///
/// Returns 1-based line numbers in ascending order. The caller owns the
/// randomness so a seeded generator gives repeatable picks.
pub fn select_hotspots<R: Rng + ?Sized>(code: &str, count: usize, rng: &mut R) -> Vec<usize> {
    let candidates: Vec<usize> = code
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, _)| index + 1)
        .collect();

    let mut picked: Vec<usize> = candidates.choose_multiple(rng, count).copied().collect();
    picked.sort_unstable();
    picked
}

pub fn hotspot_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
