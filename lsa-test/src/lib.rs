//! Test inputs and reference oracles shared by the aligner tests.
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::min;

use lsa_types::generate::Recipe;
use lsa_types::*;

pub fn test_sequences() -> Vec<(Seq<'static>, Seq<'static>)> {
    vec![
        (b"", b""),
        (b"", b"ACGT"),
        (b"GATTACA", b""),
        (b"A", b"A"),
        (b"A", b"TTGCA"),
        (b"CCAGT", b"G"),
        (b"AC", b"AG"),
        (b"TTGGGTCAATCAGCCAGTTTTTA", b"TTTGAGTGGGTCATCACCGATTTTAT"),
        (b"ACTGACCAGT", b"CCGACAGGA"),
        (b"AGTTTTAT", b"ACCGATTTTTA"),
        (b"CTCTCTTCTCTCTCTA", b"CCTCTCTCTCTCCTCTC"),
        (b"AGTGGGTTGCCTTCATTCCG", b"AGTGGTGTCTTCAGGCCTTCATTCCG"),
        (b"GCACGTCGCCCCCCGCCCGCG", b"GCCCGCCCGCCCGCCCCCGCCCCC"),
        (b"CGCGTGTATCCGTCCACATCGAGCCGCCCTTGTTGCTTTTCGAGCGCTCATTTCCCGCAAGAGTGGCGTGCGGTCACTTTCGCGCAGCAATTAGAGTACTAACGGGTAGACGTGGCTTTCCTCCTCGTCCTGTCAACGCGCATAGGATGTCCTGCAGCAGGCCGCCGCGATTGCCTAAATCAAGGGGTTCCAATGGAGTTTCCATCTGATATCCGCGCTCCGGTTCTGAGTCTAAAGTGGAAATACTCCGAATGGGCCGGTATGAGGTTGGGTCAATCAGCCAGTTTTTA",
         b"CGCTGGGGATGCCTCCACCTTTCGAGTGCCTGTTGGTTCCGACGCTATCATAGTCCCCATGCAAGGAGATGGCTGCGCGTCCTATCGCGCGGCAAATAGAGTCTACGGGGGCGGCTGTCCTCCTCGTCCTGGTCAACGGCCATAGGATTTCCGCGATGGTCGCCCGGATGTGCCTAAACCAAGGCTCCGATGGAGCTGCCTCTGATATCCGCGCTGCCGGTTTCCTGACGTCTGAAAACGTTGGAAAATACCTCCGAATGGGCCCCGTTTGAGTGGGTCATCACCGATTTTAT"),
    ]
}

/// Mismatches cost more in one direction than the other.
pub fn asymmetric_cost_model() -> CostModel {
    CostModel::new(
        7,
        [[0, 3, 11, 5], [20, 0, 4, 9], [1, 16, 0, 2], [13, 6, 30, 0]],
    )
    .unwrap()
}

/// Generate a random sequence of length `n` over `ACGT`.
pub fn random_sequence(n: usize, rng: &mut impl Rng) -> Sequence {
    (0..n).map(|_| ALPHABET[rng.gen_range(0..4)]).collect()
}

/// Given a sequence, generate a sequence with `e` random substitutions,
/// insertions and deletions.
pub fn random_mutate(a: Seq, e: usize, rng: &mut impl Rng) -> Sequence {
    let mut b = a.to_vec();
    for _ in 0..e {
        let pos = rng.gen_range(0..=b.len());
        match rng.gen_range(0..3) {
            0 if pos < b.len() => b[pos] = ALPHABET[rng.gen_range(0..4)],
            1 if pos < b.len() => {
                b.remove(pos);
            }
            _ => b.insert(pos, ALPHABET[rng.gen_range(0..4)]),
        }
    }
    b
}

/// Random pairs for every combination of length and error rate.
pub fn gen_seqs() -> impl Iterator<Item = ((Sequence, Sequence), (usize, f32, u64))> {
    let ns = [
        0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 16, 20, 31, 32, 33, 50, 64, 100, 127,
        200, 300,
    ];
    let es = [0.0f32, 0.01, 0.05, 0.10, 0.20, 0.50, 1.0];
    let seeds = [31415u64, 2718];
    ns.into_iter()
        .cartesian_product(es)
        .cartesian_product(seeds)
        .map(|((n, e), seed)| {
            let rng = &mut ChaCha8Rng::seed_from_u64(seed ^ ((n as u64) << 8));
            let a = random_sequence(n, rng);
            let b = random_mutate(&a, (n as f32 * e).ceil() as usize, rng);
            ((a, b), (n, e, seed))
        })
}

/// A random recipe: a short base and valid insertion indices.
pub fn random_recipe(max_base: usize, max_indices: usize, rng: &mut impl Rng) -> Recipe {
    let base = random_sequence(rng.gen_range(1..=max_base), rng);
    let mut len = base.len();
    let indices = (0..rng.gen_range(0..=max_indices))
        .map(|_| {
            let i = rng.gen_range(0..len);
            len *= 2;
            i
        })
        .collect();
    Recipe { base, indices }
}

/// Pairs expanded from random recipes, as read by the binary.
pub fn gen_doubled(cnt: usize, seed: u64) -> Vec<(Sequence, Sequence)> {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    (0..cnt)
        .map(|_| {
            let a = random_recipe(6, 4, rng).expand().unwrap();
            let b = random_recipe(6, 4, rng).expand().unwrap();
            (a, b)
        })
        .collect()
}

/// The textbook full-table DP, independent of the aligners under test.
pub fn reference_cost(cm: &CostModel, a: Seq, b: Seq) -> Cost {
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        dp[i][0] = dp[i - 1][0] + cm.gap();
    }
    for j in 1..=b.len() {
        dp[0][j] = dp[0][j - 1] + cm.gap();
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let diag = dp[i - 1][j - 1] + cm.cost(a[i - 1], b[j - 1]).unwrap();
            let up = dp[i - 1][j] + cm.gap();
            let left = dp[i][j - 1] + cm.gap();
            dp[i][j] = min(diag, min(up, left));
        }
    }
    dp[a.len()][b.len()]
}

/// Minimum over all alignments, by exhaustive recursion. Exponential time.
pub fn brute_force_cost(cm: &CostModel, a: Seq, b: Seq) -> Cost {
    match (a.split_first(), b.split_first()) {
        (None, None) => 0,
        (Some((_, ra)), None) => cm.gap() + brute_force_cost(cm, ra, b),
        (None, Some((_, rb))) => cm.gap() + brute_force_cost(cm, a, rb),
        (Some((&ca, ra)), Some((&cb, rb))) => min(
            cm.sub(ca, cb) + brute_force_cost(cm, ra, rb),
            min(
                cm.gap() + brute_force_cost(cm, ra, b),
                cm.gap() + brute_force_cost(cm, a, rb),
            ),
        ),
    }
}

/// Every alignment of `a` and `b`. Exponential size.
pub fn all_alignments(a: Seq, b: Seq) -> Vec<Alignment> {
    let (ca, cb) = match (a.split_last(), b.split_last()) {
        (None, None) => return vec![Alignment::default()],
        (ca, cb) => (ca, cb),
    };
    let mut out = vec![];
    let mut extend = |prefixes: Vec<Alignment>, x: u8, y: u8| {
        for mut aln in prefixes {
            aln.push(x, y);
            out.push(aln);
        }
    };
    if let (Some((&x, ra)), Some((&y, rb))) = (ca, cb) {
        extend(all_alignments(ra, rb), x, y);
    }
    if let Some((&x, ra)) = ca {
        extend(all_alignments(ra, b), x, GAP);
    }
    if let Some((&y, rb)) = cb {
        extend(all_alignments(a, rb), GAP, y);
    }
    out
}

/// Best placement of the single character `x` against `b`: either `x` is
/// aligned to one `b[j]` and the rest of `b` to gaps, or everything is a gap.
pub fn single_symbol_cost(cm: &CostModel, x: u8, b: Seq) -> Cost {
    let all_gaps = cm.gaps(b.len() + 1);
    b.iter()
        .map(|&cb| cm.sub(x, cb) + cm.gaps(b.len() - 1))
        .fold(all_gaps, min)
}

pub fn test_aligner_on_input(a: Seq, b: Seq, aligner: &dyn Aligner, params: &str) {
    // Set to true for local debugging.
    const D: bool = false;

    if D {
        eprintln!("{params}\na {}\nb {}", seq_to_string(a), seq_to_string(b));
    }
    let cm = aligner.cost_model();
    let cost = reference_cost(cm, a, b);
    let aligner_cost = aligner.cost(a, b).unwrap();
    assert_eq!(
        cost,
        aligner_cost,
        "\n{params}\nlet a = \"{}\".as_bytes();\nlet b = \"{}\".as_bytes();\nAligner\n{aligner:?}",
        seq_to_string(a),
        seq_to_string(b),
    );
    let AlignmentResult { cost, alignment } = aligner.align(a, b).unwrap();
    assert_eq!(
        cost,
        aligner_cost,
        "\n{params}\nlet a = \"{}\".as_bytes();\nlet b = \"{}\".as_bytes();\naligned\n{}\n{}",
        seq_to_string(a),
        seq_to_string(b),
        seq_to_string(&alignment.a),
        seq_to_string(&alignment.b),
    );
    assert_eq!(alignment.verify(cm, a, b), Ok(cost), "{params}");
}

/// Test the given aligner on the hardcoded, random, and doubled inputs:
/// - The cost reported by `cost` and `align` must match [`reference_cost`].
/// - The returned alignment must be valid and have that cost.
pub fn test_aligner(aligner: &dyn Aligner) {
    test_aligner_up_to(aligner, usize::MAX);
}

/// As test_aligner, but only test sequences with n <= max_n.
pub fn test_aligner_up_to(aligner: &dyn Aligner, max_n: usize) {
    for (a, b) in test_sequences() {
        test_aligner_on_input(
            a,
            b,
            aligner,
            &format!(
                "hardcoded test_sequences: a {:?} b {:?}",
                seq_to_string(a),
                seq_to_string(b)
            ),
        );
    }
    for ((a, b), (n, e, seed)) in gen_seqs() {
        if n > max_n {
            continue;
        }
        test_aligner_on_input(
            &a,
            &b,
            aligner,
            &format!("seed {seed:>10} n {n:>5} e {e:>.2}"),
        );
    }
    for (k, (a, b)) in gen_doubled(20, 570).into_iter().enumerate() {
        if a.len().max(b.len()) > max_n {
            continue;
        }
        test_aligner_on_input(&a, &b, aligner, &format!("doubled pair {k}"));
    }
}
