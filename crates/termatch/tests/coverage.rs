//! End-to-end coverage of the matching pipeline.

use termatch::{
    candidates, delta_e2000, rgb_to_lab, solve, xterm_approx, CostMatrix, MatchError, Rgb,
    CANDIDATE_COUNT,
};

fn distinct(values: &[u8]) -> bool {
    let mut seen = [false; 256];
    values.iter().all(|&v| !std::mem::replace(&mut seen[v as usize], true))
}

// ============================================================================
// Black/white oracle
// ============================================================================

#[test]
fn black_and_white_take_their_exact_palette_entries() {
    let assigned = xterm_approx(&[Rgb(0, 0, 0), Rgb(255, 255, 255)]).unwrap();
    assert_eq!(assigned.len(), 2);
    assert!(distinct(&assigned));

    // Black has an exact twin at cube corner 16, white at cube corner 231.
    assert_eq!(assigned, vec![16, 231]);
    let black_cand = candidates().iter().find(|c| c.index == assigned[0]).unwrap();
    let white_cand = candidates().iter().find(|c| c.index == assigned[1]).unwrap();
    assert_eq!(black_cand.rgb, Rgb(0, 0, 0));
    assert_eq!(white_cand.rgb, Rgb(255, 255, 255));
}

// ============================================================================
// A full base16 scheme
// ============================================================================

#[test]
fn default_dark_scheme_assignment_is_stable() {
    let bases = [
        "181818", "282828", "383838", "585858", "b8b8b8", "d8d8d8", "e8e8e8", "f8f8f8",
        "ab4642", "dc9656", "f7ca88", "a1b56c", "86c1b9", "7cafc2", "ba8baf", "a16946",
    ];
    let colors: Vec<Rgb> = bases.iter().map(|h| Rgb::from_hex(h).unwrap()).collect();

    let assigned = xterm_approx(&colors).unwrap();
    assert_eq!(assigned.len(), 16);
    assert!(distinct(&assigned));
    assert!(assigned.iter().all(|&n| n >= 16));

    // Precomputed oracle for this scheme. Any change here means the metric,
    // the palette enumeration, or the solver drifted.
    assert_eq!(
        assigned,
        vec![234, 235, 237, 240, 250, 188, 254, 231, 131, 215, 222, 107, 116, 74, 139, 130]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let colors = vec![
        Rgb::from_hex("#2e3440").unwrap(),
        Rgb::from_hex("#bf616a").unwrap(),
        Rgb::from_hex("#a3be8c").unwrap(),
        Rgb::from_hex("#ebcb8b").unwrap(),
        Rgb::from_hex("#81a1c1").unwrap(),
    ];
    let first = xterm_approx(&colors).unwrap();
    for _ in 0..5 {
        assert_eq!(xterm_approx(&colors).unwrap(), first);
    }
}

// ============================================================================
// Collision handling
// ============================================================================

#[test]
fn duplicate_inputs_get_distinct_neighbors() {
    // Two identical blacks cannot share color 16; the runner-up is the
    // darkest gray of the ramp.
    let assigned = xterm_approx(&[Rgb(0, 0, 0), Rgb(0, 0, 0)]).unwrap();
    assert_eq!(assigned, vec![16, 232]);
}

#[test]
fn near_identical_inputs_stay_cheap() {
    // A 1-unit channel nudge must not banish either color to a far entry.
    let a = Rgb(100, 150, 200);
    let b = Rgb(101, 150, 200);
    let assigned = xterm_approx(&[a, b]).unwrap();
    assert!(distinct(&assigned));

    for (&color, &number) in [a, b].iter().zip(&assigned) {
        let cand = candidates().iter().find(|c| c.index == number).unwrap();
        let cost = delta_e2000(rgb_to_lab(color), cand.lab);
        assert!(cost < 10.0, "color {:?} paid {} for entry {}", color, cost, number);
    }
}

// ============================================================================
// Degenerate sizes and the failure surface
// ============================================================================

#[test]
fn empty_input_is_valid() {
    assert_eq!(xterm_approx(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn full_capacity_is_satisfiable() {
    // 240 distinct inputs saturate the palette exactly.
    let colors: Vec<Rgb> = candidates().iter().map(|c| c.rgb).collect();
    assert_eq!(colors.len(), CANDIDATE_COUNT);

    let assigned = xterm_approx(&colors).unwrap();
    assert_eq!(assigned.len(), CANDIDATE_COUNT);
    assert!(distinct(&assigned));
    // Every input is an exact palette entry, so the optimum maps each one
    // to itself.
    for (cand, assigned_number) in candidates().iter().zip(&assigned) {
        assert_eq!(cand.index, *assigned_number);
    }
}

#[test]
fn beyond_capacity_reports_dimension_error() {
    // 241 colors cannot receive distinct entries from a 240-color palette.
    let mut colors: Vec<Rgb> = candidates().iter().map(|c| c.rgb).collect();
    colors.push(Rgb(1, 1, 1));

    let err = xterm_approx(&colors).unwrap_err();
    assert!(matches!(
        err,
        MatchError::TooManyColors {
            inputs: 241,
            candidates: 240
        }
    ));
}

// ============================================================================
// Solver against hand-checked optima
// ============================================================================

#[test]
fn solver_beats_greedy_on_a_contended_matrix() {
    // Greedy row-by-row would give row 0 its favorite column 0 (cost 1)
    // and leave row 1 paying 100; the optimum swaps them.
    let matrix = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 100.0]]);
    let assignment = solve(&matrix).unwrap();
    assert_eq!(assignment, vec![1, 0]);
}

#[test]
fn solver_total_matches_exhaustive_minimum() {
    let rows = vec![
        vec![7.0, 5.3, 9.1, 4.4],
        vec![3.2, 8.0, 6.5, 2.9],
        vec![5.5, 1.1, 4.8, 7.7],
    ];
    let matrix = CostMatrix::from_rows(rows.clone());
    let assignment = solve(&matrix).unwrap();
    let total: f64 = assignment
        .iter()
        .enumerate()
        .map(|(row, &col)| rows[row][col])
        .sum();

    let best = exhaustive_minimum(&rows);
    assert!((total - best).abs() < 1e-9);
}

/// Minimum total cost over every injective row-to-column mapping.
fn exhaustive_minimum(rows: &[Vec<f64>]) -> f64 {
    fn recurse(rows: &[Vec<f64>], row: usize, used: &mut Vec<bool>) -> f64 {
        if row == rows.len() {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for col in 0..rows[row].len() {
            if used[col] {
                continue;
            }
            used[col] = true;
            let total = rows[row][col] + recurse(rows, row + 1, used);
            used[col] = false;
            best = best.min(total);
        }
        best
    }
    recurse(rows, 0, &mut vec![false; rows[0].len()])
}
