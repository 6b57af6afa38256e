//! Shared fixtures for unit tests.

use crate::cost::CostMatrix;
use crate::tour::Tour;

fn matrix(rows: &[&[f64]]) -> CostMatrix {
    CostMatrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Every Hamiltonian cycle costs 14, so reaching 14 only checks that a
/// solver returns a consistent tour. Use [`five_city`] for optimality.
pub(crate) fn four_city() -> CostMatrix {
    matrix(&[
        &[0.0, 1.0, 2.0, 3.0],
        &[1.0, 0.0, 4.0, 5.0],
        &[2.0, 4.0, 0.0, 6.0],
        &[3.0, 5.0, 6.0, 0.0],
    ])
}

/// Symmetric; tour costs range from 19 (optimum) to 29.
pub(crate) fn five_city() -> CostMatrix {
    matrix(&[
        &[0.0, 3.0, 4.0, 2.0, 7.0],
        &[3.0, 0.0, 4.0, 6.0, 3.0],
        &[4.0, 4.0, 0.0, 5.0, 8.0],
        &[2.0, 6.0, 5.0, 0.0, 6.0],
        &[7.0, 3.0, 8.0, 6.0, 0.0],
    ])
}

/// Asymmetric: 0->1->2->0 costs 6, 0->2->1->0 costs 24.
pub(crate) fn three_city_asymmetric() -> CostMatrix {
    matrix(&[&[0.0, 1.0, 9.0], &[7.0, 0.0, 2.0], &[3.0, 8.0, 0.0]])
}

/// Ten-city asymmetric reference instance.
pub(crate) fn ten_city() -> CostMatrix {
    matrix(&[
        &[0.0, 2.0, 7.0, 15.0, 2.0, 5.0, 7.0, 6.0, 6.0, 5.0],
        &[2.0, 0.0, 10.0, 4.0, 7.0, 3.0, 7.0, 15.0, 8.0, 2.0],
        &[2.0, 10.0, 0.0, 1.0, 4.0, 3.0, 3.0, 4.0, 2.0, 3.0],
        &[7.0, 4.0, 1.0, 0.0, 2.0, 15.0, 7.0, 7.0, 5.0, 4.0],
        &[7.0, 10.0, 4.0, 2.0, 0.0, 7.0, 3.0, 2.0, 2.0, 7.0],
        &[2.0, 3.0, 3.0, 7.0, 7.0, 0.0, 1.0, 7.0, 2.0, 10.0],
        &[5.0, 7.0, 3.0, 7.0, 3.0, 1.0, 0.0, 2.0, 1.0, 3.0],
        &[7.0, 7.0, 4.0, 7.0, 2.0, 7.0, 2.0, 0.0, 1.0, 10.0],
        &[6.0, 8.0, 2.0, 5.0, 2.0, 2.0, 1.0, 1.0, 0.0, 15.0],
        &[5.0, 2.0, 3.0, 4.0, 7.0, 10.0, 3.0, 10.0, 15.0, 0.0],
    ])
}

/// Exact optimum by enumerating every tour that starts at location 0.
pub(crate) fn brute_force_optimum(model: &CostMatrix) -> f64 {
    fn extend(model: &CostMatrix, prefix: &mut Vec<usize>, used: &mut [bool], best: &mut f64) {
        let n = model.size();
        if prefix.len() == n {
            let cost = model.total_cost(prefix.as_slice()).unwrap();
            if cost < *best {
                *best = cost;
            }
            return;
        }
        for next in 1..n {
            if !used[next] {
                used[next] = true;
                prefix.push(next);
                extend(model, prefix, used, best);
                prefix.pop();
                used[next] = false;
            }
        }
    }

    let n = model.size();
    let mut used = vec![false; n];
    used[0] = true;
    let mut best = f64::INFINITY;
    extend(model, &mut vec![0], &mut used, &mut best);
    best
}

pub(crate) fn assert_valid(model: &CostMatrix, tour: &Tour, cost: f64) {
    let actual = model.total_cost(tour.as_slice()).unwrap();
    assert!(
        (actual - cost).abs() < 1e-9,
        "reported cost {cost} disagrees with tour cost {actual}"
    );
}
