//! Node layout algorithms for drawing flow graphs.

use rand::Rng;
use weft_core::FlowGraph;

/// Places `n` nodes evenly on the unit circle.
#[must_use]
pub fn circular(n: usize) -> Vec<[f64; 2]> {
    let step = std::f64::consts::TAU / n.max(1) as f64;

    (0..n)
        .map(|i| {
            let angle = step * i as f64;
            [angle.cos(), angle.sin()]
        })
        .collect()
}

/// Force-directed layout in the Fruchterman–Reingold style.
///
/// Nodes start at random positions drawn from the provided rng, so a
/// seeded rng gives a reproducible layout. Edge weights are ignored;
/// only the connection structure shapes the result.
#[must_use]
pub fn spring<R: Rng + ?Sized>(graph: &FlowGraph, rng: &mut R) -> Vec<[f64; 2]> {
    const ITERS: usize = 50;

    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let k = (1.0 / n as f64).sqrt();
    let mut positions: Vec<[f64; 2]> = (0..n)
        .map(|_| [rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5])
        .collect();
    let edges: Vec<(usize, usize)> = graph.edges().map(|(from, to, _)| (from, to)).collect();

    let mut temperature = 0.1;
    let cooling = temperature / ITERS as f64;

    for _ in 0..ITERS {
        let mut disp = vec![[0.0f64; 2]; n];

        // Every node pair repels.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i][0] - positions[j][0];
                let dy = positions[i][1] - positions[j][1];
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i][0] += fx;
                disp[i][1] += fy;
                disp[j][0] -= fx;
                disp[j][1] -= fy;
            }
        }

        // Connected nodes attract.
        for &(a, b) in &edges {
            if a == b {
                continue;
            }
            let dx = positions[a][0] - positions[b][0];
            let dy = positions[a][1] - positions[b][1];
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[a][0] -= fx;
            disp[a][1] -= fy;
            disp[b][0] += fx;
            disp[b][1] += fy;
        }

        // Displacement is capped by the cooling temperature.
        for (pos, d) in positions.iter_mut().zip(&disp) {
            let len = (d[0] * d[0] + d[1] * d[1]).sqrt().max(1e-9);
            let step = len.min(temperature);
            pos[0] += d[0] / len * step;
            pos[1] += d[1] / len * step;
        }

        temperature -= cooling;
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use weft_core::FlowMatrix;

    #[test]
    fn circular_layout_sits_on_the_unit_circle() {
        let positions = circular(6);

        assert_eq!(positions.len(), 6);
        for [x, y] in positions {
            assert_relative_eq!(x * x + y * y, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn circular_layout_of_nothing_is_empty() {
        assert!(circular(0).is_empty());
    }

    #[test]
    fn spring_layout_places_every_node() {
        let matrix = FlowMatrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 2.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let graph = FlowGraph::from_matrix(&matrix);

        let positions = spring(&graph, &mut StdRng::seed_from_u64(5));

        assert_eq!(positions.len(), 3);
        for [x, y] in positions {
            assert!(x.is_finite() && y.is_finite());
        }
    }

    #[test]
    fn spring_layout_is_reproducible_with_a_seed() {
        let matrix = FlowMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let graph = FlowGraph::from_matrix(&matrix);

        let first = spring(&graph, &mut StdRng::seed_from_u64(9));
        let second = spring(&graph, &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
    }
}
