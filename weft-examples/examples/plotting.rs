use rand::{rngs::StdRng, SeedableRng};
use weft_core::{Constraint, FlowMatrix, FlowNetwork};
use weft_plot::{layout, GraphPlotApp};
use weft_solve::Penalty;

fn main() {
    let matrix = FlowMatrix::from_rows(vec![
        vec![0.0, 2.0, 1.0],
        vec![0.0, 0.0, 3.0],
        vec![0.0, 0.0, 0.0],
    ])
    .expect("matrix is square");

    let objective = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
    let constraints = vec![Constraint::equality(|x: &[f64]| x[2] + x[5] - 1.0)];

    let mut network = FlowNetwork::new(matrix, objective, constraints);
    let mut rng = StdRng::seed_from_u64(7);
    network.solve(&Penalty::default(), &mut rng).expect("solvable network");

    let solved = network.solved_graph().expect("just solved");
    let positions = layout::spring(&solved, &mut rng);

    GraphPlotApp::with_positions(&solved, positions)
        .figure_size(800.0, 600.0)
        .run("Solved Network")
        .unwrap();
}
