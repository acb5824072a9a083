use rand::{rngs::StdRng, SeedableRng};
use weft_core::{Constraint, FlowMatrix, FlowNetwork};
use weft_solve::Penalty;

fn main() {
    let matrix = FlowMatrix::from_rows(vec![
        vec![0.0, 2.0, 1.0],
        vec![0.0, 0.0, 3.0],
        vec![0.0, 0.0, 0.0],
    ])
    .expect("matrix is square");

    // Cheapest flows that still deliver one unit into node 2, with node 1
    // passing along everything it receives. Flat indices: edge (i, j) is
    // entry i * 3 + j.
    let objective = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
    let constraints = vec![
        Constraint::equality(|x: &[f64]| x[2] + x[5] - 1.0),
        Constraint::equality(|x: &[f64]| x[1] - x[5]),
        Constraint::inequality(|x: &[f64]| x[1]),
        Constraint::inequality(|x: &[f64]| x[2]),
        Constraint::inequality(|x: &[f64]| x[5]),
    ];

    let mut network = FlowNetwork::new(matrix, objective, constraints);
    let mut rng = StdRng::seed_from_u64(42);

    match network.solve(&Penalty::default(), &mut rng) {
        Ok(solved) => {
            println!("solved flows:");
            for from in 0..solved.order() {
                for to in 0..solved.order() {
                    print!("{:>9.4}", solved[(from, to)]);
                }
                println!();
            }
        }
        Err(err) => println!("{err}"),
    }
}
