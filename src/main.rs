use probe_refiner::{HypoProbeMatrix, IdentityUpdate, RefineOptions, Refiner};

fn main() {
    // Demo stub: two hypotheses over two unobserved probe locations
    let scores = HypoProbeMatrix::from_rows(2, 2, &[1.0, 1.0, 1.0, 3.0])
        .expect("literal matrix is valid");
    let probes = vec![0usize, 1];

    let refiner = Refiner::new(RefineOptions {
        power: 1.0,
        ..Default::default()
    });
    match refiner.refine(&scores, &probes, &mut IdentityUpdate) {
        Ok(res) => println!(
            "converged={} iterations={} matrix={:?}",
            res.converged,
            res.iterations,
            res.matrix.as_inner().as_slice()
        ),
        Err(err) => eprintln!("refinement failed: {err}"),
    }
}
