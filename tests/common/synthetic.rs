use probe_refiner::HypoProbeMatrix;

/// Builds a peaked score matrix: hypothesis `i` strongly favors probe
/// `i % nprobe`, everything else gets a flat background score.
pub fn peaked_matrix(nhypo: usize, nprobe: usize, peak: f64) -> HypoProbeMatrix {
    assert!(nhypo > 0 && nprobe > 0, "matrix dimensions must be positive");
    assert!(peak > 1.0, "peak must dominate the background");

    let mut entries = vec![1.0f64; nhypo * nprobe];
    for i in 0..nhypo {
        entries[i * nprobe + (i % nprobe)] = peak;
    }
    HypoProbeMatrix::from_rows(nhypo, nprobe, &entries).expect("synthetic matrix is valid")
}
