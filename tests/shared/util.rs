use rand::Rng;

/// A random integer system with a known integer solution.
///
/// Off-diagonal entries are small integers and each diagonal entry exceeds
/// the sum of magnitudes in its row, so the system is comfortably regular.
pub fn diagonally_dominant<R: Rng>(rng: &mut R, n: usize) -> (Vec<Vec<f64>>, Vec<f64>, Vec<f64>) {
    let mut matrix = vec![vec![0.0; n]; n];
    for r in 0..n {
        let mut off_diagonal = 0.0;
        for c in (0..n).filter(|&c| c != r) {
            let value = rng.gen_range(-5, 6) as f64;
            matrix[r][c] = value;
            off_diagonal += value.abs();
        }
        let sign = if rng.gen() { 1.0 } else { -1.0 };
        matrix[r][r] = sign * (off_diagonal + rng.gen_range(1, 5) as f64);
    }

    let solution: Vec<f64> = (0..n).map(|_| rng.gen_range(-9, 10) as f64).collect();
    let vector = matrix.iter()
        .map(|row| row.iter().zip(&solution).map(|(a, x)| a * x).sum())
        .collect();
    (matrix, vector, solution)
}
