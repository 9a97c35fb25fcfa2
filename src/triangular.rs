/// Calculates the nth triangular number.
///
/// The triangular number T(n) = 1 + 2 + ... + n = n(n+1)/2.
/// This is also the number of edges in a complete graph of n + 1 vertices.
pub fn triangular(n: usize) -> usize {
    (n * (n + 1)) / 2
}

#[cfg(test)]
#[test]
fn test_triangular() {
    // Test some hand-picked values.
    assert_eq!(triangular(0), 0);
    assert_eq!(triangular(1), 1);
    assert_eq!(triangular(2), 3);
    assert_eq!(triangular(3), 6);
    assert_eq!(triangular(4), 10);
    assert_eq!(triangular(10), 55);

    // T(n) counts the cells strictly below the diagonal of an
    // (n + 1) x (n + 1) matrix.
    for n in 0..100 {
        let below_diagonal = (0..=n).flat_map(|i| (0..i).map(move |j| (i, j))).count();
        assert_eq!(triangular(n), below_diagonal);
    }
}
