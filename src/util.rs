/// Puts the two endpoints of an undirected edge in ascending order, so that
/// `(u, v)` and `(v, u)` give the same key.
pub fn edge_key<K: Ord>(u: K, v: K) -> (K, K) {
    if v < u { (v, u) } else { (u, v) }
}

#[cfg(test)]
#[test]
fn test_edge_key() {
    assert_eq!(edge_key(3, 1), (1, 3));
    assert_eq!(edge_key(1, 3), (1, 3));
    assert_eq!(edge_key('b', 'b'), ('b', 'b'));
}
