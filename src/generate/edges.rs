use rand::Rng;

/// Enumerates `left x right` in left-major order and keeps each pair whose
/// uniform draw in `[0, 1)` is `<= prob`.
pub fn synthesize_edges<R: Rng + ?Sized>(
    left: &[String],
    right: &[String],
    prob: f64,
    rng: &mut R,
) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for l in left {
        for r in right {
            if rng.random::<f64>() <= prob {
                pairs.push((l.clone(), r.clone()));
            }
        }
    }
    pairs
}
