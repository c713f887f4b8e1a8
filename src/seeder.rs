use crate::*;

/// K-means++ initialization.
///
/// The first centroid is drawn uniformly. Every later centroid is drawn
/// with probability proportional to each point's potential: its squared
/// distance to the nearest centroid chosen so far. Chosen points (and
/// their duplicates) have zero potential and cannot be drawn again.
///
/// If every potential is zero, which only happens when the dataset has
/// fewer than `k` distinct points, the draw falls back to uniform over
/// all points. The fallback uses the same sampler, so it is as
/// deterministic as the sampler is.
///
/// Returned centroids are copies of the chosen points.
pub fn seed<S>(points: &VectorSet, k: usize, sampler: &mut S) -> Vec<Vector>
where
    S: Sampler + ?Sized,
{
    assert!(k >= 1 && k <= points.n(), "k out of range");
    let uniform = vec![1.; points.n()];
    let mut potentials = uniform.clone();
    let mut centroids = Vec::with_capacity(k);
    while centroids.len() < k {
        let weights = if potentials.iter().sum::<Energy>() > 0. {
            &potentials
        } else {
            log::debug!("{:<32}{:<32}", "kmeans++ degenerate", "uniform fallback");
            &uniform
        };
        let i = sampler.draw(weights);
        log::trace!("{:<32}{:<32}", "kmeans++ chose", i);
        let x = points.point(i).clone();
        potentials = points
            .iter()
            .map(|p| squared_distance(&x, p))
            .zip(potentials.iter())
            .map(|(d0, d1)| Energy::min(d0, *d1))
            .collect::<Vec<Energy>>();
        potentials[i] = 0.;
        centroids.push(x);
    }
    centroids
}
