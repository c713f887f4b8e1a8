use crate::*;

/// The immutable dataset handed to the clustering core.
///
/// Construction via [`TryFrom`] checks the invariants every other
/// component relies on: at least one point, at least one coordinate,
/// and a single shared dimension `d` across all points.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSet {
    points: Vec<Vector>,
    d: usize,
}

impl VectorSet {
    /// Number of points.
    pub fn n(&self) -> usize {
        self.points.len()
    }
    /// Shared dimension of every point.
    pub fn d(&self) -> usize {
        self.d
    }
    pub fn point(&self, i: usize) -> &Vector {
        &self.points[i]
    }
    pub fn points(&self) -> &[Vector] {
        &self.points
    }
    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.points.iter()
    }
}

impl TryFrom<Vec<Vector>> for VectorSet {
    type Error = Error;
    fn try_from(points: Vec<Vector>) -> Result<Self, Error> {
        let d = points
            .first()
            .map(Vector::dimension)
            .ok_or(Error::EmptyDataset)?;
        if d == 0 {
            return Err(Error::Malformed("points have no coordinates".into()));
        }
        if let Some(i) = points.iter().position(|p| p.dimension() != d) {
            return Err(Error::Malformed(format!(
                "point {} has {} coordinates, expected {}",
                i,
                points[i].dimension(),
                d
            )));
        }
        Ok(Self { points, d })
    }
}

impl TryFrom<Vec<Vec<Energy>>> for VectorSet {
    type Error = Error;
    fn try_from(rows: Vec<Vec<Energy>>) -> Result<Self, Error> {
        Self::try_from(rows.into_iter().map(Vector::from).collect::<Vec<_>>())
    }
}
