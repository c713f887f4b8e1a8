use crate::*;

/// A single point in d-dimensional space.
///
/// Used both for loaded data points and for centroids. Centroids are
/// always owned copies, never views into the dataset, so they stay valid
/// while the dataset is relabelled between iterations.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Vector(Vec<Energy>);

impl Vector {
    /// The origin in `d` dimensions.
    pub fn zeros(d: usize) -> Self {
        Self(vec![0.; d])
    }
    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Energy> {
        self.0.iter()
    }
}

impl From<Vec<Energy>> for Vector {
    fn from(coordinates: Vec<Energy>) -> Self {
        Self(coordinates)
    }
}

impl From<Vector> for Vec<Energy> {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = Energy;
    fn index(&self, i: usize) -> &Energy {
        &self.0[i]
    }
}

/// Comma-separated coordinates at [`KMEANS_PRECISION`] decimal places.
impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let line = self
            .iter()
            .map(|x| format!("{:.*}", KMEANS_PRECISION, x))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}", line)
    }
}
