use crate::{Ray, Vector3};

pub trait Raycast {
    fn raycast(&self, ray: &Ray) -> RaycastResult;
}

/// Where a ray struck a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub point: Vector3,
    /// Outward unit normal at `point`.
    pub normal: Vector3,
    /// Parametric distance: `ray.at(distance) == point`.
    pub distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaycastResult {
    Miss,
    Hit(Record),
}

impl RaycastResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, RaycastResult::Hit(_))
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            RaycastResult::Hit(record) => Some(record),
            RaycastResult::Miss => None,
        }
    }
}

impl From<RaycastResult> for Option<Record> {
    fn from(result: RaycastResult) -> Self {
        match result {
            RaycastResult::Hit(record) => Some(record),
            RaycastResult::Miss => None,
        }
    }
}

impl From<Option<Record>> for RaycastResult {
    fn from(record: Option<Record>) -> Self {
        record.map_or(RaycastResult::Miss, RaycastResult::Hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_accessors() {
        let record = Record {
            point: Vector3::X,
            normal: Vector3::X,
            distance: 3.0,
        };
        let hit = RaycastResult::Hit(record);
        assert!(hit.is_hit());
        assert_eq!(hit.record(), Some(&record));
        assert_eq!(Option::<Record>::from(hit), Some(record));

        assert!(!RaycastResult::Miss.is_hit());
        assert_eq!(RaycastResult::Miss.record(), None);
        assert_eq!(RaycastResult::from(None), RaycastResult::Miss);
        assert_eq!(RaycastResult::from(Some(record)), hit);
    }
}
