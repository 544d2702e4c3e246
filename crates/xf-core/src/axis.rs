//! Axis identifiers and axis sets

use bitflags::bitflags;
use glam::Vec3;

/// A single spatial axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in display order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Read this axis' component of a vector
    pub fn get(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Return a copy of `v` with this axis' component replaced
    pub fn with(self, mut v: Vec3, value: f32) -> Vec3 {
        v[self.index()] = value;
        v
    }
}

bitflags! {
    /// Set of axes, used both for "differs across selection" and
    /// "edited this frame"
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AxisMask: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
    }
}

impl AxisMask {
    pub fn contains_axis(self, axis: Axis) -> bool {
        self.contains(axis.into())
    }

    pub fn insert_axis(&mut self, axis: Axis) {
        self.insert(axis.into());
    }

    /// Iterate over the axes in the set, in X, Y, Z order
    pub fn axes(self) -> impl Iterator<Item = Axis> {
        Axis::ALL
            .into_iter()
            .filter(move |axis| self.contains_axis(*axis))
    }
}

impl From<Axis> for AxisMask {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => AxisMask::X,
            Axis::Y => AxisMask::Y,
            Axis::Z => AxisMask::Z,
        }
    }
}

impl FromIterator<Axis> for AxisMask {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AxisMask::empty(), |mask, axis| mask | axis.into())
    }
}

/// A displayed numeric component (X/Y/Z, plus W for quaternions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    X,
    Y,
    Z,
    W,
}

impl Component {
    /// Quaternion components in display order
    pub const QUATERNION: [Component; 4] =
        [Component::X, Component::Y, Component::Z, Component::W];

    pub fn label(self) -> &'static str {
        match self {
            Component::X => "X",
            Component::Y => "Y",
            Component::Z => "Z",
            Component::W => "W",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Component::X => 0,
            Component::Y => 1,
            Component::Z => 2,
            Component::W => 3,
        }
    }

    /// The spatial axis, if this is not the quaternion W component
    pub fn axis(self) -> Option<Axis> {
        match self {
            Component::X => Some(Axis::X),
            Component::Y => Some(Axis::Y),
            Component::Z => Some(Axis::Z),
            Component::W => None,
        }
    }
}

impl From<Axis> for Component {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Component::X,
            Axis::Y => Component::Y,
            Axis::Z => Component::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_membership() {
        let mut mask = AxisMask::empty();
        assert!(mask.is_empty());

        mask.insert_axis(Axis::Y);
        assert!(mask.contains_axis(Axis::Y));
        assert!(!mask.contains_axis(Axis::X));
        assert!(!mask.is_empty());
    }

    #[test]
    fn test_mask_union() {
        let mask = AxisMask::from(Axis::X) | AxisMask::from(Axis::Z);
        assert_eq!(mask.axes().collect::<Vec<_>>(), vec![Axis::X, Axis::Z]);
        assert!((mask | AxisMask::Y).is_all());
    }

    #[test]
    fn test_mask_from_iter() {
        let mask: AxisMask = [Axis::Z, Axis::X, Axis::Z].into_iter().collect();
        assert_eq!(mask, AxisMask::X | AxisMask::Z);
    }

    #[test]
    fn test_axis_with() {
        let v = Axis::Y.with(Vec3::new(1.0, 2.0, 3.0), 9.0);
        assert_eq!(v, Vec3::new(1.0, 9.0, 3.0));
        assert_eq!(Axis::Z.get(v), 3.0);
    }
}
