//! The volume being populated by an importer.

use std::any::Any;

/// A named value set on a [`Volume`] or recorded in a [`Catalog`].
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Three integers, e.g. grid dimensions.
    Vec3i([i32; 3]),
    /// Three floats, e.g. grid spacing or origin.
    Vec3f([f32; 3]),
    /// A string, e.g. a voxel type name.
    Text(String),
    /// Raw voxel data.
    Bytes(Vec<u8>),
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Float(v)
    }
}

impl From<[i32; 3]> for Param {
    fn from(v: [i32; 3]) -> Self {
        Param::Vec3i(v)
    }
}

impl From<[f32; 3]> for Param {
    fn from(v: [f32; 3]) -> Self {
        Param::Vec3f(v)
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Param {
    fn from(v: Vec<u8>) -> Self {
        Param::Bytes(v)
    }
}

/// The target object an importer fills in.
///
/// The dispatcher never looks inside a volume; it only passes it through to
/// the selected importer. Hosts implement this for their own volume type and
/// importers that know the concrete type can reach it with
/// [`downcast_mut`](#method.downcast_mut).
pub trait Volume: Any + Send + 'static {
    /// Set a named parameter.
    fn set(&mut self, name: &str, value: Param);

    /// Read back a named parameter, if the volume keeps them.
    fn get(&self, _name: &str) -> Option<&Param> {
        None
    }
}

impl dyn Volume {
    /// Downcast to the host's concrete volume type.
    pub fn downcast_mut<T: Volume>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }

    /// Downcast to the host's concrete volume type.
    pub fn downcast_ref<T: Volume>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// A volume that keeps its parameters in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamVolume {
    params: Vec<(String, Param)>,
}

impl ParamVolume {
    /// Create an empty volume.
    pub fn new() -> Self {
        Self::default()
    }

    /// All parameters in the order they were first set.
    pub fn params(&self) -> &[(String, Param)] {
        &self.params
    }

    /// Number of distinct parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl Volume for ParamVolume {
    fn set(&mut self, name: &str, value: Param) {
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((name.to_owned(), value)),
        }
    }

    fn get(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_param() {
        let mut volume = ParamVolume::new();
        volume.set("dimensions", [4, 4, 4].into());
        volume.set("voxelType", "uchar".into());
        volume.set("dimensions", [8, 8, 8].into());

        assert_eq!(volume.len(), 2);
        assert_eq!(volume.get("dimensions"), Some(&Param::Vec3i([8, 8, 8])));
        assert_eq!(volume.params()[0].0, "dimensions");
    }

    #[test]
    fn downcast_through_trait_object() {
        let mut volume = ParamVolume::new();
        let dynamic: &mut dyn Volume = &mut volume;
        dynamic.set("spacing", [1.0, 1.0, 2.0].into());

        let concrete = dynamic.downcast_mut::<ParamVolume>().unwrap();
        assert_eq!(concrete.len(), 1);
    }
}
