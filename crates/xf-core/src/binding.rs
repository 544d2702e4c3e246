//! Property binding: typed access to the transforms of inspected objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::axis::Component;
use crate::constants::TOLERANCE;
use crate::error::{InspectorError, InspectorResult};
use crate::selection::{ObjectId, Selection};
use crate::transform::{FieldValue, LocalTransform, TransformField};

/// Read/write access to the local transforms of selected objects
///
/// Implemented by the host; [`Scene`] is the in-memory implementation.
pub trait PropertyBinding {
    /// Read an object's local transform
    fn transform(&self, id: ObjectId) -> InspectorResult<LocalTransform>;

    /// Overwrite an object's local transform
    fn set_transform(&mut self, id: ObjectId, transform: LocalTransform) -> InspectorResult<()>;

    /// Write one field to every object in the selection
    ///
    /// All objects are read before the first write, so a missing object
    /// leaves the selection untouched.
    fn write_field(&mut self, selection: &Selection, value: FieldValue) -> InspectorResult<()> {
        let mut updated = Vec::with_capacity(selection.len());
        for id in selection.iter() {
            let mut transform = self.transform(id)?;
            value.apply_to(&mut transform);
            updated.push((id, transform));
        }
        for (id, transform) in updated {
            self.set_transform(id, transform)?;
        }
        Ok(())
    }

    /// Whether one component of a field differs across the selection
    ///
    /// Quaternions are compared in the primary's hemisphere, so `q` and
    /// `-q` never count as different.
    fn values_differ(
        &self,
        selection: &Selection,
        field: TransformField,
        component: Component,
    ) -> InspectorResult<bool> {
        let primary = field.read(&self.transform(selection.primary())?);
        let Some(reference) = primary.component(component) else {
            return Ok(false);
        };
        for id in selection.others() {
            let value = match (primary, field.read(&self.transform(*id)?)) {
                (FieldValue::Rotation(p), FieldValue::Rotation(q)) if p.dot(q) < 0.0 => {
                    FieldValue::Rotation(-q)
                }
                (_, value) => value,
            };
            if let Some(value) = value.component(component)
                && (value - reference).abs() > TOLERANCE
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// A named object with a local transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub transform: LocalTransform,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, transform: LocalTransform) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transform,
        }
    }
}

/// In-memory object store
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    /// Incremented on every transform write
    revision: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its id
    pub fn add(&mut self, name: impl Into<String>, transform: LocalTransform) -> ObjectId {
        let object = SceneObject::new(name, transform);
        let id = object.id;
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    /// Objects in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of transform writes performed so far
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl PropertyBinding for Scene {
    fn transform(&self, id: ObjectId) -> InspectorResult<LocalTransform> {
        self.get(id)
            .map(|o| o.transform)
            .ok_or(InspectorError::ObjectNotFound(id))
    }

    fn set_transform(&mut self, id: ObjectId, transform: LocalTransform) -> InspectorResult<()> {
        let object = self.get_mut(id).ok_or(InspectorError::ObjectNotFound(id))?;
        object.transform = transform;
        self.revision += 1;
        Ok(())
    }
}
