//! Classification dimensions and their objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A classification axis for transactions, like cost centre or project.
///
/// The interchange format reserves dimension numbers 1-19; 20 and upwards
/// are free for custom dimensions. A dimension exclusively owns its
/// objects, keyed by object id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    id: u32,
    objects: BTreeMap<String, DimensionObject>,
}

impl Dimension {
    /// Cost centre / result unit.
    pub const COST_CENTRE: u32 = 1;
    /// Cost bearer, a sub-dimension of the cost centre.
    pub const COST_BEARER: u32 = 2;
    /// Project.
    pub const PROJECT: u32 = 6;
    /// Employee.
    pub const EMPLOYEE: u32 = 7;
    /// Customer.
    pub const CUSTOMER: u32 = 8;
    /// Supplier.
    pub const SUPPLIER: u32 = 9;
    /// Invoice.
    pub const INVOICE: u32 = 10;

    /// Create a dimension with the given id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            objects: BTreeMap::new(),
        }
    }

    /// The dimension id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Add an object to this dimension.
    ///
    /// Fails if an object with the same id is already present; the existing
    /// object is left untouched.
    pub fn add_object(&mut self, object: DimensionObject) -> Result<&mut Self, DomainError> {
        debug_assert_eq!(
            object.dimension(),
            self.id,
            "object belongs to another dimension"
        );
        if self.objects.contains_key(object.id()) {
            return Err(DomainError::DuplicateObject {
                dimension: self.id,
                object: object.id().to_owned(),
            });
        }
        self.objects.insert(object.id().to_owned(), object);
        Ok(self)
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: &str) -> Option<&DimensionObject> {
        self.objects.get(id)
    }

    /// All objects, ascending by object id (lexicographic).
    pub fn objects(&self) -> impl Iterator<Item = &DimensionObject> {
        self.objects.values()
    }
}

/// One concrete value along a dimension, e.g. project "42".
///
/// Carries a back-reference to its owning dimension by id; the dimension
/// owns the object, never the other way around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionObject {
    dimension: u32,
    id: String,
    name: Option<String>,
}

impl DimensionObject {
    /// Create an object for the given dimension.
    ///
    /// The object id must not be empty.
    pub fn new(dimension: u32, id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::EmptyObjectId);
        }
        Ok(Self {
            dimension,
            id,
            name: None,
        })
    }

    /// Set the object name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Id of the owning dimension.
    #[must_use]
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// The object id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The object name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
