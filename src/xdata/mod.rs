//! Extended Data (XDATA) support
//!
//! Extended data is application-specific data attached to an entity, keyed
//! by the application registry entry that owns it. The entity model never
//! interprets the payload; it only stores and copies it.

use crate::tables::AppId;
use crate::types::{Handle, Vector3};
use ahash::RandomState;
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Extended data value types
#[derive(Debug, Clone, PartialEq)]
pub enum XDataValue {
    /// String value (group code 1000)
    String(String),
    /// Control string (group code 1002) - "{" or "}"
    ControlString(String),
    /// Layer name (group code 1003)
    LayerName(String),
    /// Binary data (group code 1004)
    BinaryData(Vec<u8>),
    /// Database handle (group code 1005)
    Handle(Handle),
    /// 3D point (group codes 1010, 1020, 1030)
    Point3D(Vector3),
    /// Real value (group code 1040)
    Real(f64),
    /// 16-bit integer (group code 1070)
    Integer16(i16),
    /// 32-bit integer (group code 1071)
    Integer32(i32),
}

/// Opaque payload registered under one application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XData {
    pub values: Vec<XDataValue>,
}

impl XData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: Vec<XDataValue>) -> Self {
        Self { values }
    }

    pub fn push(&mut self, value: XDataValue) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Map key comparing application registry entries by identity.
///
/// Two `AppId`s with the same name but different allocations are different
/// keys; the registry is responsible for handing out one instance per name.
#[derive(Debug, Clone)]
pub struct AppIdKey(pub Arc<AppId>);

impl AppIdKey {
    pub fn app(&self) -> &Arc<AppId> {
        &self.0
    }
}

impl PartialEq for AppIdKey {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for AppIdKey {}

impl Hash for AppIdKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl From<Arc<AppId>> for AppIdKey {
    fn from(app: Arc<AppId>) -> Self {
        AppIdKey(app)
    }
}

/// Extended data collection for an entity, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedData {
    records: IndexMap<AppIdKey, XData, RandomState>,
}

impl ExtendedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `data` under `app`, returning the payload it replaces
    pub fn insert(&mut self, app: Arc<AppId>, data: XData) -> Option<XData> {
        self.records.insert(AppIdKey(app), data)
    }

    pub fn get(&self, app: &Arc<AppId>) -> Option<&XData> {
        self.records.get(&AppIdKey(Arc::clone(app)))
    }

    /// First record whose application has the given name
    pub fn get_by_name(&self, name: &str) -> Option<&XData> {
        self.records
            .iter()
            .find(|(key, _)| key.0.name == name)
            .map(|(_, data)| data)
    }

    pub fn remove(&mut self, app: &Arc<AppId>) -> Option<XData> {
        self.records.shift_remove(&AppIdKey(Arc::clone(app)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<AppId>, &XData)> {
        self.records.iter().map(|(key, data)| (key.app(), data))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
