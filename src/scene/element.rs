use serde_json::Value;
use smallvec::SmallVec;

use crate::scene::{BoundingBox, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) usize);

/// Data backing one rendered mark: a single record, or the record array of a
/// whole series (a line path, an area band).
#[derive(Debug, Clone, PartialEq)]
pub enum ElementData {
    Single(Value),
    Series(Vec<Value>),
}

impl ElementData {
    /// Value of `field` on the underlying record; series elements read the
    /// first record. `None` for missing fields and non-object records.
    #[must_use]
    pub fn field_value(&self, field: &str) -> Option<&Value> {
        let record = match self {
            Self::Single(record) => record,
            Self::Series(records) => records.first()?,
        };
        record.get(field)
    }
}

/// Visual feedback flags toggled by interactions; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Active,
    Inactive,
}

/// One rendered mark belonging to exactly one view.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    view: ViewId,
    data: ElementData,
    states: SmallVec<[ElementState; 2]>,
    bbox: BoundingBox,
}

impl Element {
    pub(crate) fn new(id: ElementId, view: ViewId, data: ElementData, bbox: BoundingBox) -> Self {
        Self {
            id,
            view,
            data,
            states: SmallVec::new(),
            bbox,
        }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn view(&self) -> ViewId {
        self.view
    }

    #[must_use]
    pub fn data(&self) -> &ElementData {
        &self.data
    }

    pub(crate) fn set_data(&mut self, data: ElementData) {
        self.data = data;
    }

    #[must_use]
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    #[must_use]
    pub fn has_state(&self, state: ElementState) -> bool {
        self.states.contains(&state)
    }

    pub fn set_state(&mut self, state: ElementState, on: bool) {
        if on {
            if !self.states.contains(&state) {
                self.states.push(state);
            }
        } else {
            self.states.retain(|s| *s != state);
        }
    }

    /// Neutral means neither active nor inactive.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.states.is_empty()
    }
}
