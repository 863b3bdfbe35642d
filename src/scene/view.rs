use serde::{Deserialize, Serialize};

use crate::scene::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Sub-region of a parent view in unit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub start: Point,
    pub end: Point,
}

impl Region {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
        }
    }

    #[must_use]
    pub fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let ordered = self.start.x <= self.end.x && self.start.y <= self.end.y;
        let in_unit = [self.start.x, self.start.y, self.end.x, self.end.y]
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v));
        ordered && in_unit
    }

    /// Projects this unit region into the parent's pixel bounds.
    #[must_use]
    pub fn project(self, parent: BoundingBox) -> BoundingBox {
        BoundingBox::new(
            parent.min_x + self.start.x * parent.width,
            parent.min_y + self.start.y * parent.height,
            (self.end.x - self.start.x) * parent.width,
            (self.end.y - self.start.y) * parent.height,
        )
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::full()
    }
}

/// Axis-aligned pixel bounds of a view or element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.min_x + self.width / 2.0, self.min_y + self.height / 2.0)
    }

    /// Equal-width slot `index` of `count` across these bounds.
    #[must_use]
    pub fn slot(self, index: usize, count: usize) -> Self {
        let count = count.max(1);
        let slot_width = self.width / count as f64;
        Self::new(
            self.min_x + slot_width * index as f64,
            self.min_y,
            slot_width,
            self.height,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    Line,
    Point,
    Interval,
    Area,
    Indicator,
}

/// One rendered geometry group attached by an adaptor.
#[derive(Debug, Clone)]
pub struct Geometry {
    kind: GeometryKind,
    elements: Vec<ElementId>,
}

impl Geometry {
    pub(crate) fn new(kind: GeometryKind, elements: Vec<ElementId>) -> Self {
        Self { kind, elements }
    }

    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }
}

/// Categorical scale driving cross-view association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupScale {
    field: String,
}

impl GroupScale {
    #[must_use]
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_owned(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// One chart region in the composition tree.
#[derive(Debug)]
pub struct View {
    id: ViewId,
    parent: Option<ViewId>,
    region: Region,
    bounds: BoundingBox,
    children: Vec<ViewId>,
    geometries: Vec<Geometry>,
    group_scales: Vec<GroupScale>,
    tooltip: Option<Point>,
}

impl View {
    pub(crate) fn new(
        id: ViewId,
        parent: Option<ViewId>,
        region: Region,
        bounds: BoundingBox,
    ) -> Self {
        Self {
            id,
            parent,
            region,
            bounds,
            children: Vec::new(),
            geometries: Vec::new(),
            group_scales: Vec::new(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    #[must_use]
    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[must_use]
    pub fn children(&self) -> &[ViewId] {
        &self.children
    }

    #[must_use]
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    #[must_use]
    pub fn group_scales(&self) -> &[GroupScale] {
        &self.group_scales
    }

    /// Field of the first group scale. Only a single categorical dimension
    /// drives association.
    #[must_use]
    pub fn group_field(&self) -> Option<&str> {
        self.group_scales.first().map(GroupScale::field)
    }

    /// Screen point the tooltip is currently shown at, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<Point> {
        self.tooltip
    }

    pub(crate) fn push_child(&mut self, child: ViewId) {
        self.children.push(child);
    }

    pub(crate) fn push_geometry(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }

    pub(crate) fn push_group_scale(&mut self, scale: GroupScale) {
        self.group_scales.push(scale);
    }

    pub(crate) fn show_tooltip(&mut self, point: Point) {
        self.tooltip = Some(point);
    }

    pub(crate) fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }
}
