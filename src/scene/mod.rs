//! Lightweight facade over the host engine's composition tree.
//!
//! The rendering engine proper (scale math, painting) stays external; this
//! module models just enough of its view/element surface to let adaptors
//! attach geometry groups and to let interactions walk the tree, flip visual
//! state, and drive tooltips.

mod element;
mod view;

pub use element::{Element, ElementData, ElementId, ElementState};
pub use view::{BoundingBox, Geometry, GeometryKind, GroupScale, Point, Region, View, ViewId, Viewport};

use crate::error::{PlotError, PlotResult};

/// Arena owning every view and element of one composition.
///
/// Views are owned top-down; a view's `parent` is a back-reference id only.
/// Ids stay valid for the lifetime of the tree (the arena is append-only;
/// re-rendering builds a fresh tree).
#[derive(Debug)]
pub struct ViewTree {
    viewport: Viewport,
    views: Vec<View>,
    elements: Vec<Element>,
}

impl ViewTree {
    pub fn new(viewport: Viewport) -> PlotResult<Self> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let root_bounds = BoundingBox::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        );
        let root = View::new(ViewId(0), None, Region::full(), root_bounds);

        Ok(Self {
            viewport,
            views: vec![root],
            elements: Vec::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn root(&self) -> ViewId {
        ViewId(0)
    }

    #[must_use]
    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.get(id.0)
    }

    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.get_mut(id.0)
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Partitions a sub-region of `parent` into a new child view.
    pub fn add_child(&mut self, parent: ViewId, region: Region) -> PlotResult<ViewId> {
        if !region.is_valid() {
            return Err(PlotError::InvalidRegion {
                x0: region.start.x,
                y0: region.start.y,
                x1: region.end.x,
                y1: region.end.y,
            });
        }

        let parent_bounds = self.view(parent).ok_or(PlotError::UnknownView)?.bounds();
        let bounds = region.project(parent_bounds);
        let id = ViewId(self.views.len());
        self.views.push(View::new(id, Some(parent), region, bounds));
        if let Some(view) = self.view_mut(parent) {
            view.push_child(id);
        }
        Ok(id)
    }

    /// Attaches one geometry group to `view`, creating one element per datum.
    ///
    /// Element bounding boxes are deterministic equal-width slots across the
    /// view's pixel bounds; real mark layout belongs to the engine.
    pub fn add_geometry(
        &mut self,
        view: ViewId,
        kind: GeometryKind,
        data: Vec<ElementData>,
    ) -> PlotResult<()> {
        let bounds = self.view(view).ok_or(PlotError::UnknownView)?.bounds();
        let count = data.len();

        let mut element_ids = Vec::with_capacity(count);
        for (slot, datum) in data.into_iter().enumerate() {
            let id = ElementId(self.elements.len());
            let bbox = bounds.slot(slot, count);
            self.elements.push(Element::new(id, view, datum, bbox));
            element_ids.push(id);
        }

        if let Some(view) = self.view_mut(view) {
            view.push_geometry(Geometry::new(kind, element_ids));
        }
        Ok(())
    }

    pub fn set_group_scale(&mut self, view: ViewId, field: &str) -> PlotResult<()> {
        let view = self.view_mut(view).ok_or(PlotError::UnknownView)?;
        view.push_group_scale(GroupScale::new(field));
        Ok(())
    }

    /// Replaces the data backing one element, as a host engine would on a
    /// data refresh.
    pub fn set_element_data(&mut self, element: ElementId, data: ElementData) -> PlotResult<()> {
        let element = self.element_mut(element).ok_or(PlotError::UnknownElement)?;
        element.set_data(data);
        Ok(())
    }

    pub fn show_tooltip(&mut self, view: ViewId, point: Point) {
        if let Some(view) = self.view_mut(view) {
            view.show_tooltip(point);
        }
    }

    pub fn hide_tooltip(&mut self, view: ViewId) {
        if let Some(view) = self.view_mut(view) {
            view.hide_tooltip();
        }
    }

    /// Elements of `view` and all of its descendants, in attachment order.
    #[must_use]
    pub fn all_elements(&self, view: ViewId) -> Vec<ElementId> {
        let mut collected = Vec::new();
        self.collect_elements(view, &mut collected);
        collected
    }

    fn collect_elements(&self, view: ViewId, collected: &mut Vec<ElementId>) {
        let Some(view) = self.view(view) else {
            return;
        };
        for geometry in view.geometries() {
            collected.extend_from_slice(geometry.elements());
        }
        for child in view.children() {
            self.collect_elements(*child, collected);
        }
    }

    /// All views at the hovered view's level: the children of its parent,
    /// the hovered view included. A parentless view yields its own children.
    #[must_use]
    pub fn peer_views(&self, view: ViewId) -> Vec<ViewId> {
        let Some(node) = self.view(view) else {
            return Vec::new();
        };
        let holder = match node.parent() {
            Some(parent) => self.view(parent),
            None => Some(node),
        };
        holder.map(|v| v.children().to_vec()).unwrap_or_default()
    }

    /// Peer views minus the view itself.
    #[must_use]
    pub fn sibling_views(&self, view: ViewId) -> Vec<ViewId> {
        self.peer_views(view)
            .into_iter()
            .filter(|peer| *peer != view)
            .collect()
    }
}
