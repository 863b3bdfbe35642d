//! Sibling-view association coordinator.
//!
//! On hover, elements across candidate views are classified by the hovered
//! view's group field: same categorical value as the hovered datum ⇒ active,
//! anything else ⇒ inactive. Malformed or missing records classify inactive;
//! visual-feedback paths never fail.

use serde_json::Value;
use tracing::debug;

use crate::interaction::{ActionRef, AssociationMethod, AssociationScope, PointerEvent};
use crate::scene::{ElementId, ElementState, ViewId, ViewTree};

/// Ephemeral classification of one element for one interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationItem {
    pub element: ElementId,
    pub view: ViewId,
    pub active: bool,
    pub inactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MemoKey {
    seq: u64,
    scope: AssociationScope,
}

/// Coordinator state machine: idle → associating (pointer move) →
/// resetting (pointer leave) → idle.
///
/// The memo holds exactly one generation of classification, keyed by event
/// sequence and scope, so the handlers fired for one physical event share a
/// single scan of the candidate views. Any new key replaces the slot before
/// insertion; stale cross-event data cannot leak into a new computation.
#[derive(Debug, Default)]
pub struct SiblingAssociation {
    memo: Option<(MemoKey, Vec<AssociationItem>)>,
}

impl SiblingAssociation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry point for the dispatcher; routes to the bound capability.
    pub fn apply(&mut self, scene: &mut ViewTree, event: &PointerEvent, action: ActionRef) {
        match action.method {
            AssociationMethod::ShowTooltip => self.show_tooltip(scene, event),
            AssociationMethod::HideTooltip => Self::hide_tooltip(scene, event),
            AssociationMethod::Activate => self.activate(scene, event, action.scope),
            AssociationMethod::Deactivate => self.deactivate(scene, event, action.scope),
            AssociationMethod::Reset => Self::reset(scene, event),
        }
    }

    /// Flips the engine `active` flag on every matching element in scope.
    pub fn activate(&mut self, scene: &mut ViewTree, event: &PointerEvent, scope: AssociationScope) {
        let items = self.association_items(scene, event, scope);
        let targets: Vec<ElementId> = items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.element)
            .collect();
        for id in targets {
            if let Some(element) = scene.element_mut(id) {
                element.set_state(ElementState::Active, true);
            }
        }
    }

    /// Flips the engine `inactive` flag on every non-matching element in
    /// scope, leaving the matching ones to stand out.
    pub fn deactivate(
        &mut self,
        scene: &mut ViewTree,
        event: &PointerEvent,
        scope: AssociationScope,
    ) {
        let items = self.association_items(scene, event, scope);
        let targets: Vec<ElementId> = items
            .iter()
            .filter(|item| item.inactive)
            .map(|item| item.element)
            .collect();
        for id in targets {
            if let Some(element) = scene.element_mut(id) {
                element.set_state(ElementState::Inactive, true);
            }
        }
    }

    /// Shows each sibling view's tooltip at the bbox center of its matching
    /// element.
    pub fn show_tooltip(&mut self, scene: &mut ViewTree, event: &PointerEvent) {
        if scene
            .view(event.view)
            .and_then(|view| view.group_field())
            .is_none()
        {
            return;
        }

        let items = self.association_items(scene, event, AssociationScope::Siblings);
        let targets: Vec<(ViewId, ElementId)> = items
            .iter()
            .filter(|item| item.active)
            .map(|item| (item.view, item.element))
            .collect();
        for (view, element) in targets {
            let Some(center) = scene.element(element).map(|el| el.bbox().center()) else {
                continue;
            };
            scene.show_tooltip(view, center);
        }
    }

    /// Hides tooltips on every sibling view.
    pub fn hide_tooltip(scene: &mut ViewTree, event: &PointerEvent) {
        for sibling in scene.sibling_views(event.view) {
            scene.hide_tooltip(sibling);
        }
    }

    /// Returns every view under the container to the neutral state.
    pub fn reset(scene: &mut ViewTree, event: &PointerEvent) {
        for peer in scene.peer_views(event.view) {
            clear_highlight(scene, peer);
        }
    }

    /// Classification for the current event, computed at most once per
    /// (event, scope).
    fn association_items(
        &mut self,
        scene: &ViewTree,
        event: &PointerEvent,
        scope: AssociationScope,
    ) -> &[AssociationItem] {
        let key = MemoKey {
            seq: event.seq,
            scope,
        };
        let hit = matches!(&self.memo, Some((cached, _)) if *cached == key);
        if !hit {
            let items = classify(scene, event, scope);
            self.memo = Some((key, items));
        }

        match &self.memo {
            Some((_, items)) => items,
            None => &[],
        }
    }
}

/// Classifies every element of every candidate view exactly once.
fn classify(scene: &ViewTree, event: &PointerEvent, scope: AssociationScope) -> Vec<AssociationItem> {
    let Some(group_field) = scene.view(event.view).and_then(|view| view.group_field()) else {
        debug!("hovered view has no group scale, association is a no-op");
        return Vec::new();
    };
    let hovered = hovered_value(scene, event, group_field);

    let candidates = match scope {
        AssociationScope::Peers => scene.peer_views(event.view),
        AssociationScope::Siblings => scene.sibling_views(event.view),
    };

    let mut items = Vec::new();
    for view in candidates {
        for element in scene.all_elements(view) {
            let value = scene
                .element(element)
                .and_then(|el| el.data().field_value(group_field));
            // Missing values never match, including on the hovered side.
            let matched = matches!((&hovered, value), (Some(h), Some(v)) if h == v);
            items.push(AssociationItem {
                element,
                view,
                active: matched,
                inactive: !matched,
            });
        }
    }
    items
}

/// Group-field value of the hovered datum, falling back to the hovered
/// element's own record when the host passed no datum.
fn hovered_value(scene: &ViewTree, event: &PointerEvent, field: &str) -> Option<Value> {
    if let Some(value) = event.data.as_ref().and_then(|data| data.get(field)) {
        return Some(value.clone());
    }
    event
        .element
        .and_then(|id| scene.element(id))
        .and_then(|el| el.data().field_value(field))
        .cloned()
}

/// Unsets `active`/`inactive` on every element of `view` and its
/// descendants.
pub fn clear_highlight(scene: &mut ViewTree, view: ViewId) {
    for id in scene.all_elements(view) {
        if let Some(element) = scene.element_mut(id) {
            if element.has_state(ElementState::Active) {
                element.set_state(ElementState::Active, false);
            }
            if element.has_state(ElementState::Inactive) {
                element.set_state(ElementState::Inactive, false);
            }
        }
    }
}
