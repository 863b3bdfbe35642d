//! Cross-view interaction wiring.
//!
//! The registration surface mirrors the host-engine convention of
//! `{ start: [{ trigger, action }], end: [{ trigger, action }] }` descriptors,
//! but triggers, methods, and scopes are tagged variants rather than strings,
//! and the coordinator is driven through plain method calls instead of a
//! framework base class.

mod sibling_association;

pub use sibling_association::{AssociationItem, SiblingAssociation, clear_highlight};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scene::{ElementId, ViewId, ViewTree};

/// Pointer-event categories the host dispatches against rendered elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    ElementPointerMove,
    ElementPointerLeave,
}

/// Candidate-view scope of one association pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssociationScope {
    /// Every view under the shared container, the hovered one included.
    Peers,
    /// Only the other views; the hovered view stays untouched (isolate).
    Siblings,
}

/// Coordinator capability addressed by a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssociationMethod {
    ShowTooltip,
    HideTooltip,
    Activate,
    Deactivate,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRef {
    pub scope: AssociationScope,
    pub method: AssociationMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
    pub trigger: Trigger,
    pub action: ActionRef,
}

/// The five built-in sibling-association interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Tooltips of sibling views follow the hovered category.
    AssociationTooltip,
    /// Matching elements everywhere turn active.
    AssociationActive,
    /// Matching elements on siblings only turn active.
    AssociationSiblingActive,
    /// Non-matching elements everywhere turn inactive, highlighting the rest.
    AssociationHighlight,
    /// Non-matching elements on siblings only turn inactive.
    AssociationSiblingHighlight,
}

impl InteractionKind {
    pub const ALL: [Self; 5] = [
        Self::AssociationTooltip,
        Self::AssociationActive,
        Self::AssociationSiblingActive,
        Self::AssociationHighlight,
        Self::AssociationSiblingHighlight,
    ];

    /// Name the interaction is registered under at the host surface.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AssociationTooltip => "association-tooltip",
            Self::AssociationActive => "association-active",
            Self::AssociationSiblingActive => "association-sibling-active",
            Self::AssociationHighlight => "association-highlight",
            Self::AssociationSiblingHighlight => "association-sibling-highlight",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    #[must_use]
    pub fn spec(self) -> InteractionSpec {
        let (scope, start_method, end_method) = match self {
            Self::AssociationTooltip => (
                AssociationScope::Siblings,
                AssociationMethod::ShowTooltip,
                AssociationMethod::HideTooltip,
            ),
            Self::AssociationActive => (
                AssociationScope::Peers,
                AssociationMethod::Activate,
                AssociationMethod::Reset,
            ),
            Self::AssociationSiblingActive => (
                AssociationScope::Siblings,
                AssociationMethod::Activate,
                AssociationMethod::Reset,
            ),
            Self::AssociationHighlight => (
                AssociationScope::Peers,
                AssociationMethod::Deactivate,
                AssociationMethod::Reset,
            ),
            Self::AssociationSiblingHighlight => (
                AssociationScope::Siblings,
                AssociationMethod::Deactivate,
                AssociationMethod::Reset,
            ),
        };

        InteractionSpec {
            kind: self,
            start: vec![ActionBinding {
                trigger: Trigger::ElementPointerMove,
                action: ActionRef {
                    scope,
                    method: start_method,
                },
            }],
            end: vec![ActionBinding {
                trigger: Trigger::ElementPointerLeave,
                action: ActionRef {
                    scope,
                    method: end_method,
                },
            }],
        }
    }
}

/// Declarative interaction descriptor in the host-engine shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSpec {
    pub kind: InteractionKind,
    pub start: Vec<ActionBinding>,
    pub end: Vec<ActionBinding>,
}

/// All built-in interaction descriptors, as registered at initialization.
#[must_use]
pub fn builtin_interactions() -> Vec<InteractionSpec> {
    InteractionKind::ALL.iter().map(|kind| kind.spec()).collect()
}

/// One pointer interaction event as dispatched by the host.
///
/// `seq` is a monotonic per-event sequence number; every handler fired for
/// the same physical event must carry the same value.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub seq: u64,
    pub trigger: Trigger,
    pub view: ViewId,
    pub element: Option<ElementId>,
    pub data: Option<Value>,
}

/// Routes pointer events through the enabled interaction descriptors to the
/// association coordinator.
#[derive(Debug, Default)]
pub struct InteractionDispatcher {
    interactions: Vec<InteractionSpec>,
    association: SiblingAssociation,
}

impl InteractionDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, kind: InteractionKind) {
        if !self.is_enabled(kind) {
            self.interactions.push(kind.spec());
        }
    }

    pub fn disable(&mut self, kind: InteractionKind) {
        self.interactions.retain(|spec| spec.kind != kind);
    }

    #[must_use]
    pub fn is_enabled(&self, kind: InteractionKind) -> bool {
        self.interactions.iter().any(|spec| spec.kind == kind)
    }

    #[must_use]
    pub fn enabled(&self) -> &[InteractionSpec] {
        &self.interactions
    }

    /// Invokes every binding whose trigger matches, in registration order.
    /// Handlers run to completion synchronously; nothing here can fail.
    pub fn dispatch(&mut self, scene: &mut ViewTree, event: &PointerEvent) {
        for spec in &self.interactions {
            for binding in spec.start.iter().chain(spec.end.iter()) {
                if binding.trigger == event.trigger {
                    self.association.apply(scene, event, binding.action);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_builtin_interactions_are_registered() {
        let specs = builtin_interactions();
        assert_eq!(specs.len(), 5);
        for spec in &specs {
            assert_eq!(spec.start.len(), 1);
            assert_eq!(spec.end.len(), 1);
            assert_eq!(spec.start[0].trigger, Trigger::ElementPointerMove);
            assert_eq!(spec.end[0].trigger, Trigger::ElementPointerLeave);
        }
    }

    #[test]
    fn isolate_variants_bind_sibling_scope() {
        let spec = InteractionKind::AssociationSiblingActive.spec();
        assert_eq!(spec.start[0].action.scope, AssociationScope::Siblings);
        assert_eq!(spec.start[0].action.method, AssociationMethod::Activate);
        assert_eq!(spec.end[0].action.method, AssociationMethod::Reset);

        let spec = InteractionKind::AssociationActive.spec();
        assert_eq!(spec.start[0].action.scope, AssociationScope::Peers);
    }

    #[test]
    fn interaction_names_round_trip() {
        for kind in InteractionKind::ALL {
            assert_eq!(InteractionKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(InteractionKind::from_name("association-unknown"), None);
    }

    #[test]
    fn enable_is_idempotent_and_disable_removes() {
        let mut dispatcher = InteractionDispatcher::new();
        dispatcher.enable(InteractionKind::AssociationTooltip);
        dispatcher.enable(InteractionKind::AssociationTooltip);
        assert_eq!(dispatcher.enabled().len(), 1);

        dispatcher.disable(InteractionKind::AssociationTooltip);
        assert!(!dispatcher.is_enabled(InteractionKind::AssociationTooltip));
    }
}
