use serde_json::Value;

use crate::error::{PlotError, PlotResult};
use crate::interaction::{InteractionDispatcher, InteractionKind, PointerEvent, Trigger};
use crate::plots::{MultiViewOptions, multi_view};
use crate::scene::{ElementId, ViewId, ViewTree, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiViewPlotConfig {
    pub viewport: Viewport,
}

impl MultiViewPlotConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

/// Container plot: lays sub-plots out in one canvas region and keeps their
/// hover/highlight/tooltip state in sync.
///
/// All work runs on the caller's thread in response to pointer events; every
/// entry point runs to completion before the next event is processed.
#[derive(Debug)]
pub struct MultiViewPlot {
    viewport: Viewport,
    options: MultiViewOptions,
    scene: ViewTree,
    dispatcher: InteractionDispatcher,
    event_seq: u64,
}

impl MultiViewPlot {
    pub fn new(config: MultiViewPlotConfig) -> PlotResult<Self> {
        if !config.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            viewport: config.viewport,
            options: MultiViewOptions::default(),
            scene: ViewTree::new(config.viewport)?,
            dispatcher: InteractionDispatcher::new(),
            event_seq: 0,
        })
    }

    /// Replaces the declarative options and re-renders.
    pub fn update(&mut self, options: MultiViewOptions) -> PlotResult<()> {
        self.options = options;
        self.render()
    }

    /// Rebuilds the composition tree from the current options. Sub-views
    /// with unresolved types or failing adaptors are skipped, not fatal.
    pub fn render(&mut self) -> PlotResult<()> {
        let mut scene = ViewTree::new(self.viewport)?;
        let root = scene.root();
        multi_view::compose(&mut scene, root, &self.options)?;
        self.scene = scene;
        Ok(())
    }

    #[must_use]
    pub fn scene(&self) -> &ViewTree {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut ViewTree {
        &mut self.scene
    }

    /// Child views of the container, one per composed sub-plot.
    #[must_use]
    pub fn sub_views(&self) -> Vec<ViewId> {
        self.scene
            .view(self.scene.root())
            .map(|root| root.children().to_vec())
            .unwrap_or_default()
    }

    pub fn enable_interaction(&mut self, kind: InteractionKind) {
        self.dispatcher.enable(kind);
    }

    pub fn disable_interaction(&mut self, kind: InteractionKind) {
        self.dispatcher.disable(kind);
    }

    #[must_use]
    pub fn is_interaction_enabled(&self, kind: InteractionKind) -> bool {
        self.dispatcher.is_enabled(kind)
    }

    /// Pointer entered or moved over an element. `data` is the hovered
    /// datum when the host knows it; otherwise the element's own record is
    /// consulted.
    pub fn pointer_move(&mut self, view: ViewId, element: Option<ElementId>, data: Option<Value>) {
        let event = PointerEvent {
            seq: self.next_event_seq(),
            trigger: Trigger::ElementPointerMove,
            view,
            element,
            data,
        };
        self.dispatcher.dispatch(&mut self.scene, &event);
    }

    /// Pointer left the element; supersedes any in-flight hover state.
    pub fn pointer_leave(&mut self, view: ViewId) {
        let event = PointerEvent {
            seq: self.next_event_seq(),
            trigger: Trigger::ElementPointerLeave,
            view,
            element: None,
            data: None,
        };
        self.dispatcher.dispatch(&mut self.scene, &event);
    }

    /// Monotonic event identity; one value per physical pointer event, so
    /// every handler fired for it shares a single classification pass.
    fn next_event_seq(&mut self) -> u64 {
        self.event_seq += 1;
        self.event_seq
    }
}
