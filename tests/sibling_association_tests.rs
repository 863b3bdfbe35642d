use approx::assert_relative_eq;
use plotgrid_rs::interaction::{
    AssociationScope, InteractionKind, PointerEvent, SiblingAssociation, Trigger, clear_highlight,
};
use plotgrid_rs::plots::{BarOptions, MultiViewOptions, PlotOptions, SubPlot};
use plotgrid_rs::scene::{
    ElementData, ElementId, ElementState, GeometryKind, Region, ViewId, ViewTree, Viewport,
};
use plotgrid_rs::{MultiViewPlot, MultiViewPlotConfig};
use serde_json::{Value, json};

fn area_data() -> Vec<Value> {
    vec![
        json!({ "area": "Central", "value": 0.218 }),
        json!({ "area": "East", "value": 0.295 }),
        json!({ "area": "South", "value": 0.171 }),
        json!({ "area": "West", "value": 0.316 }),
    ]
}

fn bar_sub_plot(region: Region) -> SubPlot {
    SubPlot {
        region,
        plot: PlotOptions::Bar(BarOptions {
            data: area_data(),
            x_field: "value".to_owned(),
            y_field: "area".to_owned(),
            series_field: Some("area".to_owned()),
        }),
    }
}

/// Two sibling bar views plotting the same categories side by side.
fn build_plot() -> (MultiViewPlot, ViewId, ViewId) {
    let mut plot = MultiViewPlot::new(MultiViewPlotConfig::new(Viewport::new(800, 400)))
        .expect("plot init");
    plot.update(MultiViewOptions {
        plots: vec![
            bar_sub_plot(Region::new(0.0, 0.0, 0.5, 1.0)),
            bar_sub_plot(Region::new(0.5, 0.0, 1.0, 1.0)),
        ],
        ..MultiViewOptions::default()
    })
    .expect("compose");

    let sub_views = plot.sub_views();
    assert_eq!(sub_views.len(), 2);
    (plot, sub_views[0], sub_views[1])
}

fn element_with(scene: &ViewTree, view: ViewId, area: &str) -> ElementId {
    scene
        .all_elements(view)
        .into_iter()
        .find(|id| {
            scene
                .element(*id)
                .and_then(|el| el.data().field_value("area"))
                == Some(&json!(area))
        })
        .expect("element for category")
}

fn states_of(scene: &ViewTree, view: ViewId) -> Vec<(bool, bool)> {
    scene
        .all_elements(view)
        .into_iter()
        .map(|id| {
            let element = scene.element(id).expect("element");
            (
                element.has_state(ElementState::Active),
                element.has_state(ElementState::Inactive),
            )
        })
        .collect()
}

fn assert_all_neutral(scene: &ViewTree, view: ViewId) {
    assert!(
        states_of(scene, view).iter().all(|(a, i)| !a && !i),
        "expected every element neutral"
    );
}

#[test]
fn active_association_partitions_both_views_by_category() {
    let (mut plot, view_a, view_b) = build_plot();
    plot.enable_interaction(InteractionKind::AssociationActive);

    let hovered = element_with(plot.scene(), view_a, "East");
    plot.pointer_move(view_a, Some(hovered), Some(json!({ "area": "East", "value": 0.295 })));

    for view in [view_a, view_b] {
        let east = element_with(plot.scene(), view, "East");
        for id in plot.scene().all_elements(view) {
            let element = plot.scene().element(id).expect("element");
            if id == east {
                assert!(element.has_state(ElementState::Active));
                assert!(!element.has_state(ElementState::Inactive));
            } else {
                assert!(element.has_state(ElementState::Inactive));
                assert!(!element.has_state(ElementState::Active));
            }
        }
    }
}

#[test]
fn pointer_leave_returns_every_element_to_neutral() {
    let (mut plot, view_a, view_b) = build_plot();
    plot.enable_interaction(InteractionKind::AssociationActive);

    let hovered = element_with(plot.scene(), view_a, "East");
    plot.pointer_move(view_a, Some(hovered), Some(json!({ "area": "East" })));
    plot.pointer_leave(view_a);

    assert_all_neutral(plot.scene(), view_a);
    assert_all_neutral(plot.scene(), view_b);
}

#[test]
fn tooltip_association_drives_sibling_tooltip_to_element_center() {
    let (mut plot, view_a, view_b) = build_plot();
    plot.enable_interaction(InteractionKind::AssociationTooltip);

    let hovered = element_with(plot.scene(), view_a, "East");
    plot.pointer_move(view_a, Some(hovered), Some(json!({ "area": "East" })));

    let east_b = element_with(plot.scene(), view_b, "East");
    let expected = plot
        .scene()
        .element(east_b)
        .expect("sibling element")
        .bbox()
        .center();
    let shown = plot
        .scene()
        .view(view_b)
        .expect("sibling view")
        .tooltip()
        .expect("sibling tooltip shown");
    assert_relative_eq!(shown.x, expected.x);
    assert_relative_eq!(shown.y, expected.y);

    // The hovered view keeps its own default tooltip handling.
    assert!(plot.scene().view(view_a).expect("view").tooltip().is_none());

    plot.pointer_leave(view_a);
    assert!(plot.scene().view(view_b).expect("view").tooltip().is_none());
}

#[test]
fn isolate_variant_never_touches_the_hovered_view() {
    let (mut plot, view_a, view_b) = build_plot();
    plot.enable_interaction(InteractionKind::AssociationSiblingActive);

    let hovered = element_with(plot.scene(), view_a, "East");
    plot.pointer_move(view_a, Some(hovered), Some(json!({ "area": "East" })));

    assert_all_neutral(plot.scene(), view_a);
    let east_b = element_with(plot.scene(), view_b, "East");
    assert!(
        plot.scene()
            .element(east_b)
            .expect("element")
            .has_state(ElementState::Active)
    );
}

#[test]
fn highlight_variant_dims_non_matching_elements_only() {
    let (mut plot, view_a, view_b) = build_plot();
    plot.enable_interaction(InteractionKind::AssociationHighlight);

    let hovered = element_with(plot.scene(), view_a, "East");
    plot.pointer_move(view_a, Some(hovered), Some(json!({ "area": "East" })));

    for view in [view_a, view_b] {
        let east = element_with(plot.scene(), view, "East");
        for id in plot.scene().all_elements(view) {
            let element = plot.scene().element(id).expect("element");
            assert!(!element.has_state(ElementState::Active));
            assert_eq!(element.has_state(ElementState::Inactive), id != east);
        }
    }
}

#[test]
fn view_without_group_scale_does_not_participate() {
    let mut plot = MultiViewPlot::new(MultiViewPlotConfig::new(Viewport::new(800, 400)))
        .expect("plot init");
    plot.update(MultiViewOptions {
        plots: vec![
            SubPlot {
                region: Region::new(0.0, 0.0, 0.5, 1.0),
                plot: PlotOptions::Bar(BarOptions {
                    data: area_data(),
                    x_field: "value".to_owned(),
                    y_field: "area".to_owned(),
                    series_field: None,
                }),
            },
            bar_sub_plot(Region::new(0.5, 0.0, 1.0, 1.0)),
        ],
        ..MultiViewOptions::default()
    })
    .expect("compose");
    plot.enable_interaction(InteractionKind::AssociationActive);
    plot.enable_interaction(InteractionKind::AssociationTooltip);

    let sub_views = plot.sub_views();
    let (bare, grouped) = (sub_views[0], sub_views[1]);

    let hovered = element_with(plot.scene(), bare, "East");
    plot.pointer_move(bare, Some(hovered), Some(json!({ "area": "East" })));

    assert_all_neutral(plot.scene(), bare);
    assert_all_neutral(plot.scene(), grouped);
    assert!(plot.scene().view(grouped).expect("view").tooltip().is_none());
}

/// Direct coordinator scene: two sibling views with one interval geometry
/// each, grouped by `area`.
fn coordinator_scene() -> (ViewTree, ViewId, ViewId) {
    let mut scene = ViewTree::new(Viewport::new(800, 400)).expect("scene init");
    let view_a = scene
        .add_child(scene.root(), Region::new(0.0, 0.0, 0.5, 1.0))
        .expect("view a");
    let view_b = scene
        .add_child(scene.root(), Region::new(0.5, 0.0, 1.0, 1.0))
        .expect("view b");
    for view in [view_a, view_b] {
        let data = area_data().into_iter().map(ElementData::Single).collect();
        scene
            .add_geometry(view, GeometryKind::Interval, data)
            .expect("geometry");
        scene.set_group_scale(view, "area").expect("group scale");
    }
    (scene, view_a, view_b)
}

fn move_event(seq: u64, view: ViewId, area: &str) -> PointerEvent {
    PointerEvent {
        seq,
        trigger: Trigger::ElementPointerMove,
        view,
        element: None,
        data: Some(json!({ "area": area })),
    }
}

#[test]
fn same_event_identity_reuses_the_memoized_classification() {
    let (mut scene, view_a, view_b) = coordinator_scene();
    let mut association = SiblingAssociation::new();

    let event = move_event(1, view_a, "East");
    association.activate(&mut scene, &event, AssociationScope::Peers);
    let east_b = element_with(&scene, view_b, "East");
    assert!(
        scene
            .element(east_b)
            .expect("element")
            .has_state(ElementState::Active)
    );

    // Rewrite the record under the memoized event: a memo hit must not
    // observe the new data.
    scene
        .set_element_data(east_b, ElementData::Single(json!({ "area": "South" })))
        .expect("data swap");
    let root = scene.root();
    clear_highlight(&mut scene, root);

    association.activate(&mut scene, &event, AssociationScope::Peers);
    assert!(
        scene
            .element(east_b)
            .expect("element")
            .has_state(ElementState::Active),
        "memo hit must reuse the original classification"
    );

    // A new event identity evicts the memo and reclassifies.
    clear_highlight(&mut scene, root);
    association.activate(&mut scene, &move_event(2, view_a, "East"), AssociationScope::Peers);
    assert!(
        !scene
            .element(east_b)
            .expect("element")
            .has_state(ElementState::Active),
        "fresh event must observe the rewritten record"
    );
}

#[test]
fn malformed_records_classify_inactive_without_failing() {
    let (mut scene, view_a, view_b) = coordinator_scene();
    // One mark backed by a record that lacks the group field, one backed by
    // a bare scalar.
    scene
        .add_geometry(
            view_b,
            GeometryKind::Point,
            vec![
                ElementData::Single(json!({ "value": 1.0 })),
                ElementData::Single(json!("not-a-record")),
            ],
        )
        .expect("geometry");

    let mut association = SiblingAssociation::new();
    association.activate(&mut scene, &move_event(1, view_a, "East"), AssociationScope::Peers);
    association.deactivate(&mut scene, &move_event(1, view_a, "East"), AssociationScope::Peers);

    for id in scene.all_elements(view_b) {
        let element = scene.element(id).expect("element");
        let is_east = element.data().field_value("area") == Some(&json!("East"));
        assert_eq!(element.has_state(ElementState::Active), is_east);
        assert_eq!(element.has_state(ElementState::Inactive), !is_east);
    }
}
