mod common;

use common::{case, fixture_terrain};
use gridroute_lib::{plan_route, shortest_path, Path, RouteOutputKind, RouteSummary};

#[test]
fn path_summary_lists_cases() {
    let terrain = fixture_terrain();
    let path = shortest_path(&terrain, case(6), case(13));
    let summary = RouteSummary::from_path(&path, terrain.side());

    assert_eq!(summary.kind, RouteOutputKind::Path);
    assert_eq!(summary.hops, 3);
    assert_eq!(summary.steps.len(), 4);
    assert_eq!(summary.steps[3].case, 13);
    assert_eq!((summary.steps[3].x, summary.steps[3].y), (2, 2));

    let text = summary.render_text();
    assert!(text.starts_with("Path: case 6 -> case 13 (3 hops)"));
    assert!(text.contains("6 -> 11 -> 12 -> 13"));
}

#[test]
fn empty_path_renders_no_path() {
    let summary = RouteSummary::from_path(&Path::new(), 5);
    assert!(summary.steps.is_empty());
    assert_eq!(summary.render_text(), "Path: no path\n");
}

#[test]
fn route_summary_marks_goals_and_instructions() {
    let terrain = fixture_terrain();
    let plan = plan_route(&terrain);
    let summary = RouteSummary::from_plan(&plan, terrain.side());

    assert_eq!(summary.kind, RouteOutputKind::Route);
    assert_eq!(summary.hops, 10);
    let goal_cases: Vec<u32> = summary.goals.iter().map(|goal| goal.case).collect();
    assert_eq!(goal_cases, vec![13, 22, 20]);
    assert_eq!(summary.instructions.as_deref(), Some("DDAGAADDAGAADDADAAA"));

    let text = summary.render_text();
    assert!(text.starts_with("Route: case 6 -> case 20 (10 hops)"));
    assert!(text.contains("instructions: DDAGAADDAGAADDADAAA"));
    assert!(text.contains("case  13 (2, 2) *"));
}

#[test]
fn route_summary_serialises_to_json() {
    let terrain = fixture_terrain();
    let summary = RouteSummary::from_plan(&plan_route(&terrain), terrain.side());
    let value = serde_json::to_value(&summary).expect("serialises");

    assert_eq!(value["kind"], "route");
    assert_eq!(value["hops"], 10);
    assert_eq!(value["direction"], "north");
    assert_eq!(value["steps"][0]["case"], 6);
    assert!(value.get("unreachable").is_none());
}
