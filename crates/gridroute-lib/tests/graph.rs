use gridroute_lib::{Edge, Error, Graph, Labeled, Orientation, Unlabeled, Unvalued, Valued};

fn path_graph(orientation: Orientation) -> Graph {
    let mut graph = Graph::new(orientation);
    for id in 0..4 {
        graph.add_vertex(id).expect("fresh vertex");
    }
    graph.add_edge(0, 1).expect("edge");
    graph.add_edge(1, 2).expect("edge");
    graph.add_edge(3, 1).expect("edge");
    graph
}

#[test]
fn duplicate_vertex_is_rejected() {
    let mut graph = Graph::new(Orientation::Directed);
    graph.add_vertex(7).expect("fresh vertex");
    assert!(matches!(
        graph.add_vertex(7),
        Err(Error::VertexPresent { id: 7 })
    ));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn edge_to_missing_vertex_is_rejected() {
    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_vertex(0).expect("fresh vertex");
    assert!(matches!(
        graph.add_edge(0, 9),
        Err(Error::VertexAbsent { id: 9 })
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn adjacency_honours_orientation() {
    let undirected = path_graph(Orientation::Undirected);
    assert_eq!(
        undirected.adjacent(1).expect("vertex").to_vec(),
        vec![0, 2, 3]
    );
    assert_eq!(undirected.adjacent(3).expect("vertex").to_vec(), vec![1]);

    let directed = path_graph(Orientation::Directed);
    assert_eq!(directed.adjacent(1).expect("vertex").to_vec(), vec![2]);
    assert_eq!(directed.adjacent(3).expect("vertex").to_vec(), vec![1]);
    assert!(directed.adjacent(2).expect("vertex").is_empty());

    assert!(matches!(
        directed.adjacent(42),
        Err(Error::VertexAbsent { id: 42 })
    ));
}

#[test]
fn removing_a_vertex_drops_incident_edges() {
    let mut graph = path_graph(Orientation::Undirected);
    graph.remove_vertex(1).expect("vertex exists");
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.vertex_present(1));
    assert!(graph.adjacent(0).expect("vertex").is_empty());
    assert!(graph.remove_vertex(1).is_err());
}

#[test]
fn removing_an_undirected_edge_accepts_either_order() {
    let mut graph = path_graph(Orientation::Undirected);
    graph.remove_edge(1, 0).expect("edge exists");
    assert!(!graph.arc_present(0, 1));
    assert_eq!(
        graph.edges().to_vec(),
        vec![Edge::new(1, 2), Edge::new(3, 1)]
    );
    assert!(matches!(
        graph.remove_edge(0, 1),
        Err(Error::ArcAbsent { src: 0, dest: 1 })
    ));
}

#[test]
fn unlabeled_graph_refuses_labels() {
    let mut graph = Graph::new(Orientation::Directed);
    graph.add_vertex(0).expect("fresh vertex");
    assert!(matches!(graph.label(0), Err(Error::NotLabeled)));
    assert!(matches!(graph.set_label(0, ()), Err(Error::NotLabeled)));
    assert!(matches!(
        graph.add_vertex_with_label(1, ()),
        Err(Error::NotLabeled)
    ));
    assert!(!graph.vertex_present(1));
    assert!(matches!(graph.value(0, 0), Err(Error::NotValued)));
}

#[test]
fn labels_follow_their_vertex() {
    let mut graph: Graph<Labeled<String>, Unvalued> =
        Graph::with_capabilities(Orientation::Undirected);
    graph
        .add_vertex_with_label(0, "dock".to_string())
        .expect("fresh vertex");
    graph.add_vertex(1).expect("fresh vertex");

    assert_eq!(graph.label(0).expect("labelled"), "dock");
    assert!(matches!(graph.label(1), Err(Error::MissingKey)));
    assert!(matches!(
        graph.set_label(5, "ghost".to_string()),
        Err(Error::VertexAbsent { id: 5 })
    ));

    graph
        .set_label(1, "charger".to_string())
        .expect("vertex exists");
    assert_eq!(graph.label(1).expect("labelled"), "charger");

    graph.remove_vertex(0).expect("vertex exists");
    graph.add_vertex(0).expect("id is free again");
    assert!(matches!(graph.label(0), Err(Error::MissingKey)));
}

#[test]
fn values_are_shared_by_both_edge_orders_when_undirected() {
    let mut graph: Graph<Unlabeled, Valued<f64>> =
        Graph::with_capabilities(Orientation::Undirected);
    for id in 0..3 {
        graph.add_vertex(id).expect("fresh vertex");
    }
    graph.add_edge_with_value(0, 1, 2.5).expect("edge");
    assert_eq!(graph.value(1, 0).expect("valued"), 2.5);

    graph.add_edge_with_value(1, 0, 4.0).expect("existing edge");
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.value(0, 1).expect("valued"), 4.0);

    graph.set_value(1, 0, 1.0).expect("edge exists");
    assert_eq!(graph.value(0, 1).expect("valued"), 1.0);
    assert!(matches!(
        graph.value(0, 2),
        Err(Error::ArcAbsent { src: 0, dest: 2 })
    ));

    graph.remove_edge(1, 0).expect("edge exists");
    graph.add_edge(0, 1).expect("edge");
    assert!(matches!(graph.value(0, 1), Err(Error::MissingKey)));
}

#[test]
fn directed_values_are_per_direction() {
    let mut graph: Graph<Unlabeled, Valued<u32>> =
        Graph::with_capabilities(Orientation::Directed);
    graph.add_vertex(0).expect("fresh vertex");
    graph.add_vertex(1).expect("fresh vertex");
    graph.add_edge_with_value(0, 1, 10).expect("edge");
    graph.add_edge_with_value(1, 0, 20).expect("edge");
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.value(0, 1).expect("valued"), 10);
    assert_eq!(graph.value(1, 0).expect("valued"), 20);
}

#[test]
fn clear_empties_everything() {
    let mut graph = path_graph(Orientation::Directed);
    let copy = graph.clone();
    graph.clear();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(copy.vertex_count(), 4);
    assert_eq!(graph.orientation(), Orientation::Directed);
}
