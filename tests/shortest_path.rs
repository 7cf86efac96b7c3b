use minheap::{IndexedMinHeap, NodeId};

/// Directed, weighted adjacency list.
struct Graph {
    edges: Vec<Vec<(usize, u32)>>,
}

impl Graph {
    fn new(vertices: usize, edges: &[(usize, usize, u32)]) -> Self {
        let mut adjacency = vec![Vec::new(); vertices];

        for &(from, to, weight) in edges {
            adjacency[from].push((to, weight));
        }

        Graph { edges: adjacency }
    }

    /// Distances from `source`, `None` for unreachable vertices.
    fn shortest_paths(&self, source: usize) -> Vec<Option<u64>> {
        let mut heap = IndexedMinHeap::with_capacity(2).unwrap();
        let mut handles: Vec<NodeId> = Vec::with_capacity(self.edges.len());
        let mut dist = vec![None; self.edges.len()];

        for vertex in 0..self.edges.len() {
            let priority = if vertex == source { 0 } else { u64::MAX };
            handles.push(heap.insert(priority, vertex));
        }

        while let Ok(node) = heap.extract_min() {
            let (_, d, vertex) = node.into_parts();
            if d == u64::MAX {
                break;
            }
            dist[vertex] = Some(d);

            for &(next, weight) in &self.edges[vertex] {
                heap.decrease_priority(handles[next], d.saturating_add(u64::from(weight)));
            }
        }

        dist
    }
}

#[test]
fn finds_shortest_paths() {
    let graph = Graph::new(
        6,
        &[
            (0, 1, 7),
            (0, 2, 9),
            (0, 5, 14),
            (1, 2, 10),
            (1, 3, 15),
            (2, 3, 11),
            (2, 5, 2),
            (3, 4, 6),
            (5, 4, 9),
        ],
    );

    assert_eq!(
        graph.shortest_paths(0),
        vec![Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)]
    );
}

#[test]
fn unreachable_vertices_have_no_distance() {
    let graph = Graph::new(4, &[(0, 1, 3), (1, 0, 1), (2, 3, 1)]);

    assert_eq!(graph.shortest_paths(0), vec![Some(0), Some(3), None, None]);
    assert_eq!(graph.shortest_paths(2), vec![None, None, Some(0), Some(1)]);
}

#[test]
fn handles_maximum_edge_weights() {
    let heaviest = u64::from(u32::MAX);
    let graph = Graph::new(3, &[(0, 1, u32::MAX), (1, 2, u32::MAX), (0, 2, u32::MAX)]);

    assert_eq!(
        graph.shortest_paths(0),
        vec![Some(0), Some(heaviest), Some(heaviest)]
    );
}

#[test]
fn extracted_vertices_are_not_revisited() {
    let graph = Graph::new(3, &[(0, 1, 1), (1, 0, 1), (1, 2, 1), (2, 1, 1)]);

    assert_eq!(graph.shortest_paths(1), vec![Some(1), Some(0), Some(1)]);
}
