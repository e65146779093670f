extern crate graph_components;

use graph_components::example;
use graph_components::{
    Bcc, BccDecomposer, Graph, KosarajuScc, Scc, SccAlgorithm, SccDecomposer, TarjanBcc,
    TarjanScc,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_digraph<R: Rng>(n: u32, p: f64, rng: &mut R) -> Graph<u32> {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges((0..n).collect(), edges, true).unwrap()
}

fn random_undirected<R: Rng>(n: u32, p: f64, rng: &mut R) -> Graph<u32> {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..u {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges((0..n).collect(), edges, false).unwrap()
}

/// `v` reaches `w` in `g`.
fn reaches(g: &Graph<u32>, v: u32, w: u32) -> bool {
    let mut seen = vec![false; g.vertex_count()];
    let mut stack = vec![v];
    seen[v as usize] = true;
    while let Some(x) = stack.pop() {
        if x == w {
            return true;
        }
        for &y in g.neighbours(&x).unwrap() {
            if !seen[y as usize] {
                seen[y as usize] = true;
                stack.push(y);
            }
        }
    }
    false
}

#[test]
fn tarjan_matches_kosaraju() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for n in 0..40 {
        for &p in &[0.02, 0.05, 0.1, 0.3] {
            let g = random_digraph(n, p, &mut rng);
            assert_eq!(TarjanScc.compute(&g), KosarajuScc.compute(&g), "{}", g);
        }
    }
}

#[test]
fn scc_is_mutual_reachability() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 1..15 {
        let g = random_digraph(n, 0.15, &mut rng);
        let scc = TarjanScc.compute(&g);
        for v in 0..n {
            for w in 0..n {
                let together = scc.component_of(&v) == scc.component_of(&w);
                assert_eq!(together, reaches(&g, v, w) && reaches(&g, w, v));
            }
        }
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 0..20 {
        let g = random_digraph(n, 0.3, &mut rng);
        assert_eq!(g.transpose().transpose(), g);
        let h = random_undirected(n, 0.3, &mut rng);
        assert_eq!(h.transpose(), h);
        assert_eq!(h.transpose().transpose(), h);
    }
}

#[test]
fn transpose_keeps_components() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in 0..20 {
        let g = random_digraph(n, 0.1, &mut rng);
        assert_eq!(TarjanScc.compute(&g), TarjanScc.compute(&g.transpose()));
    }
}

#[test]
fn scc_covers_every_vertex_once() {
    let mut rng = StdRng::seed_from_u64(13);
    for n in 0..30 {
        let g = random_digraph(n, 0.1, &mut rng);
        for algorithm in [SccAlgorithm::Tarjan, SccAlgorithm::Kosaraju] {
            let scc = g.strongly_connected_components(algorithm);
            let mut covered: Vec<u32> = scc.iter().flatten().copied().collect();
            covered.sort_unstable();
            assert_eq!(covered, g.vertices());
            // revalidates: no vertex twice
            assert_eq!(Scc::new(scc.components().to_vec()).unwrap(), scc);
        }
    }
}

#[test]
fn bcc_covers_every_edge_direction_once() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(17);
    for n in 0..30 {
        for &p in &[0.05, 0.15, 0.4] {
            let g = random_undirected(n, p, &mut rng);
            let bcc = TarjanBcc.compute(&g);
            let edges: Vec<(u32, u32)> = g.edges().map(|(&u, &v)| (u, v)).collect();
            assert_eq!(bcc.edges(), edges.as_slice());
            assert_eq!(Bcc::new(bcc.components().to_vec()).unwrap(), bcc);
        }
    }
}

#[test]
fn bridges_disconnect_the_graph() {
    let mut rng = StdRng::seed_from_u64(19);
    for n in 2..16 {
        let g = random_undirected(n, 0.2, &mut rng);
        let bcc = TarjanBcc.compute(&g);
        let bridges = bcc.bridges();
        for (u, v) in g.edges().map(|(&u, &v)| (u, v)).filter(|&(u, v)| u < v) {
            let without: Vec<_> = g
                .edges()
                .map(|(&x, &y)| (x, y))
                .filter(|&(x, y)| (x, y) != (u, v) && (x, y) != (v, u))
                .collect();
            let h = Graph::from_edges((0..n).collect(), without, false).unwrap();
            assert_eq!(bridges.contains(&(u, v)), !reaches(&h, u, v));
        }
    }
}

#[test]
fn self_loop_only_is_a_singleton() {
    let g = Graph::new(vec![0, 1, 2], vec![(0, vec![0]), (1, vec![2])], true).unwrap();
    for algorithm in [SccAlgorithm::Tarjan, SccAlgorithm::Kosaraju] {
        let scc = g.strongly_connected_components(algorithm);
        assert_eq!(scc.components(), &[vec![0], vec![1], vec![2]]);
    }
}

#[test]
fn directed_scenario() {
    init_logger();
    let mut g = example::directed();
    let expected = Scc::new(vec![
        vec!['A', 'B', 'C'],
        vec!['D', 'E'],
        vec!['F'],
        vec!['G', 'H'],
        vec!['I'],
    ])
    .unwrap();
    let tarjan = TarjanScc.compute(&g);
    let kosaraju = KosarajuScc.compute(&g);
    assert_eq!(tarjan, expected);
    assert_eq!(kosaraju, expected);
    assert_eq!(tarjan.to_string(), "(A,B,C)(D,E)(F)(G,H)(I)");
    g.attach_scc(tarjan).unwrap();
    assert_eq!(g.scc(), Some(&expected));
}

#[test]
fn undirected_scenario() {
    let mut g = example::undirected();
    let expected = Bcc::new(vec![
        vec![(1, 2), (2, 1), (2, 3), (3, 2), (1, 3), (3, 1)],
        vec![(1, 6), (6, 1)],
        vec![(2, 4), (4, 2), (4, 5), (5, 4), (2, 5), (5, 2)],
    ])
    .unwrap();
    let bcc = TarjanBcc.compute(&g);
    assert_eq!(bcc, expected);
    assert_eq!(bcc.to_string(), "(1-2,1-3,2-3)(1-6)(2-4,2-5,4-5)");
    assert_eq!(bcc.articulation_points(), vec![1, 2]);
    assert_eq!(bcc.bridges(), vec![(1, 6)]);
    g.attach_bcc(bcc).unwrap();
    assert_eq!(g.bcc(), Some(&expected));
}

#[test]
fn isolated_vertex() {
    let g = Graph::from_edges(vec![1, 2, 3, 9], vec![(1, 2), (2, 3)], false).unwrap();
    let scc = TarjanScc.compute(&g);
    assert_eq!(scc.component_of(&9).map(|i| &scc[i]), Some(&[9][..]));
    let bcc = TarjanBcc.compute(&g);
    assert!(bcc.edges().iter().all(|&(u, v)| u != 9 && v != 9));
    assert_eq!(bcc.len(), 2);
}

#[test]
fn string_vertices() {
    let g = Graph::from_edges(
        vec!["x".to_string(), "y".to_string(), "z".to_string()],
        vec![
            ("x".to_string(), "y".to_string()),
            ("y".to_string(), "x".to_string()),
            ("y".to_string(), "z".to_string()),
        ],
        true,
    )
    .unwrap();
    let scc = KosarajuScc.compute(&g);
    assert_eq!(scc.to_string(), "(x,y)(z)");
}

#[test]
fn concurrent_decompositions() {
    let mut rng = StdRng::seed_from_u64(23);
    let g = random_digraph(300, 0.01, &mut rng);
    let h = random_undirected(300, 0.01, &mut rng);
    let (tarjan, kosaraju, bcc) = std::thread::scope(|s| {
        let tarjan = s.spawn(|| TarjanScc.compute(&g));
        let kosaraju = s.spawn(|| KosarajuScc.compute(&g));
        let bcc = s.spawn(|| TarjanBcc.compute(&h));
        (
            tarjan.join().unwrap(),
            kosaraju.join().unwrap(),
            bcc.join().unwrap(),
        )
    });
    assert_eq!(tarjan, kosaraju);
    assert_eq!(tarjan, TarjanScc.compute(&g));
    assert_eq!(bcc, TarjanBcc.compute(&h));
}
