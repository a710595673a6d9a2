use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use tile_pathfinding::*;

const N: i32 = 64;
const N_SCENARIOS: usize = 32;

/// A fixed random map with a sprinkling of obstacles and surcharged cells, along with start/goal
/// pairs that are known to be connected.
fn random_problem(config: &SearchConfig) -> (PathGrid, Vec<(CellIndex, CellIndex)>) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut grid = PathGrid::with_size(N, N).unwrap();
    for c in grid.cells().collect::<Vec<_>>() {
        grid.set_walkable(c, !rng.gen_bool(0.25));
        if rng.gen_bool(0.1) {
            grid.set_cost(c, rng.gen_range(1..5) as f32);
        }
    }
    let components = Components::new(&grid, config);
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let start = CellIndex::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let end = CellIndex::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if grid.is_passable(start) && components.reachable(start, end) {
            scenarios.push((start, end));
        }
    }
    (grid, scenarios)
}

fn bench_solver<S, FS>(c: &mut Criterion, solver_name: &str, create_solver: FS)
where
    S: GridSolver,
    FS: Fn(SearchConfig) -> S,
{
    for movement in [MovementModel::FourDirectional, MovementModel::EightDirectional] {
        let solver = create_solver(SearchConfig::new(movement));
        let (grid, scenarios) = random_problem(solver.config());
        let diag_str = if movement.allows_diagonal() {
            "8-grid"
        } else {
            "4-grid"
        };
        c.bench_function(format!("random {N}x{N}, {solver_name} {diag_str}").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &scenarios {
                    black_box(solver.find_path(&grid, *start, *end));
                }
            })
        });
    }
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, "Astar", AstarSolver::with_config);
}

fn bench_weighted_astar(c: &mut Criterion) {
    bench_solver(c, "Weighted Astar", |config| AstarSolver {
        config,
        heuristic_factor: 1.5,
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    bench_solver(c, "Dijkstra", |config| DijkstraSolver { config });
}

fn bench_components(c: &mut Criterion) {
    let config = SearchConfig::new(MovementModel::EightDirectional);
    let (grid, _) = random_problem(&config);
    c.bench_function(format!("random {N}x{N}, components 8-grid").as_str(), |b| {
        b.iter(|| black_box(Components::new(&grid, &config)))
    });
}

criterion_group!(
    benches,
    bench_astar,
    bench_weighted_astar,
    bench_dijkstra,
    bench_components
);
criterion_main!(benches);
