use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::move_generation::perft::{perft_legal, perft_multi_threaded};
use mailbox_chess::utils::random_playout::random_playout;
use mailbox_chess::{LegalMoveGenerator, Position};

/// One perft position with its known node count at a fixed depth.
struct PerftCase {
    name: &'static str,
    fen: &'static str,
    depth: u8,
    nodes: u64,
}

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

// Kings and rooks at home with empty back ranks.
const OPEN_BACK_RANKS_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

const QUICK: &[PerftCase] = &[
    PerftCase { name: "startpos", fen: STARTING_POSITION_FEN, depth: 3, nodes: 8_902 },
    PerftCase { name: "kiwipete", fen: KIWIPETE_FEN, depth: 2, nodes: 2_039 },
    PerftCase { name: "open_back_ranks", fen: OPEN_BACK_RANKS_FEN, depth: 2, nodes: 568 },
    PerftCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 3,
        nodes: 2_812,
    },
];

const STANDARD: &[PerftCase] = &[
    PerftCase { name: "startpos", fen: STARTING_POSITION_FEN, depth: 4, nodes: 197_281 },
    PerftCase { name: "kiwipete", fen: KIWIPETE_FEN, depth: 3, nodes: 97_862 },
    PerftCase { name: "open_back_ranks", fen: OPEN_BACK_RANKS_FEN, depth: 3, nodes: 13_744 },
    PerftCase {
        name: "promotions",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        depth: 3,
        nodes: 9_467,
    },
];

fn standard_suite() -> bool {
    std::env::var("MAILBOX_BENCH_SUITE").is_ok_and(|value| value.eq_ignore_ascii_case("standard"))
}

fn load(case: &PerftCase) -> Position {
    let position = Position::from_fen(case.fen).expect("benchmark FEN should parse");
    let counted = perft_legal(&position, case.depth).expect("perft should run");
    assert_eq!(counted.nodes as u64, case.nodes, "node mismatch for {}", case.name);
    position
}

fn bench_perft(c: &mut Criterion) {
    let cases = if standard_suite() { STANDARD } else { QUICK };
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in cases {
        let position = load(case);
        group.throughput(Throughput::Elements(case.nodes));

        group.bench_function(BenchmarkId::new("single", case.name), |b| {
            b.iter(|| perft_legal(black_box(&position), case.depth).map(|counts| counts.nodes))
        });
        group.bench_function(BenchmarkId::new("threaded", case.name), |b| {
            b.iter(|| {
                perft_multi_threaded(&LegalMoveGenerator, black_box(&position), case.depth)
                    .map(|counts| counts.nodes)
            })
        });
    }

    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let start = Position::new_game();
    c.bench_function("random_playout_200_plies", |b| {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        b.iter(|| random_playout(black_box(&start), 200, &mut rng).map(|visited| visited.len()))
    });
}

criterion_group!(perft_benches, bench_perft, bench_random_playout);
criterion_main!(perft_benches);
