use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mailbox_chess::game_state::chess_rules::*;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8_902],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2_039],
    },
    BenchCase {
        name: "rook_endgame",
        fen: ROOK_ENDGAME_FEN,
        expected_nodes: &[14, 191, 2_812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8_902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2_039, 97_862],
    },
    BenchCase {
        name: "rook_endgame",
        fen: ROOK_ENDGAME_FEN,
        expected_nodes: &[14, 191, 2_812, 43_238, 674_624],
    },
    BenchCase {
        name: "mirrored_castling",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        expected_nodes: &[6, 264, 9_467, 422_333],
    },
    BenchCase {
        name: "promotion_stress",
        fen: PROMOTION_STRESS_FEN,
        expected_nodes: &[44, 1_486, 62_379, 2_103_487],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("MAILBOX_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game;
            let warmup = perft(&mut warmup_game, depth).expect("perft should run");
            assert_eq!(
                warmup, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    let mut bench_game = game;
                    b.iter(|| {
                        let nodes = perft(black_box(&mut bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
