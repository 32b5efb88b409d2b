use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use skyscrapers_checker::validation::{check_columns, check_horizontal_visibility};
use skyscrapers_checker::{check_board, explain_board, Board};
use std::hint::black_box;

/// Cyclic latin square of order `n` inside an empty hint frame.
fn generate_board(n: usize) -> Board {
    let frame = "*".repeat(n + 2);
    let mut rows = vec![frame.clone()];
    for r in 0..n {
        let mut row = String::from("*");
        row.extend((0..n).map(|c| char::from(b'0' + ((r + c) % n + 1) as u8)));
        row.push('*');
        rows.push(row);
    }
    rows.push(frame);
    Board::from_lines(rows).expect("generated board")
}

fn generate_scenario(n: usize, scenario: &str) -> Board {
    let board = generate_board(n);
    match scenario {
        "valid" => board,
        "unfinished" => {
            let text = board.to_string();
            let last = text.rfind(|c: char| c.is_ascii_digit()).expect("interior cell");
            let mut text = text.into_bytes();
            text[last] = b'?';
            Board::parse(&String::from_utf8(text).expect("ascii board")).expect("board")
        }
        _ => board,
    }
}

fn bench_board_verdict(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_verdict");

    for &n in &[4, 6, 9] {
        for scenario in ["valid", "unfinished"] {
            let board = generate_scenario(n, scenario);
            group.bench_with_input(
                BenchmarkId::new(scenario, n),
                &board,
                |b, board| b.iter(|| check_board(black_box(board))),
            );
        }
    }

    group.finish();
}

fn bench_axes(c: &mut Criterion) {
    let board = generate_board(9);

    c.bench_function("rows_9x9", |b| {
        b.iter(|| check_horizontal_visibility(black_box(&board)))
    });
    c.bench_function("columns_9x9", |b| {
        b.iter(|| check_columns(black_box(&board)))
    });
    c.bench_function("explain_9x9", |b| b.iter(|| explain_board(black_box(&board))));
}

criterion_group!(benches, bench_board_verdict, bench_axes);
criterion_main!(benches);
