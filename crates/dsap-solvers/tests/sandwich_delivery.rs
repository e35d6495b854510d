use dsap_solvers::Strategy;
use dsap_solvers::domain::sandwich_delivery::{
    SandwichContext, max_sandwiches, max_sandwiches_iterative, max_sandwiches_memoized,
    max_sandwiches_recursive,
};
use dsap_solvers::infra::sandwich_io::load_sandwich_context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use tempfile::TempDir;

const FIFTY_DAY_ORDERS: [i32; 50] = [
    15, 30, 23, 6, 17, 29, 9, 30, 9, 1, 5, 15, 7, 26, 12, 9, 6, 19, 18, 25, 2, 3, 8, 28, 19, 10, 4,
    15, 18, 21, 20, 15, 26, 27, 18, 6, 2, 9, 20, 14, 10, 6, 15, 7, 1, 25, 20, 27, 21, 8,
];

const FIFTY_DAY_CAPS: [i32; 50] = [
    143, 140, 138, 137, 137, 131, 128, 124, 122, 120, 120, 120, 115, 111, 110, 109, 109, 107, 105,
    99, 97, 93, 87, 81, 79, 74, 69, 69, 63, 62, 60, 60, 58, 58, 56, 52, 52, 47, 42, 38, 36, 33, 30,
    27, 24, 18, 13, 9, 8, 2,
];

/// Random context whose caps decrease with the run length
fn random_context(rng: &mut StdRng, days: usize) -> SandwichContext {
    let orders = (0..days).map(|_| rng.gen_range(0..30)).collect();
    let mut cap = rng.gen_range(10..40);
    let caps = (0..days)
        .map(|_| {
            cap = (cap - rng.gen_range(0..6)).max(0);
            cap
        })
        .collect();
    SandwichContext::new(orders, caps).unwrap()
}

#[test]
fn test_fixture_files() {
    let dir = TempDir::new().unwrap();
    let cases = [
        ("eg1.txt", "4\n10 1 7 7\n8 4 2 1\n", 19),
        ("eg2.txt", "5\n10 9 9 3 2\n9 7 5 3 1\n", 25),
        ("eg3.txt", "8\n5 10 7 5 5 10 3 6\n7 5 5 5 5 5 4 2\n", 36),
    ];

    for (name, contents, expected) in cases {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        let context = load_sandwich_context(&path).unwrap();

        for strategy in Strategy::ALL {
            assert_eq!(max_sandwiches(&context, strategy), expected, "{name} {strategy}");
        }
    }
}

#[test]
fn test_fifty_day_context() {
    let context = SandwichContext::new(FIFTY_DAY_ORDERS.to_vec(), FIFTY_DAY_CAPS.to_vec()).unwrap();

    assert_eq!(max_sandwiches_memoized(&context), 735);
    assert_eq!(max_sandwiches_iterative(&context), 735);
}

#[test]
fn test_strategies_agree_on_random_contexts() {
    let mut rng = StdRng::seed_from_u64(19);

    for _ in 0..150 {
        let days = rng.gen_range(0..=14);
        let context = random_context(&mut rng, days);

        let recursive = max_sandwiches_recursive(&context);
        assert_eq!(recursive, max_sandwiches_memoized(&context));
        assert_eq!(recursive, max_sandwiches_iterative(&context));
    }
}

#[test]
fn test_total_never_exceeds_orders() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..50 {
        let days = rng.gen_range(1..=60);
        let context = random_context(&mut rng, days);
        let ordered: i64 = context.orders().iter().map(|&o| i64::from(o)).sum();

        let best = max_sandwiches_iterative(&context);
        assert!(best >= 0);
        assert!(best <= ordered);
    }
}
