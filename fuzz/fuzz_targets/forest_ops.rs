#![no_main]
use forestsum::{FenwickTree, UnionFind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, Vec<(u8, u8, i32)>)| {
    let (n_raw, ops) = data;
    let n = n_raw as usize % 64 + 1;

    let mut uf = UnionFind::new(n).unwrap();
    let mut label: Vec<usize> = (0..n).collect();

    let mut ft = FenwickTree::new(n).unwrap();
    let mut model = vec![0i64; n];

    for (a, b, delta) in ops {
        let (x, y) = (a as usize, b as usize);

        // Indices past `n` must be rejected without touching state.
        if x >= n || y >= n {
            let count = uf.component_count();
            assert!(uf.union(x, y).is_err());
            assert_eq!(uf.component_count(), count);
            continue;
        }

        let separate = label[x] != label[y];
        assert_eq!(uf.union(x, y).unwrap(), separate);
        if separate {
            let (from, to) = (label[y], label[x]);
            label.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);
        }
        assert!(uf.connected(x, y).unwrap());

        ft.update(x + 1, delta as i64).unwrap();
        model[x] += delta as i64;

        let (l, r) = (x.min(y) + 1, x.max(y) + 1);
        let expected: i64 = model[l - 1..r].iter().sum();
        assert_eq!(ft.range_sum(l, r).unwrap(), expected);
    }

    let mut distinct = label;
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(uf.component_count(), distinct.len());
    assert_eq!(ft.to_vec(), model);
});
