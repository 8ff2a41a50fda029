use forestsum::error::Error;
use forestsum::union_find::UnionFind;
use proptest::prelude::*;

/// Element count plus a sequence of union pairs inside `0..n`.
fn unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..40usize).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..80)))
}

proptest! {
    #[test]
    fn test_union_find_matches_label_model((n, pairs) in unions()) {
        let mut uf = UnionFind::new(n).unwrap();
        // Naive model: every element carries its group label.
        let mut label: Vec<usize> = (0..n).collect();

        prop_assert_eq!(uf.component_count(), n);

        for (x, y) in pairs {
            let before = uf.component_count();
            let was_separate = label[x] != label[y];

            prop_assert_eq!(uf.union(x, y).unwrap(), was_separate);
            if was_separate {
                let (from, to) = (label[y], label[x]);
                for l in label.iter_mut() {
                    if *l == from {
                        *l = to;
                    }
                }
                prop_assert_eq!(uf.component_count(), before - 1);
            } else {
                prop_assert_eq!(uf.component_count(), before);
            }
            prop_assert!(uf.connected(x, y).unwrap());

            // Repeating the same union is a no-op.
            prop_assert!(!uf.union(x, y).unwrap());
            prop_assert_eq!(uf.component_count(), before - usize::from(was_separate));
        }

        let mut distinct = label.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(uf.component_count(), distinct.len());

        for a in 0..n {
            for b in 0..n {
                prop_assert_eq!(uf.connected(a, b).unwrap(), label[a] == label[b]);
            }
        }
    }

    #[test]
    fn test_find_is_idempotent((n, pairs) in unions()) {
        let mut uf = UnionFind::new(n).unwrap();
        for (x, y) in pairs {
            uf.union(x, y).unwrap();
        }

        for x in 0..n {
            let shared = uf.root(x).unwrap();
            let r = uf.find(x).unwrap();
            prop_assert_eq!(shared, r);
            prop_assert_eq!(uf.find(r).unwrap(), r);
            prop_assert_eq!(uf.root(x).unwrap(), r);
        }
    }

    #[test]
    fn test_union_find_out_of_range_is_harmless(
        (n, pairs) in unions(),
        extra in 0..10usize,
    ) {
        let mut uf = UnionFind::new(n).unwrap();
        for (x, y) in pairs {
            uf.union(x, y).unwrap();
        }
        let count = uf.component_count();
        let bad = n + extra;
        let err = Error::OutOfRange { index: bad, len: n };

        prop_assert_eq!(uf.find(bad), Err(err));
        prop_assert_eq!(uf.union(0, bad), Err(err));
        prop_assert_eq!(uf.connected(bad, 0), Err(err));
        prop_assert_eq!(uf.component_count(), count);
    }
}

use forestsum::fenwick::FenwickTree;

/// Initial values plus a sequence of `(position, delta)` updates, 1-based.
fn updates() -> impl Strategy<Value = (Vec<i64>, Vec<(usize, i64)>)> {
    prop::collection::vec(-1000..1000i64, 1..64).prop_flat_map(|values| {
        let n = values.len();
        (
            Just(values),
            prop::collection::vec((1..=n, -1000..1000i64), 0..64),
        )
    })
}

proptest! {
    #[test]
    fn test_fenwick_matches_vec_model((values, ops) in updates()) {
        let n = values.len();
        let mut ft = FenwickTree::new(n).unwrap();
        for (i, &v) in values.iter().enumerate() {
            ft.update(i + 1, v).unwrap();
        }
        let mut model = values.clone();

        for (i, delta) in ops {
            let before: Vec<i64> = (1..=n).map(|j| ft.range_sum(j, j).unwrap()).collect();
            ft.update(i, delta).unwrap();
            model[i - 1] += delta;

            for j in 1..=n {
                let expected = if j == i { before[j - 1] + delta } else { before[j - 1] };
                prop_assert_eq!(ft.range_sum(j, j).unwrap(), expected);
            }
        }

        let mut acc = 0;
        prop_assert_eq!(ft.prefix_sum(0).unwrap(), 0);
        for i in 1..=n {
            acc += model[i - 1];
            prop_assert_eq!(ft.prefix_sum(i).unwrap(), acc);
            prop_assert_eq!(ft.get(i).unwrap(), model[i - 1]);
        }
        prop_assert_eq!(ft.prefix_sum(n).unwrap(), ft.range_sum(1, n).unwrap());
        prop_assert_eq!(ft.total(), acc);
        prop_assert_eq!(ft.to_vec(), model);
    }

    #[test]
    fn test_fenwick_range_additivity(values in prop::collection::vec(-1000..1000i64, 2..64)) {
        let n = values.len();
        let ft = FenwickTree::from_slice(&values).unwrap();

        for l in 1..n {
            for r in (l + 1)..=n {
                let whole = ft.range_sum(l, r).unwrap();
                let expected: i64 = values[l - 1..r].iter().sum();
                prop_assert_eq!(whole, expected);
                for m in l..r {
                    prop_assert_eq!(
                        whole,
                        ft.range_sum(l, m).unwrap() + ft.range_sum(m + 1, r).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn test_from_slice_matches_sequential_updates(
        values in prop::collection::vec(any::<i32>(), 1..128),
    ) {
        let values: Vec<i64> = values.into_iter().map(i64::from).collect();
        let built = FenwickTree::from_slice(&values).unwrap();
        let mut stepped = FenwickTree::new(values.len()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            stepped.update(i + 1, v).unwrap();
        }

        for i in 0..=values.len() {
            prop_assert_eq!(built.prefix_sum(i).unwrap(), stepped.prefix_sum(i).unwrap());
        }
    }

    #[test]
    fn test_set_overwrites_single_position(
        (values, ops) in updates(),
    ) {
        let mut ft = FenwickTree::from_slice(&values).unwrap();
        let mut model = values.clone();
        for (i, value) in ops {
            ft.set(i, value).unwrap();
            model[i - 1] = value;
        }
        prop_assert_eq!(ft.to_vec(), model);
    }

    #[test]
    fn test_lower_bound_matches_linear_scan(
        values in prop::collection::vec(0..50i64, 1..64),
        target in -10..2000i64,
    ) {
        let ft = FenwickTree::from_slice(&values).unwrap();

        let mut expected = 0;
        let mut acc = 0;
        for (i, &v) in values.iter().enumerate() {
            acc += v;
            if acc <= target {
                expected = i + 1;
            }
        }
        prop_assert_eq!(ft.lower_bound(target), expected);
    }

    #[test]
    fn test_fenwick_rejects_out_of_bounds(
        values in prop::collection::vec(-1000..1000i64, 1..32),
        extra in 1..10usize,
    ) {
        let n = values.len();
        let mut ft = FenwickTree::from_slice(&values).unwrap();
        let bad = n + extra;

        prop_assert_eq!(ft.update(bad, 1), Err(Error::OutOfRange { index: bad, len: n }));
        prop_assert_eq!(ft.update(0, 1), Err(Error::OutOfRange { index: 0, len: n }));
        prop_assert_eq!(ft.prefix_sum(bad), Err(Error::OutOfRange { index: bad, len: n }));
        prop_assert_eq!(
            ft.range_sum(1, bad),
            Err(Error::InvalidRange { lo: 1, hi: bad, len: n })
        );
        prop_assert_eq!(
            ft.range_sum(bad, 1),
            Err(Error::InvalidRange { lo: bad, hi: 1, len: n })
        );
        prop_assert_eq!(ft.to_vec(), values);
    }
}
