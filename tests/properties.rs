use ironfold::testing::assert_split_invariant;
use ironfold::*;
use proptest::prelude::*;

fn integral_floats() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000i32..1_000, 0..48)
        .prop_map(|xs| xs.into_iter().map(f64::from).collect())
}

fn updates() -> impl Strategy<Value = Vec<(u8, Change<String>)>> {
    prop::collection::vec((0u8..3, any::<bool>(), 0u8..10), 0..32).prop_map(|raw| {
        raw.into_iter()
            .map(|(key, set, v)| {
                let value = format!("v{v}");
                (key, if set { Change::Set(value) } else { Change::Append(value) })
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn statistics_split_invariant(xs in integral_floats()) {
        assert_split_invariant(&Statistics, &xs);
    }

    #[test]
    fn weighted_average_split_invariant(
        pairs in prop::collection::vec((-100i32..100, 0i32..10), 0..32)
    ) {
        let pairs: Vec<(f64, f64)> = pairs
            .into_iter()
            .map(|(v, w)| (f64::from(v), f64::from(w)))
            .collect();
        assert_split_invariant(&WeightedAverage, &pairs);
    }

    #[test]
    fn median_split_invariant(xs in integral_floats()) {
        assert_split_invariant(&Median, &xs);
    }

    #[test]
    fn count_sum_distinct_split_invariant(xs in prop::collection::vec(0i64..20, 0..48)) {
        assert_split_invariant(&Count, &xs);
        assert_split_invariant(&Sum::<i64>::new(), &xs);
        assert_split_invariant(&DistinctCount::<i64>::new(), &xs);
    }

    #[test]
    fn partitioning_split_invariant(xs in prop::collection::vec(0i64..20, 0..48)) {
        assert_split_invariant(&partitioning_by(|n: &i64| n % 2 == 0, ToVec), &xs);
        assert_split_invariant(&partitioning_by(|n: &i64| *n < 5, Sum::<i64>::new()), &xs);
    }

    #[test]
    fn top_n_split_invariant(
        xs in prop::collection::vec((0u8..4, 0u8..255), 0..40),
        n in 0usize..6,
    ) {
        // few distinct ranks, so most members tie
        assert_split_invariant(&TopN::new(n, |x: &(u8, u8)| x.0), &xs);
    }

    #[test]
    fn merge_resolver_split_invariant(history in updates()) {
        assert_split_invariant(&MergeConflictResolver, &history);
    }

    #[test]
    fn parallel_runner_matches_sequential(
        history in updates(),
        partitions in 1usize..9,
        fanout in 2usize..5,
    ) {
        let seq = Runner::sequential().run(&MergeConflictResolver, history.clone()).unwrap();
        let par = Runner::parallel(partitions)
            .with_fanout(fanout)
            .run(&MergeConflictResolver, history)
            .unwrap();
        prop_assert_eq!(seq, par);
    }
}
