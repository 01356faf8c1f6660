use anyhow::Result;
use ironfold::testing::{assert_groups_cover, sorted_entries};
use ironfold::*;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
struct Sale {
    category: String,
    year: u16,
    product: String,
    revenue: f64,
}

fn sales() -> Vec<Sale> {
    let s = |category: &str, year, product: &str, revenue| Sale {
        category: category.to_string(),
        year,
        product: product.to_string(),
        revenue,
    };
    vec![
        s("Electronics", 2023, "Laptop", 1200.0),
        s("Books", 2023, "Novel", 20.0),
        s("Electronics", 2023, "Phone", 800.0),
        s("Electronics", 2024, "Phone", 900.0),
        s("Books", 2023, "Atlas", 35.5),
        s("Electronics", 2023, "Laptop", 200.0),
    ]
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[test]
fn word_frequency() -> Result<()> {
    let ws = words("The quick brown fox jumps over the lazy dog and the end");
    let freq = reduce(&grouping_by(|w: &String| w.clone(), Count), ws)?;

    assert_eq!(freq["the"], 3);
    assert_eq!(freq["fox"], 1);
    assert_eq!(freq.values().sum::<u64>(), 12);
    Ok(())
}

#[test]
fn groups_partition_the_input() -> Result<()> {
    let xs: Vec<i32> = (0..50).map(|i| (i * 7) % 13).collect();
    let groups = reduce(&grouping_by(|x: &i32| x % 4, ToVec), xs.clone())?;

    assert_eq!(groups.len(), 4);
    assert_groups_cover(&groups, &xs);
    Ok(())
}

#[test]
fn grouping_empty_input_is_empty_map() -> Result<()> {
    let groups = reduce(&grouping_by(|x: &i32| *x, Count), Vec::<i32>::new())?;
    assert!(groups.is_empty());
    Ok(())
}

#[test]
fn string_length_bins() -> Result<()> {
    let ws = vec!["a", "bb", "cc", "ddd", "e"];
    let bins = reduce(&grouping_by(|w: &&str| w.len(), Joining::new(",")), ws)?;
    assert_eq!(
        sorted_entries(bins),
        vec![
            (1, "a,e".to_string()),
            (2, "bb,cc".to_string()),
            (3, "ddd".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn multi_level_sales_summary() -> Result<()> {
    let summarize = grouping_by(
        |s: &Sale| s.category.clone(),
        grouping_by(
            |s: &Sale| s.year,
            teeing(
                mapping(|s: Sale| s.revenue, Sum::<f64>::new()),
                mapping(|s: Sale| s.product, DistinctCount::<String>::new()),
                |revenue: f64, products: u64| (revenue, products),
            ),
        ),
    );
    let summary = reduce(&summarize, sales())?;

    assert_eq!(summary.len(), 2);
    assert_eq!(summary["Electronics"][&2023], (2200.0, 2));
    assert_eq!(summary["Electronics"][&2024], (900.0, 1));
    assert_eq!(summary["Books"][&2023], (55.5, 2));
    assert!(!summary["Books"].contains_key(&2024));
    Ok(())
}

#[test]
fn grouping_propagates_downstream_errors() {
    let per_category = grouping_by(
        |s: &Sale| s.category.clone(),
        filtering(
            |s: &Sale| s.revenue > 100.0,
            mapping(|s: Sale| s.revenue, Median),
        ),
    );
    // every Books sale is filtered out, so its median has no input
    let err = reduce(&per_category, sales()).unwrap_err();
    assert_eq!(err, ReduceError::EmptyInput { reducer: "Median" });
}

#[test]
fn composite_grouping_matches_nested() -> Result<()> {
    let composite = CompositeGroupingBy::new(
        |s: &Sale| s.category.clone(),
        |s: &Sale| s.year,
        mapping(|s: Sale| s.revenue, Sum::<f64>::new()),
    );
    let nested = grouping_by(
        |s: &Sale| s.category.clone(),
        grouping_by(|s: &Sale| s.year, mapping(|s: Sale| s.revenue, Sum::<f64>::new())),
    );

    let groups = reduce(&composite, sales())?;
    assert_eq!(groups.len(), 3);
    assert!(!groups.is_empty());
    assert_eq!(groups.get(&"Electronics".to_string(), &2023), Some(&2200.0));
    assert_eq!(groups.get(&"Books".to_string(), &2024), None);
    assert_eq!(groups.outer_keys().count(), 2);

    let mut electronics: Vec<(u16, f64)> = groups
        .inner(&"Electronics".to_string())
        .map(|(year, total)| (*year, *total))
        .collect();
    electronics.sort_by_key(|(year, _)| *year);
    assert_eq!(electronics, vec![(2023, 2200.0), (2024, 900.0)]);

    let expected: HashMap<String, HashMap<u16, f64>> = reduce(&nested, sales())?;
    assert_eq!(groups.into_nested(), expected);
    Ok(())
}

#[test]
fn composite_grouping_parallel() -> Result<()> {
    let composite = CompositeGroupingBy::new(
        |s: &Sale| s.category.clone(),
        |s: &Sale| s.year,
        Count,
    );
    let seq = Runner::sequential().run(&composite, sales())?;
    let par = Runner::parallel(4).run(&composite, sales())?;
    assert_eq!(seq.get(&"Electronics".to_string(), &2023), Some(&3));
    assert_eq!(seq.into_nested(), par.into_nested());
    Ok(())
}

#[test]
fn composite_groups_compare_by_cells() -> Result<()> {
    let rows: Vec<(u8, u8)> = (0..8)
        .flat_map(|outer| (0..16).map(move |inner| (outer, inner)))
        .collect();
    let composite = CompositeGroupingBy::new(|r: &(u8, u8)| r.0, |r: &(u8, u8)| r.1, Count);

    let first = reduce(&composite, rows.clone())?;
    let second = reduce(&composite, rows.iter().rev().copied())?;
    let par = Runner::parallel(5).run(&composite, rows.clone())?;
    assert_eq!(first, second);
    assert_eq!(first, par);
    assert_eq!(first.len(), 128);

    let fewer = reduce(&composite, rows[1..].to_vec())?;
    assert_ne!(first, fewer);
    Ok(())
}

#[test]
fn composite_lookups_borrow_keys() -> Result<()> {
    let composite = CompositeGroupingBy::new(
        |s: &Sale| s.category.clone(),
        |s: &Sale| s.year,
        mapping(|s: Sale| s.revenue, Sum::<f64>::new()),
    );
    let groups = reduce(&composite, sales())?;
    let electronics = "Electronics".to_string();

    let mut years: Vec<(u16, f64)> = groups.inner(&electronics).map(|(y, r)| (*y, *r)).collect();
    years.sort_by_key(|(y, _)| *y);
    let via_get: Vec<(u16, f64)> = years
        .iter()
        .filter_map(|(y, _)| groups.get(&electronics, y).map(|r| (*y, *r)))
        .collect();
    assert_eq!(years, via_get);

    assert_eq!(groups.inner(&"Garden".to_string()).count(), 0);
    assert_eq!(groups.get(&"Garden".to_string(), &2023), None);
    assert_eq!(groups.cells().count(), groups.len());
    Ok(())
}

#[test]
fn partition_even_odd() -> Result<()> {
    let xs = vec![1, 2, 3, 4];
    let parts = reduce(&partitioning_by(|n: &i32| n % 2 == 0, ToVec), xs.clone())?;

    assert_eq!(parts.on_true, vec![2, 4]);
    assert_eq!(parts.on_false, vec![1, 3]);
    assert_eq!(parts.get(true), &vec![2, 4]);
    assert_eq!(parts.iter().count(), 2);
    assert_groups_cover(&parts.into_map(), &xs);
    Ok(())
}

#[test]
fn partition_empty_side_is_present() -> Result<()> {
    let parts = reduce(&partitioning_by(|n: &i32| *n > 100, Count), vec![1, 2, 3])?;
    assert_eq!(parts.on_true, 0);
    assert_eq!(parts.on_false, 3);

    let empty = reduce(&partitioning_by(|n: &i32| *n > 0, ToVec), Vec::<i32>::new())?;
    let map = empty.into_map();
    assert_eq!(map.len(), 2);
    assert!(map.values().all(Vec::is_empty));
    Ok(())
}

#[test]
fn partition_and_summarize() -> Result<()> {
    let lengths: Vec<u32> = vec![3, 8, 5, 12, 2];
    let parts = reduce(&partitioning_by(|n: &u32| *n >= 5, Statistics), lengths)?;

    assert_eq!(parts.on_true.count, 3);
    assert_eq!(parts.on_true.sum, 25.0);
    assert_eq!(parts.on_false.min, 2.0);
    assert_eq!(parts.on_false.max, 3.0);
    Ok(())
}
