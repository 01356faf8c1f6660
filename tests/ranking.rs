use anyhow::Result;
use ironfold::testing::{assert_f64_near, sorted_entries};
use ironfold::*;
use ordered_float::OrderedFloat;

#[derive(Clone, Debug, PartialEq)]
struct Product {
    name: &'static str,
    category: &'static str,
    rating: f64,
}

fn catalog() -> Vec<Product> {
    let p = |name, category, rating| Product {
        name,
        category,
        rating,
    };
    vec![
        p("Laptop", "Electronics", 4.5),
        p("Phone", "Electronics", 4.3),
        p("Cable", "Electronics", 3.1),
        p("Monitor", "Electronics", 4.8),
        p("Novel", "Books", 4.1),
        p("Atlas", "Books", 3.9),
    ]
}

#[test]
fn weighted_average_of_scores() -> Result<()> {
    let scores = vec![(85.0, 0.2), (92.0, 0.2), (78.0, 0.3), (88.0, 0.3)];
    assert_f64_near(reduce(&WeightedAverage, scores)?, 85.2, 1e-9);
    Ok(())
}

#[test]
fn weighted_average_zero_weight_is_zero() -> Result<()> {
    assert_eq!(reduce(&WeightedAverage, vec![(10.0, 0.0)])?, 0.0);
    assert_eq!(reduce(&WeightedAverage, Vec::<(f64, f64)>::new())?, 0.0);
    Ok(())
}

#[test]
fn weighted_state_accumulates() {
    let mut state = WeightedAverageState::default();
    state.accept(4.0, 1.0);
    state.accept(10.0, 2.0);
    assert_eq!(state.weighted_sum, 24.0);
    assert_eq!(state.total_weight, 3.0);
    assert_eq!(state.average(), 8.0);
}

#[test]
fn top_n_by_rating() -> Result<()> {
    let ratings = vec![4.5, 4.3, 3.1, 4.8];
    let top = reduce(&TopN::new(2, |r: &f64| OrderedFloat(*r)), ratings)?;
    assert_eq!(top, vec![4.8, 4.5]);
    Ok(())
}

#[test]
fn top_n_ties_keep_input_order() -> Result<()> {
    let items = vec![('a', 5), ('b', 7), ('c', 5), ('d', 7)];
    let top = reduce(&TopN::new(3, |x: &(char, i32)| x.1), items)?;
    assert_eq!(top, vec![('b', 7), ('d', 7), ('a', 5)]);
    Ok(())
}

#[test]
fn top_n_edge_sizes() -> Result<()> {
    let none = reduce(&TopN::new(0, |x: &i32| *x), vec![1, 2, 3])?;
    assert!(none.is_empty());

    let all = reduce(&TopN::new(10, |x: &i32| *x), vec![1, 3, 2])?;
    assert_eq!(all, vec![3, 2, 1]);
    Ok(())
}

#[test]
fn top_n_products_per_category() -> Result<()> {
    let per_category = grouping_by(
        |p: &Product| p.category,
        and_then(
            TopN::new(2, |p: &Product| OrderedFloat(p.rating)),
            |top: Vec<Product>| top.into_iter().map(|p| p.name).collect::<Vec<_>>(),
        ),
    );
    let top = reduce(&per_category, catalog())?;
    assert_eq!(
        sorted_entries(top),
        vec![
            ("Books", vec!["Novel", "Atlas"]),
            ("Electronics", vec!["Monitor", "Laptop"]),
        ]
    );
    Ok(())
}
