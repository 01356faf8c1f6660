use anyhow::Result;
use ironfold::*;

#[test]
fn median_even_and_odd() -> Result<()> {
    assert_eq!(reduce(&Median, vec![1.0, 2.0, 3.0, 4.0])?, 2.5);
    assert_eq!(reduce(&Median, vec![1.0, 2.0, 3.0])?, 2.0);
    assert_eq!(reduce(&Median, vec![42.0])?, 42.0);
    Ok(())
}

#[test]
fn median_sorts_unsorted_input() -> Result<()> {
    // middle elements of the sorted buffer are 3 and 5
    assert_eq!(reduce(&Median, vec![9.0, 1.0, 5.0, 3.0])?, 4.0);
    assert_eq!(reduce(&Median, vec![9.0, 1.0, 5.0])?, 5.0);
    Ok(())
}

#[test]
fn median_accepts_integers() -> Result<()> {
    let xs: Vec<i32> = vec![7, 3, 1, 5];
    assert_eq!(reduce(&Median, xs)?, 4.0);
    Ok(())
}

#[test]
fn median_of_empty_is_an_error() {
    let err = reduce(&Median, Vec::<f64>::new()).unwrap_err();
    assert_eq!(err, ReduceError::EmptyInput { reducer: "Median" });
    assert!(err.to_string().contains("Median"));
}

#[test]
fn median_of_unsorted_slice() -> Result<()> {
    let mut values = [3.0, -1.0, 2.0, 10.0];
    assert_eq!(Median::of_unsorted(&mut values)?, 2.5);
    assert_eq!(values, [-1.0, 2.0, 3.0, 10.0]);
    assert!(Median::of_unsorted(&mut []).is_err());
    Ok(())
}

#[test]
fn median_parallel_matches_sequential() -> Result<()> {
    let xs: Vec<f64> = (0..101).map(|i| f64::from((i * 37) % 101)).collect();
    let seq = Runner::sequential().run(&Median, xs.clone())?;
    let par = Runner::parallel(7).run(&Median, xs.clone())?;
    let lifted = Runner::parallel(5).run_lifted(&Median, xs)?;
    assert_eq!(seq, 50.0);
    assert_eq!(par, seq);
    assert_eq!(lifted, seq);
    Ok(())
}
