use anyhow::Result;
use ironfold::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    const fn at(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    fn minutes(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

type Span = Option<(Time, Time, u32)>;

fn span(first: Option<Time>, last: Option<Time>) -> Span {
    first
        .zip(last)
        .map(|(f, l)| (f, l, l.minutes() - f.minutes()))
}

#[test]
fn earliest_latest_and_gap() -> Result<()> {
    let events = vec![
        Time::at(10, 0),
        Time::at(10, 15),
        Time::at(9, 45),
        Time::at(11, 0),
        Time::at(10, 30),
    ];
    let first_last = teeing(
        MinBy::new(|a: &Time, b: &Time| a.cmp(b)),
        MaxBy::new(|a: &Time, b: &Time| a.cmp(b)),
        span,
    );

    let result = reduce(&first_last, events.clone())?;
    assert_eq!(result, Some((Time::at(9, 45), Time::at(11, 0), 75)));

    let par = Runner::parallel(3).run(&first_last, events)?;
    assert_eq!(par, result);
    Ok(())
}

#[test]
fn teeing_empty_input() -> Result<()> {
    let first_last = teeing(
        MinBy::new(|a: &Time, b: &Time| a.cmp(b)),
        MaxBy::new(|a: &Time, b: &Time| a.cmp(b)),
        span,
    );
    assert_eq!(reduce(&first_last, Vec::<Time>::new())?, None);
    Ok(())
}

#[test]
fn total_and_average_word_length() -> Result<()> {
    let words = vec!["alpha", "be", "gamma", "delta"];
    let summary = teeing(
        mapping(|w: &str| w.len() as u64, Sum::<u64>::new()),
        Count,
        |total: u64, n: u64| (total, total as f64 / n as f64),
    );
    assert_eq!(reduce(&summary, words)?, (17, 4.25));
    Ok(())
}

#[test]
fn teeing_branch_error_propagates() {
    let tee = Teeing::new(Median, Count, |m: f64, n: u64| (m, n));
    let err = reduce(&tee, Vec::<f64>::new()).unwrap_err();
    assert!(matches!(err, ReduceError::EmptyInput { .. }));
}
