use approx::assert_abs_diff_eq;
use rstest::rstest;
use sector_forecast::models::fit_with_quality;
use sector_forecast::{fit, ForecastError, Series, TimePoint};

fn start() -> TimePoint {
    TimePoint::new(2015, 1).unwrap()
}

#[rstest]
#[case(2, 3.0, 10.0)]
#[case(12, 0.5, 1000.0)]
#[case(61, -1.25, 500.0)]
#[case(128, 1234.5678, 98765.4321)]
fn test_fit_recovers_line(
    #[case] n: usize,
    #[case] slope: f64,
    #[case] intercept: f64,
) {
    let values: Vec<f64> = (0..n).map(|i| slope * i as f64 + intercept).collect();
    let series = Series::from_values(start(), values).unwrap();
    let anchor = start().advance(n - 1).unwrap();

    let model = fit(&series, anchor).unwrap();

    assert_abs_diff_eq!(model.slope, slope, epsilon = 1e-6);
    assert_abs_diff_eq!(model.intercept, intercept, epsilon = 1e-6);
}

#[rstest]
#[case(2)]
#[case(7)]
#[case(40)]
fn test_fit_constant_series(#[case] n: usize) {
    let series = Series::from_values(start(), vec![321.0; n]).unwrap();
    let (model, r_squared) = fit_with_quality(&series, start().advance(n - 1).unwrap()).unwrap();

    assert_eq!(model.slope, 0.0);
    assert_abs_diff_eq!(model.intercept, 321.0, epsilon = 1e-9);
    assert_eq!(r_squared, None);
}

#[test]
fn test_fit_index_is_positional_not_calendar() {
    // Same values over a year boundary and within one year give the same line
    let across_year = Series::from_values(TimePoint::new(2019, 11).unwrap(), vec![1.0, 3.0, 5.0]).unwrap();
    let within_year = Series::from_values(TimePoint::new(2020, 4).unwrap(), vec![1.0, 3.0, 5.0]).unwrap();

    let a = fit(&across_year, TimePoint::new(2020, 1).unwrap()).unwrap();
    let b = fit(&within_year, TimePoint::new(2020, 6).unwrap()).unwrap();

    assert_eq!(a, b);
    assert_abs_diff_eq!(a.slope, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(a.intercept, 1.0, epsilon = 1e-9);
}

#[test]
fn test_fit_length_one_series() {
    let series = Series::from_values(start(), vec![5.0]).unwrap();
    assert!(matches!(
        fit(&series, start()),
        Err(ForecastError::InsufficientData(_))
    ));
}
