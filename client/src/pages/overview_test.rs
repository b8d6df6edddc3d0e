use super::*;

fn speed(millis: i64) -> CarouselSpeed {
    CarouselSpeed::new(millis).unwrap()
}

#[test]
fn describe_interval_whole_seconds() {
    assert_eq!(describe_interval(speed(10_000)), "10 seconds");
    assert_eq!(describe_interval(speed(1000)), "1 second");
}

#[test]
fn describe_interval_fractional_seconds() {
    assert_eq!(describe_interval(speed(1500)), "1.5 seconds");
    assert_eq!(describe_interval(speed(2250)), "2.2 seconds");
}

#[test]
fn describe_interval_sub_second() {
    assert_eq!(describe_interval(speed(250)), "250 ms");
}
