use super::*;

#[test]
fn can_measure_duration() {
    let (result, duration) = Timer::measure_duration(|| {
        std::thread::sleep(Duration::from_millis(5));
        42
    });

    assert_eq!(result, 42);
    assert!(duration >= Duration::from_millis(5));
}

#[test]
fn can_report_elapsed_time_consistently() {
    let timer = Timer::start();
    std::thread::sleep(Duration::from_millis(2));

    assert!(timer.elapsed_millis() >= 2);
    assert!(timer.elapsed_secs_as_float() > 0.);
    assert_eq!(timer.elapsed_secs(), 0);
}
