use crate::{Mode, MovingAverage, MIN_AGE, MIN_COUNTER};

fn feed(average: &mut MovingAverage, samples: &[f64]) {
    for &sample in samples {
        average.add(sample);
    }
}

#[test]
fn simple() {
    let mut average = MovingAverage::new();
    feed(&mut average, &[31., 37., 47., 9., 31., 18., 25., 40., 6., 0.]);
    assert_eq!(average.get(), 26.963031351466075);

    average.set(1.);
    assert_eq!(average.get(), 1.);
}

#[test]
fn exponential_with_default_age() {
    let mut average = MovingAverage::with_age(MIN_AGE);
    assert_eq!(average.mode(), Mode::Simple);
    feed(
        &mut average,
        &[19., 31., 14., 8., 48., 20., 41., 25., 39., 17., 17.],
    );
    assert_eq!(average.get(), 22.37419947001783);

    average.set(1.);
    assert_eq!(average.get(), 1.);
}

#[test]
fn exponential_zero_age() {
    let average = MovingAverage::with_age(0.);
    assert_eq!(average, MovingAverage::new());
}

#[test]
fn exponential_warm_up() {
    let mut average = MovingAverage::with_age(5.);
    let samples = [34., 28., 5., 5., 4., 38., 40., 40., 8., 7., 7.];
    for (i, &sample) in samples.iter().enumerate() {
        average.add(sample);
        if i < MIN_COUNTER as usize {
            assert_eq!(average.get(), 0., "i={}", i);
        } else {
            assert!(average.get() > 4. && average.get() < 40., "i={}", i);
        }
    }

    let mut average = MovingAverage::with_age(5.);
    average.set(5.);
    assert_eq!(average.get(), 5.);
    average.add(1.);
    assert!(average.get() < 5.);
}

#[test]
fn exponential() {
    let mut average = MovingAverage::with_age(5.);
    feed(
        &mut average,
        &[12., 42., 25., 24., 44., 43., 25., 18., 37., 11., 24.],
    );
    assert_eq!(average.get(), 26.733333333333338);
}

#[test]
fn exponential_constant() {
    let mut average = MovingAverage::with_age(5.);
    feed(&mut average, &[10.; 15]);
    assert_eq!(average.get(), 10.);
}

#[test]
fn exponential_alternating() {
    let mut average = MovingAverage::with_age(5.);
    for (i, &sample) in [1., 100., 1., 100., 1., 100., 1.].iter().enumerate() {
        average.add(sample);
        if i < MIN_COUNTER as usize {
            assert_eq!(average.get(), 0.);
        }
    }
    // Still warming up, but the sum is there
    assert!(!average.is_ready());
    average.set(average.raw_value() / 7.);
    assert!(average.get() > 1.);
}

#[test]
fn extend_matches_add() {
    let samples = vec![12., 42., 25., 24., 44., 43., 25., 18., 37., 11., 24.];
    let mut extended = MovingAverage::with_age(5.);
    extended.extend(samples.iter().copied());
    let mut added = MovingAverage::with_age(5.);
    feed(&mut added, &samples);
    assert_eq!(extended, added);
}
