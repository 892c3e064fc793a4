use boost_frames::*;

#[test]
fn empty_samples_rejected() {
    assert_eq!(TimeSamples::new(vec![]), Err(InputError::Empty));
    assert_eq!(TimeSamples::uniform(0.0, 1.0, 0), Err(InputError::Empty));
}

#[test]
fn non_finite_samples_rejected() {
    let err = TimeSamples::new(vec![0.0, f64::NAN, 2.0]).unwrap_err();
    assert!(matches!(err, InputError::NotFinite { index: 1, .. }));
    let err = TimeSamples::new(vec![0.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(err, InputError::NotFinite { index: 1, .. }));
}

#[test]
fn non_monotonic_samples_rejected() {
    assert_eq!(
        TimeSamples::new(vec![0.0, 1.0, 1.0]),
        Err(InputError::NotIncreasing { index: 2, prev: 1.0, next: 1.0 })
    );
    assert_eq!(
        TimeSamples::new(vec![0.0, 2.0, 1.0]),
        Err(InputError::NotIncreasing { index: 2, prev: 2.0, next: 1.0 })
    );
}

#[test]
fn uniform_step_validated() {
    for step in [0.0, -1.0, f64::NAN] {
        assert!(matches!(TimeSamples::uniform(0.0, step, 3), Err(InputError::BadStep { .. })));
    }
    let ts = TimeSamples::uniform(1.0, 0.5, 3).unwrap();
    assert_eq!(ts.as_slice(), &[1.0, 1.5, 2.0]);
    assert_eq!(ts.len(), 3);
    assert!(!ts.is_empty());
}

#[test]
fn extent_validated() {
    assert!(Extent::new(-1.0, 1.0).is_ok());
    assert!(matches!(Extent::new(1.0, 1.0), Err(InputError::BadExtent { .. })));
    assert!(matches!(Extent::new(f64::NEG_INFINITY, 1.0), Err(InputError::BadExtent { .. })));
    let d = Extent::default();
    assert_eq!((d.x_min(), d.x_max()), (-15.0, 15.0));
}

#[test]
fn input_errors_convert_into_frame_errors() {
    let err: FrameError = InputError::Empty.into();
    assert_eq!(err.to_string(), "time sample sequence is empty");
}
