use boost_core::*;

// Golden: light speed and beyond are rejected by every checked entry point.
#[test]
fn golden_rejects_light_speed() {
    for &v in &[1.0, 1.5, -1.0, -1.5] {
        assert_eq!(gamma(v), Err(DomainError::NotSubluminal { v }));
        assert_eq!(galilean_transform(1.0, 0.0, v), Err(DomainError::NotSubluminal { v }));
        assert_eq!(lorentz_transform(1.0, 0.0, v), Err(DomainError::NotSubluminal { v }));
        assert_eq!(
            transform_all(Model::Lorentz, v, &[(0.0, 1.0)]),
            Err(DomainError::NotSubluminal { v })
        );
    }
}

// Golden: non-finite velocities are rejected rather than turned into NaN output.
#[test]
fn golden_rejects_non_finite() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(gamma(v), Err(DomainError::NotFinite { .. })));
        assert!(matches!(lorentz_transform(0.0, 1.0, v), Err(DomainError::NotFinite { .. })));
    }
}

// Golden: 0.999c is accepted and stays finite.
#[test]
fn golden_accepts_near_light_speed() {
    let g = gamma(0.999).unwrap();
    assert!(g.is_finite() && g > 22.0 && g < 23.0, "gamma(0.999) = {g}");
    for e in EVENTS.iter() {
        let (xp, ctp) = lorentz_transform(e.x, e.ct, 0.999).unwrap();
        assert!(xp.is_finite() && ctp.is_finite());
        let (xg, ctg) = galilean_transform(e.x, e.ct, 0.999).unwrap();
        assert!(xg.is_finite() && ctg.is_finite());
    }
}

// Golden: gamma at the reference velocities of the course notes.
#[test]
fn golden_gamma_values() {
    assert_eq!(gamma(0.0).unwrap(), 1.0);
    assert!((gamma(0.5).unwrap() - 1.0 / 0.75_f64.sqrt()).abs() < 1e-12);
    assert!((gamma(0.99).unwrap() - 1.0 / (1.0 - 0.99_f64 * 0.99).sqrt()).abs() < 1e-9);
    for &v in &[0.0, 0.1, 0.5, 0.9, 0.99, -0.5] {
        assert!(gamma(v).unwrap() >= 1.0);
    }
}

// Golden: the error message names the offending velocity.
#[test]
fn golden_error_message() {
    let err = lorentz_transform(0.0, 0.0, 1.5).unwrap_err();
    assert!(err.to_string().contains("1.5"), "{err}");
}
