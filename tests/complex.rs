use core::f64::consts::PI;

use fxmath::Complex;

type Nc = num_complex::Complex<f64>;

fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

fn nc(z: Complex) -> Nc {
    Nc::new(z.real(), z.imag())
}

const TOL: f64 = 1e-10;

fn assert_complex_near(a: Complex, b: Nc, tol: f64, msg: &str) {
    assert!(
        (a.real() - b.re).abs() < tol && (a.imag() - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

const SAMPLES: [(f64, f64); 8] = [
    (0.5, 0.25),
    (-1.2, 0.8),
    (2.0, -1.5),
    (-0.3, -0.9),
    (1.0, 0.0),
    (0.0, 1.0),
    (-2.5, 0.1),
    (0.7, -0.05),
];

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn three_four_five() {
    assert_eq!(c(3.0, 4.0).abs(), 5.0);
}

#[test]
fn fourth_roots_of_unity() {
    let roots = Complex::ONE.nth_roots(4).unwrap();
    let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
    for (k, (r, &(re, im))) in roots.iter().zip(expected.iter()).enumerate() {
        assert_complex_near(*r, Nc::new(re, im), 1e-15, &format!("root {k}"));
    }
}

#[test]
fn two_to_the_tenth() {
    assert_complex_near(c(2.0, 0.0).pow(10), Nc::new(1024.0, 0.0), 1e-9, "2^10");
}

#[test]
fn zero_to_the_zeroth() {
    assert_eq!(Complex::ZERO.pow(0), Complex::ONE);
}

#[test]
fn printed_form() {
    assert_eq!(c(2.0, -3.0).to_string(), "2-i*3");
    assert_eq!(format!("{}", c(-0.5, 1.25)), "-0.5+i*1.25");
}

// ── Reference comparison against num-complex ─────────────────────────

#[test]
fn arithmetic_matches_reference() {
    for &(ar, ai) in &SAMPLES {
        for &(br, bi) in &SAMPLES {
            let (a, b) = (c(ar, ai), c(br, bi));
            let msg = format!("{a:?}, {b:?}");
            assert_complex_near(a + b, nc(a) + nc(b), TOL, &msg);
            assert_complex_near(a - b, nc(a) - nc(b), TOL, &msg);
            assert_complex_near(a * b, nc(a) * nc(b), TOL, &msg);
            assert_complex_near(a / b, nc(a) / nc(b), TOL, &msg);
        }
    }
}

#[test]
fn polar_matches_reference() {
    for &(re, im) in &SAMPLES {
        let z = c(re, im);
        let (r, theta) = nc(z).to_polar();
        assert!((z.abs() - r).abs() < TOL);
        assert!((z.arg() - theta).abs() < TOL);
        assert_complex_near(Complex::from_polar(r, theta), Nc::from_polar(r, theta), TOL, "from_polar");
    }
}

#[test]
fn powers_match_reference() {
    for &(re, im) in &SAMPLES {
        let z = c(re, im);
        for n in -6..=6 {
            assert_complex_near(z.pow(n), nc(z).powi(n), 1e-9, &format!("{z:?}^{n}"));
        }
    }
}

#[test]
fn roots_match_reference() {
    for &(re, im) in &SAMPLES {
        let z = c(re, im);
        assert_complex_near(z.sqrt(), nc(z).sqrt(), TOL, "sqrt");
        assert_complex_near(z.nth_root(3), nc(z).powf(1.0 / 3.0), TOL, "cbrt");
    }
}

#[test]
fn transcendental_matches_reference() {
    for &(re, im) in &SAMPLES {
        let z = c(re, im);
        let w = nc(z);
        let msg = format!("{z:?}");
        assert_complex_near(z.exp(), w.exp(), TOL, &msg);
        assert_complex_near(z.sinh(), w.sinh(), TOL, &msg);
        assert_complex_near(z.cosh(), w.cosh(), TOL, &msg);
        assert_complex_near(z.tanh(), w.tanh(), TOL, &msg);
        assert_complex_near(z.sin(), w.sin(), TOL, &msg);
        assert_complex_near(z.cos(), w.cos(), TOL, &msg);
        assert_complex_near(z.tan(), w.tan(), TOL, &msg);
        assert_complex_near(z.sec(), w.cos().inv(), TOL, &msg);
        assert_complex_near(z.cosec(), w.sin().inv(), TOL, &msg);
        assert_complex_near(z.cot(), w.tan().inv(), TOL, &msg);
        assert_complex_near(z.sech(), w.cosh().inv(), TOL, &msg);
        assert_complex_near(z.cosech(), w.sinh().inv(), TOL, &msg);
        assert_complex_near(z.coth(), w.tanh().inv(), TOL, &msg);
    }
}

#[test]
fn principal_log_matches_reference() {
    for &(re, im) in &SAMPLES {
        let z = c(re, im);
        assert_complex_near(z.log(), nc(z).ln(), TOL, &format!("{z:?}"));
    }
}

#[test]
fn shifted_log_branch_differs_by_whole_turns() {
    for &(re, im) in &SAMPLES {
        let z = c(re, im);
        let principal = nc(z).ln();
        for k in [-3.0, -1.0, 2.0, 5.0] {
            let center = k * 2.0 * PI;
            let shifted = Nc::new(principal.re, principal.im + center);
            assert_complex_near(z.log_branch(center), shifted, 1e-9, &format!("{z:?} k={k}"));
        }
    }
}
