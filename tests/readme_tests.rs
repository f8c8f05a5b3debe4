// Set of tests that should mirror the examples in README

#[macro_use] extern crate wee_linalg;

use wee_linalg::{angle, Axis, ErrorKind, Matrix, Vector};

#[test]
fn test_creation() {
    let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
    assert_eq!(a.dims(), (3, 4));

    // from_vec takes values in row-major order
    let b = Matrix::from_vec((1..13).map(|x| x as f64).collect(), 3, 4).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
}

#[test]
fn test_ones_zeros() {
    let a = Matrix::ones(5, 4);
    assert_eq!(a.dims(), (5, 4));
    assert_eq!(a.get(0, 0).unwrap(), 1.0);
    assert_eq!(a.get(0, 3).unwrap(), 1.0);
    assert_eq!(a.get(4, 2).unwrap(), 1.0);
}

#[test]
fn test_vcat_hcat() {
    let a = Matrix::rand(3, 2);
    let b = Matrix::rand(2, 2);
    let a_b = a.vcat(&b).unwrap();
    assert_eq!(a_b.dims(), (5, 2));

    let c = Matrix::rand(3, 3);
    let a_c = a.hcat(&c).unwrap();
    assert_eq!(a_c.dims(), (3, 5));
}

#[test]
fn test_ops() {
    let a = Matrix::ones(2, 2);
    let b = Matrix::ones(2, 2);
    let c = &a + &b;
    assert_eq!(c.dims(), (2, 2));
    assert_eq!(c.get(0, 0).unwrap(), 2.0);

    let d = &c * Matrix::zeros(2, 2);
    assert_eq!(d.dims(), (2, 2));
    assert_eq!(d.get(0, 0).unwrap(), 0.0);

    let e = c.elementwise_multiply(&mat![1, 2; 3, 4]).unwrap();
    assert_eq!(e, mat![2, 4; 6, 8]);
}

#[test]
fn test_vectors() {
    let u = vector![1, 2, 3];
    let v = vector![4, 5, 6];
    assert_eq!(u.dot(&v).unwrap(), 32.0);
    assert_eq!(vector![1, -2, 3].absolute(), u);
    assert_eq!(format!("{}", u), "[1.0, 2.0, 3.0]");

    let right = angle(&vector![1, 0], &vector![0, 1]).unwrap();
    assert!((right - ::std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    match Vector::zeros(2).normalize() {
        Err(e) => match *e.kind() {
            ErrorKind::DegenerateVector(_) => {}
            ref other => panic!("unexpected error: {}", other),
        },
        Ok(_) => panic!("normalized a zero vector"),
    }
}

#[test]
fn test_inverse_power() {
    let a = mat![2, 1; 4, 3];
    assert_eq!(a.inverse().unwrap(), mat![1.5, -0.5; -2, 1]);
    assert_eq!(a.raise(2).unwrap(), mat![8, 5; 20, 13]);

    let singular = Matrix::zeros(2, 2).inverse();
    assert!(match singular {
        Err(ref e) => match *e.kind() { ErrorKind::NonInvertible(_) => true, _ => false },
        Ok(_) => false,
    });
}

#[test]
fn test_rows() {
    let a = mat![1, 2; 3, 4].append_row(&vector![5, 6]).unwrap();
    assert_eq!(a, mat![1, 2; 3, 4; 5, 6]);
    assert_eq!(a.reduce(|row| row.iter().sum(), Axis::Row), vector![3, 7, 11]);
    assert_eq!(a.map(|x| x * 10.0).row(2).unwrap(), vector![50, 60]);
    assert_eq!(format!("{}", mat![1, 2; 3, 4]), "1.0\t2.0\n3.0\t4.0");
}
