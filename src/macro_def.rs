// Example:
// let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
// assert_eq!(a.dims(), (3, 4));
#[macro_export]
macro_rules! mat {
    [$( $( $x:expr ),* );*] => {{
        let mut rows: Vec<Vec<f64>> = Vec::new();
        $(
            rows.push(vec![$( $x as f64 ),*]);
        )*
        match $crate::Matrix::new(rows) {
            Ok(m) => m,
            Err(e) => panic!("mat!: {}", e),
        }
    }}
}

// Example:
// let v = vector![1, 2, 3];
// assert_eq!(v.dimension(), 3);
#[macro_export]
macro_rules! vector {
    [$( $x:expr ),*] => {
        $crate::Vector::new(vec![$( $x as f64 ),*])
    }
}

#[cfg(test)]
macro_rules! assert_error {
    ($res:expr, $err_type:path) => {
        match $res {
            Ok(_) => panic!("expected {}, got Ok", stringify!($err_type)),
            Err(e) => {
                match *e.kind() {
                    $err_type(..) => {},
                    ref other => panic!("expected {}, found: {}", stringify!($err_type), other),
                }
            }
        }
    }
}
