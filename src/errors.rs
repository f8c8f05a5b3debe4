error_chain! {
    errors {
        DimensionMismatch(s: String) {
            description("Dimension mismatch")
            display("Dimension mismatch: {}", s)
        }
        IndexOutOfBounds(index: usize, bound: usize) {
            description("Index out of bounds")
            display("Index out of bounds: {} not in 0..{}", index, bound)
        }
        NonInvertible(s: String) {
            description("Matrix not invertible")
            display("Matrix not invertible: {}", s)
        }
        InvalidExponent(n: i32) {
            description("Invalid exponent")
            display("Invalid exponent: matrix power {} is not supported", n)
        }
        DegenerateVector(s: &'static str) {
            description("Degenerate vector")
            display("Degenerate vector: {}", s)
        }
        InvalidShape(s: String) {
            description("Invalid shape")
            display("Invalid shape: {}", s)
        }
        InvalidRange(low: f64, high: f64) {
            description("Invalid range")
            display("Invalid range: [{}, {}]", low, high)
        }
        Backend(s: String) {
            description("Accelerator error")
            display("Accelerator error: {}", s)
        }
    }
}
