use super::*;
use crate::simd::scalar;

#[test]
fn test_sum_equiv() {
    let v = [0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6, 1.1, 7.0, 8.5, -2.0];
    assert_eq!(sum_f32_f64(&v), scalar::sum_f32_f64(&v));
}

#[test]
fn test_similarity_equiv() {
    let r = [12.5f32, -30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 170.0, 180.0, 1.0];
    let c = [10.0f32, 25.0, -45.0, 90.0, 80.0, 179.0, 0.0, 151.5, 160.0, 3.0, 400.0];
    assert_eq!(
        similarity_sum(&r, &c).to_bits(),
        scalar::similarity_sum(&r, &c).to_bits()
    );
}
