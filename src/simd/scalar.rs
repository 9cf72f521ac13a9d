pub fn sum_f32_f64(values: &[f32]) -> f64 {
    let mut sum = 0f64;
    for &v in values {
        sum += v as f64;
    }
    sum
}

#[inline]
pub fn angle_similarity(reference: f32, candidate: f32) -> f32 {
    let deviation = (reference.abs() - candidate).abs();
    let penalty = ((deviation / 180.0) * 100.0).abs();
    100.0 - penalty
}

pub fn similarity_sum(reference: &[f32], candidate: &[f32]) -> f64 {
    let mut sum = 0f64;
    for (&r, &c) in reference.iter().zip(candidate) {
        sum += angle_similarity(r, c) as f64;
    }
    sum
}

pub fn backend_name() -> &'static str {
    "scalar"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/scalar.rs"]
mod tests;
