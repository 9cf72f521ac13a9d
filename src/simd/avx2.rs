#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::scalar::angle_similarity;

pub fn sum_f32_f64(values: &[f32]) -> f64 {
    // Deterministic order: process chunks, but accumulate each lane in order.
    let mut sum = 0f64;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        while i + 8 <= n {
            let v = _mm256_loadu_ps(values.as_ptr().add(i));
            let mut lanes = [0f32; 8];
            _mm256_storeu_ps(lanes.as_mut_ptr(), v);
            for lane in &lanes {
                sum += *lane as f64;
            }
            i += 8;
        }
    }
    while i < n {
        sum += values[i] as f64;
        i += 1;
    }
    sum
}

pub fn similarity_sum(reference: &[f32], candidate: &[f32]) -> f64 {
    let mut sum = 0f64;
    let mut i = 0usize;
    let n = reference.len().min(candidate.len());
    unsafe {
        // Clearing the sign bit is f32::abs.
        let sign = _mm256_set1_ps(-0.0);
        let k180 = _mm256_set1_ps(180.0);
        let k100 = _mm256_set1_ps(100.0);
        while i + 8 <= n {
            let r = _mm256_loadu_ps(reference.as_ptr().add(i));
            let c = _mm256_loadu_ps(candidate.as_ptr().add(i));
            let dev = _mm256_andnot_ps(sign, _mm256_sub_ps(_mm256_andnot_ps(sign, r), c));
            let penalty = _mm256_andnot_ps(sign, _mm256_mul_ps(_mm256_div_ps(dev, k180), k100));
            let score = _mm256_sub_ps(k100, penalty);
            let mut lanes = [0f32; 8];
            _mm256_storeu_ps(lanes.as_mut_ptr(), score);
            for lane in &lanes {
                sum += *lane as f64;
            }
            i += 8;
        }
    }
    while i < n {
        sum += angle_similarity(reference[i], candidate[i]) as f64;
        i += 1;
    }
    sum
}

pub fn backend_name() -> &'static str {
    "avx2"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/avx2.rs"]
mod tests;
