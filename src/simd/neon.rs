#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::scalar::angle_similarity;

pub fn sum_f32_f64(values: &[f32]) -> f64 {
    let mut sum = 0f64;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        while i + 4 <= n {
            let v = vld1q_f32(values.as_ptr().add(i));
            let mut lanes = [0f32; 4];
            vst1q_f32(lanes.as_mut_ptr(), v);
            for lane in &lanes {
                sum += *lane as f64;
            }
            i += 4;
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
        let k180 = vdupq_n_f32(180.0);
        let k100 = vdupq_n_f32(100.0);
        while i + 4 <= n {
            let r = vld1q_f32(reference.as_ptr().add(i));
            let c = vld1q_f32(candidate.as_ptr().add(i));
            let dev = vabsq_f32(vsubq_f32(vabsq_f32(r), c));
            let penalty = vabsq_f32(vmulq_f32(vdivq_f32(dev, k180), k100));
            let score = vsubq_f32(k100, penalty);
            let mut lanes = [0f32; 4];
            vst1q_f32(lanes.as_mut_ptr(), score);
            for lane in &lanes {
                sum += *lane as f64;
            }
            i += 4;
        }
    }
    while i < n {
        sum += angle_similarity(reference[i], candidate[i]) as f64;
        i += 1;
    }
    sum
}

pub fn backend_name() -> &'static str {
    "neon"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/neon.rs"]
mod tests;
