use ndarray::{s, ArrayView2, ArrayView4};

/// Stack-wide structural properties of a connectivity array.
///
/// The `(is_binary, is_directed)` pair selects which routine variant the
/// dispatcher runs; it is computed once per call and applied to every slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_binary: bool,
    pub is_directed: bool,
}

/// Classify a connectivity stack as binary/weighted and directed/undirected.
///
/// Both properties are decided over the whole stack: the input is binary only
/// if every entry of every (frequency, time) slice is exactly 0.0 or 1.0, and
/// it is directed as soon as any single slice differs from its own transpose.
/// One weighted or asymmetric slice reclassifies the entire stack, so all
/// slices are routed through the same routine variant.
///
/// Comparisons are exact (`f64` equality, no tolerance). A NaN entry is
/// neither 0.0 nor 1.0 and never equals itself, so it makes the stack both
/// weighted and directed.
///
/// The sweep short-circuits once both properties are settled.
pub fn classify(stack: ArrayView4<f64>) -> Classification {
    let (_, _, n_freq, n_time) = stack.dim();
    let mut is_binary = true;
    let mut is_directed = false;

    'slices: for k in 0..n_freq {
        for m in 0..n_time {
            let slice = stack.slice(s![.., .., k, m]);
            if is_binary && !slice_is_binary(&slice) {
                is_binary = false;
            }
            if !is_directed && !slice_is_symmetric(&slice) {
                is_directed = true;
            }
            if !is_binary && is_directed {
                break 'slices;
            }
        }
    }

    Classification {
        is_binary,
        is_directed,
    }
}

fn slice_is_binary(slice: &ArrayView2<f64>) -> bool {
    slice.iter().all(|&x| x == 0.0 || x == 1.0)
}

fn slice_is_symmetric(slice: &ArrayView2<f64>) -> bool {
    let n = slice.nrows();
    for i in 0..n {
        // j == i included: a NaN diagonal entry never equals itself.
        for j in i..n {
            if slice[(i, j)] != slice[(j, i)] {
                return false;
            }
        }
    }
    true
}
