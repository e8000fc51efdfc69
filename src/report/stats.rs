/// 数值列汇总统计。口径与上游流水线保持一致：
/// 样本标准差（n-1），分位数线性插值。
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// 对一组数值做汇总；空输入返回None（均值等无定义）
pub fn summarize(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        var.sqrt()
    } else {
        f64::NAN
    };

    Some(NumericSummary {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[n - 1],
    })
}

/// 线性插值分位数，输入必须已升序排序且非空
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_summarize_single_value() {
        let s = summarize(&[0.5]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 0.5);
        assert_eq!(s.min, 0.5);
        assert_eq!(s.max, 0.5);
        // 单个样本的标准差无定义
        assert!(s.std.is_nan());
    }

    #[test]
    fn test_summarize_basic() {
        let s = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert_eq!(s.median, 2.5);
        // 线性插值：(4-1)*0.25 = 0.75 → 1.0 + 0.75*(2.0-1.0)
        assert_eq!(s.q25, 1.75);
        assert_eq!(s.q75, 3.25);
        // 样本标准差 sqrt(5/3)
        assert!((s.std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_exact_positions() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 0.5), 2.0);
        assert_eq!(quantile(&sorted, 1.0), 3.0);
    }

    #[test]
    fn test_summarize_unsorted_input() {
        let s = summarize(&[0.9, 0.1, 0.5]).unwrap();
        assert_eq!(s.min, 0.1);
        assert_eq!(s.max, 0.9);
        assert_eq!(s.median, 0.5);
    }
}
