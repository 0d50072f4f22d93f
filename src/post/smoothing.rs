//! # 绘图平滑
//!
//! 梁单元结果每个单元有 I、J 两端两行数据，绘图前需要合并：
//! - `Nodal`: 相邻单元共用节点处取 J 端与下一单元 I 端的平均值，横坐标为节点位置
//! - `Pairwise`: 每两行取平均，奇数行时保留最后一行
//! - `Raw`: 原样绘制

/// 平滑方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoothing {
    Nodal,
    Pairwise,
    Raw,
}

impl Smoothing {
    /// 按行序的编号列 `ids` 和分量值 `values` 生成折线点
    pub fn apply(&self, ids: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
        match self {
            Smoothing::Nodal => nodal(ids, values),
            Smoothing::Pairwise => pairwise(ids, values),
            Smoothing::Raw => ids.iter().copied().zip(values.iter().copied()).collect(),
        }
    }
}

fn nodal(ids: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return Vec::new();
    };

    let mut xs: Vec<f64> = Vec::new();
    for &id in ids {
        if !xs.contains(&id) {
            xs.push(id);
        }
    }
    if let Some(&last_id) = xs.last() {
        xs.push(last_id + 1.0);
    }

    let mut ys = vec![first];
    let n = values.len();
    let mut i = 1;
    while i + 2 < n {
        ys.push((values[i] + values[i + 1]) / 2.0);
        i += 2;
    }
    ys.push(last);

    if xs.len() != ys.len() {
        log::warn!(
            "{} element positions but {} nodal values, extra points dropped",
            xs.len(),
            ys.len()
        );
    }
    xs.into_iter().zip(ys).collect()
}

fn pairwise(ids: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    let n = ids.len().min(values.len());
    let mut points: Vec<(f64, f64)> = (0..n.saturating_sub(1))
        .step_by(2)
        .map(|i| ((ids[i] + ids[i + 1]) / 2.0, (values[i] + values[i + 1]) / 2.0))
        .collect();
    if n % 2 == 1 {
        points.push((ids[n - 1], values[n - 1]));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodal_averages_shared_nodes() {
        // 三个单元，各 I/J 两行
        let ids = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
        let values = [0.0, 10.0, 12.0, 20.0, 22.0, 5.0];
        let points = Smoothing::Nodal.apply(&ids, &values);
        assert_eq!(
            points,
            vec![(1.0, 0.0), (2.0, 11.0), (3.0, 21.0), (4.0, 5.0)]
        );
    }

    #[test]
    fn test_nodal_single_element() {
        let points = Smoothing::Nodal.apply(&[7.0, 7.0], &[1.0, 3.0]);
        assert_eq!(points, vec![(7.0, 1.0), (8.0, 3.0)]);
        assert!(Smoothing::Nodal.apply(&[], &[]).is_empty());
    }

    #[test]
    fn test_pairwise_keeps_trailing_row() {
        let ids = [1.0, 2.0, 3.0, 4.0, 5.0];
        let values = [2.0, 4.0, 6.0, 8.0, 9.0];
        let points = Smoothing::Pairwise.apply(&ids, &values);
        assert_eq!(points, vec![(1.5, 3.0), (3.5, 7.0), (5.0, 9.0)]);
    }

    #[test]
    fn test_raw_passthrough() {
        let points = Smoothing::Raw.apply(&[1.0, 2.0], &[-0.5, 0.5]);
        assert_eq!(points, vec![(1.0, -0.5), (2.0, 0.5)]);
    }
}
