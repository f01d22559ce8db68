// ==========================================
// 电弧炉钢渣利用决策工具 - Screening Core 纯函数库
// ==========================================
// 职责: 提供单金属旗级判定、扣减值求和、综合等级分档的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::config::thresholds::{MetalThresholds, ThresholdSet};
use crate::domain::chemistry::ChemistryInput;
use crate::domain::screening::{MetalFlag, ScreeningSummary};
use crate::domain::types::{Flag, SeverityTier, TraceMetal};

// ==========================================
// ScreeningCore - 纯函数工具类
// ==========================================
pub struct ScreeningCore;

impl ScreeningCore {
    /// 单金属旗级判定
    ///
    /// # 规则
    /// - value ≤ green_max → Green (扣减 0)
    /// - value ≤ amber_max → Amber (扣减 2)
    /// - 其余 → Red (扣减 6)
    ///
    /// # 参数
    /// - value: 实测总量 (wt%)
    /// - thresholds: 该金属的断点对
    ///
    /// # 返回
    /// - (Flag, u32): 旗级 + 评分扣减值
    pub fn classify_concentration(value: f64, thresholds: &MetalThresholds) -> (Flag, u32) {
        let flag = if value <= thresholds.green_max {
            Flag::Green
        } else if value <= thresholds.amber_max {
            Flag::Amber
        } else {
            Flag::Red
        };

        (flag, flag.penalty())
    }

    /// 构建单金属筛查结果
    ///
    /// # 参数
    /// - metal: 筛查金属
    /// - measured_wt_pct: 实测总量 (wt%)
    /// - thresholds: 该金属的断点对
    pub fn flag_metal(
        metal: TraceMetal,
        measured_wt_pct: f64,
        thresholds: &MetalThresholds,
    ) -> MetalFlag {
        let (flag, penalty) = Self::classify_concentration(measured_wt_pct, thresholds);

        MetalFlag {
            metal,
            measured_wt_pct,
            flag,
            penalty,
        }
    }

    /// 综合筛查等级分档
    ///
    /// # 规则
    /// - penalty_sum ≤ 2 → Low
    /// - penalty_sum ≤ 8 → Medium
    /// - 其余 → High
    ///
    /// # 参数
    /// - penalty_sum: 三金属扣减值之和
    pub fn severity_from_penalty_sum(penalty_sum: u32) -> SeverityTier {
        if penalty_sum <= 2 {
            SeverityTier::Low
        } else if penalty_sum <= 8 {
            SeverityTier::Medium
        } else {
            SeverityTier::High
        }
    }

    /// 执行完整筛查
    ///
    /// # 规则
    /// - 三金属独立判旗,扣减值求和后分档
    ///
    /// # 参数
    /// - chemistry: 渣料化学快照
    /// - thresholds: 三金属断点集合 (调用方负责已校验)
    ///
    /// # 返回
    /// - ScreeningSummary: 筛查汇总快照
    pub fn screen(chemistry: &ChemistryInput, thresholds: &ThresholdSet) -> ScreeningSummary {
        let cr = Self::flag_metal(TraceMetal::Cr, chemistry.cr_wt_pct, &thresholds.cr);
        let pb = Self::flag_metal(TraceMetal::Pb, chemistry.pb_wt_pct, &thresholds.pb);
        let zn = Self::flag_metal(TraceMetal::Zn, chemistry.zn_wt_pct, &thresholds.zn);

        let penalty_sum = cr.penalty + pb.penalty + zn.penalty;
        let severity = Self::severity_from_penalty_sum(penalty_sum);

        tracing::debug!(
            cr = %cr.flag,
            pb = %pb.flag,
            zn = %zn.flag,
            penalty_sum,
            severity = %severity,
            "筛查完成"
        );

        ScreeningSummary {
            cr,
            pb,
            zn,
            penalty_sum,
            severity,
        }
    }
}
