// ==========================================
// 电弧炉钢渣利用决策工具 - 环境筛查领域模型
// ==========================================
// 依据: ErsatzbaustoffV / DepV 惯用的 Green/Amber/Red 分级呈现
// 红线: 筛查旗级不是法定判定,不替代浸出检测
// ==========================================

use crate::domain::types::{Flag, SeverityTier, TraceMetal};
use serde::{Deserialize, Serialize};

// ==========================================
// MetalFlag - 单一金属的筛查结果
// ==========================================
// 用途: 记录实测值与两断点比较后的旗级与扣减值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetalFlag {
    pub metal: TraceMetal,    // 筛查金属
    pub measured_wt_pct: f64, // 实测总量 (wt%)
    pub flag: Flag,           // 旗级
    pub penalty: u32,         // 评分扣减值 (Green=0 / Amber=2 / Red=6)
}

impl MetalFlag {
    /// 面向用户的旗级标签
    pub fn label(&self) -> &'static str {
        self.flag.label()
    }
}

// ==========================================
// ScreeningSummary - 筛查汇总快照
// ==========================================
// 用途: 路径评分与提示生成的只读数据源
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreeningSummary {
    // ===== 单金属旗级 =====
    pub cr: MetalFlag, // 铬
    pub pb: MetalFlag, // 铅
    pub zn: MetalFlag, // 锌

    // ===== 汇总 =====
    pub penalty_sum: u32,       // 三金属扣减值之和
    pub severity: SeverityTier, // 综合筛查等级
}

impl ScreeningSummary {
    /// 按固定顺序 (Cr/Pb/Zn) 返回三个金属旗级
    pub fn metal_flags(&self) -> [&MetalFlag; 3] {
        [&self.cr, &self.pb, &self.zn]
    }

    /// 综合等级徽标
    pub fn severity_badge(&self) -> &'static str {
        self.severity.badge()
    }
}

// ==========================================
// Trait: ScreeningAssessment
// ==========================================
// 用途: 筛查结果的派生判定接口
pub trait ScreeningAssessment {
    /// 三金属中最差旗级
    fn worst_flag(&self) -> Flag;

    /// 是否存在 Red 旗级
    fn has_red_flag(&self) -> bool;

    /// 合规风险是否严重 (High 档)
    fn compliance_risk_is_severe(&self) -> bool;

    /// 取指定金属的筛查结果
    fn flag_for(&self, metal: TraceMetal) -> &MetalFlag;
}

// ==========================================
// ScreeningAssessment Trait 实现
// ==========================================
impl ScreeningAssessment for ScreeningSummary {
    /// 三金属中最差旗级 (GREEN < AMBER < RED)
    fn worst_flag(&self) -> Flag {
        self.cr.flag.max(self.pb.flag).max(self.zn.flag)
    }

    /// 是否存在 Red 旗级
    fn has_red_flag(&self) -> bool {
        self.worst_flag() == Flag::Red
    }

    /// 合规风险是否严重
    ///
    /// # 规则
    /// - High 档视为严重,资源化偏好加分不再适用
    fn compliance_risk_is_severe(&self) -> bool {
        self.severity == SeverityTier::High
    }

    /// 取指定金属的筛查结果
    fn flag_for(&self, metal: TraceMetal) -> &MetalFlag {
        match metal {
            TraceMetal::Cr => &self.cr,
            TraceMetal::Pb => &self.pb,
            TraceMetal::Zn => &self.zn,
        }
    }
}
