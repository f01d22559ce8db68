// ==========================================
// 电弧炉钢渣利用决策工具 - 渣料与设施领域模型
// ==========================================
// 依据: EAF 钢渣化学成分表征惯例 (FeO / 碱度 / 微量金属总量)
// 依据: 游离 CaO/MgO 膨胀风险的定性分档
// ==========================================

use crate::domain::types::ExpansionRisk;
use serde::{Deserialize, Serialize};

// ==========================================
// ChemistryInput - 单次评估的渣料化学快照
// ==========================================
// 红线: 评估期内不可变,重算即重建
// 用途: 引擎层只读输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemistryInput {
    // ===== 冶金指标 =====
    pub feo_pct: f64,   // FeO 含量 (%)
    pub basicity: f64,  // 碱度 (CaO/SiO₂)

    // ===== 膨胀风险 =====
    pub expansion_risk: ExpansionRisk, // 游离 CaO 膨胀风险 (定性)

    // ===== 微量金属总量 (wt%) =====
    pub cr_wt_pct: f64, // 铬总量
    pub pb_wt_pct: f64, // 铅总量
    pub zn_wt_pct: f64, // 锌总量
}

// ==========================================
// FacilityAvailability - 本地设施可用性
// ==========================================
// 四个独立开关,决定各路径的可得性基础分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityAvailability {
    pub cement_outlet: bool,         // 水泥/胶凝材料出路
    pub road_outlet: bool,           // 道路/骨料出路
    pub metal_recovery_outlet: bool, // 金属回收设施
    pub landfill_outlet: bool,       // 填埋选项 (兜底)
}

impl FacilityAvailability {
    /// 是否存在任一资源化出路 (道路/水泥/金属回收)
    pub fn has_valorization_outlet(&self) -> bool {
        self.cement_outlet || self.road_outlet || self.metal_recovery_outlet
    }
}

impl Default for FacilityAvailability {
    fn default() -> Self {
        Self {
            cement_outlet: true,
            road_outlet: true,
            metal_recovery_outlet: true,
            landfill_outlet: true,
        }
    }
}

// ==========================================
// ReferenceLinks - 法规来源链接 (可选)
// ==========================================
// 红线: 仅透传展示,不做任何校验
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ersatzbaustoffv: Option<String>, // ErsatzbaustoffV / Mantelverordnung 链接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depv: Option<String>,            // DepV 链接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_guidance: Option<String>,  // 州级指南/技术规则链接
}

impl ReferenceLinks {
    /// 是否提供了任一链接
    pub fn is_empty(&self) -> bool {
        self.ersatzbaustoffv.is_none() && self.depv.is_none() && self.state_guidance.is_none()
    }
}
