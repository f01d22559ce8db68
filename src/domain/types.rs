// ==========================================
// 电弧炉钢渣利用决策工具 - 领域类型定义
// ==========================================
// 依据: ErsatzbaustoffV / DepV 的 Green/Amber/Red 筛查分级惯例
// 依据: 欧盟循环经济框架下的钢渣利用路径排序
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 筛查旗级 (Screening Flag)
// ==========================================
// 红线: 旗级制,不是法定限值
// 顺序: Green < Amber < Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    Green, // 低于 Green 断点
    Amber, // 介于 Green 与 Amber 断点之间
    Red,   // 高于 Amber 断点
}

impl Flag {
    /// 旗级对应的评分扣减值 (参与路径评分)
    pub fn penalty(&self) -> u32 {
        match self {
            Flag::Green => 0,
            Flag::Amber => 2,
            Flag::Red => 6,
        }
    }

    /// 面向用户的旗级标签
    pub fn label(&self) -> &'static str {
        match self {
            Flag::Green => "🟢 Green",
            Flag::Amber => "🟡 Amber",
            Flag::Red => "🔴 Red",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Green => write!(f, "GREEN"),
            Flag::Amber => write!(f, "AMBER"),
            Flag::Red => write!(f, "RED"),
        }
    }
}

// ==========================================
// 综合筛查等级 (Severity Tier)
// ==========================================
// 由三种微量金属旗级扣减值求和后分档
// 断点: ≤2 Low, ≤8 Medium, >8 High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityTier {
    Low,    // 约束较少
    Medium, // 受控使用 + 浸出检测
    High,   // 利用可能受限
}

impl SeverityTier {
    /// 面向用户的等级徽标
    pub fn badge(&self) -> &'static str {
        match self {
            SeverityTier::Low => "🟢 Low",
            SeverityTier::Medium => "🟡 Medium",
            SeverityTier::High => "🔴 High",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityTier::Low => write!(f, "LOW"),
            SeverityTier::Medium => write!(f, "MEDIUM"),
            SeverityTier::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 游离氧化钙膨胀风险 (Expansion Risk)
// ==========================================
// 定性输入,三档; 游离 CaO/MgO 水化膨胀决定陈化需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpansionRisk {
    Low,    // 低风险
    Medium, // 需陈化 + 稳定性验证
    High,   // 必须陈化/调质
}

impl ExpansionRisk {
    /// 从字符串解析风险档位
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "LOW" => ExpansionRisk::Low,
            "HIGH" => ExpansionRisk::High,
            _ => ExpansionRisk::Medium, // 默认值
        }
    }
}

impl fmt::Display for ExpansionRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionRisk::Low => write!(f, "LOW"),
            ExpansionRisk::Medium => write!(f, "MEDIUM"),
            ExpansionRisk::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 微量金属 (Trace Metal)
// ==========================================
// 筛查对象: 总量 Cr / Pb / Zn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TraceMetal {
    Cr, // 铬
    Pb, // 铅
    Zn, // 锌
}

impl TraceMetal {
    /// 元素符号
    pub fn symbol(&self) -> &'static str {
        match self {
            TraceMetal::Cr => "Cr",
            TraceMetal::Pb => "Pb",
            TraceMetal::Zn => "Zn",
        }
    }

    /// 报告中的展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            TraceMetal::Cr => "Chromium (Cr)",
            TraceMetal::Pb => "Lead (Pb)",
            TraceMetal::Zn => "Zinc (Zn)",
        }
    }
}

impl fmt::Display for TraceMetal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceMetal::Cr => write!(f, "CR"),
            TraceMetal::Pb => write!(f, "PB"),
            TraceMetal::Zn => write!(f, "ZN"),
        }
    }
}

// ==========================================
// 利用路径类型 (Route Kind)
// ==========================================
/// 四条固定路径,按固定顺序评分: 道路 → 水泥 → 金属回收 → 填埋
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteKind {
    RoadConstruction, // 道路/骨料 (再生利用)
    CementBinder,     // 水泥/胶凝材料 (常作固化封装)
    MetalRecovery,    // 金属回收优先 (选矿预处理)
    Landfill,         // 填埋处置 (兜底)
}

impl RouteKind {
    /// 面向用户的路径全称
    pub fn title(&self) -> &'static str {
        match self {
            RouteKind::RoadConstruction => "Road construction / aggregates (recycling route)",
            RouteKind::CementBinder => "Cement / binder use (often as encapsulation route)",
            RouteKind::MetalRecovery => {
                "Metal recovery first (beneficiation), then choose final outlet"
            }
            RouteKind::Landfill => "Landfill / disposal (fallback)",
        }
    }

    /// 路径固有优势 (静态文案)
    pub fn pros(&self) -> &'static [&'static str] {
        match self {
            RouteKind::RoadConstruction => &[
                "High-volume outlet (good for typical slag quantities)",
                "Can replace natural aggregates when compliant",
                "Strong circular-economy pathway in many regions",
            ],
            RouteKind::CementBinder => &[
                "High-value route when technically and environmentally compliant",
                "Encapsulation may reduce leaching risk in some formulations",
                "Can contribute to resource efficiency and reduced virgin material demand",
            ],
            RouteKind::MetalRecovery => &[
                "Recovers metallic value and improves resource efficiency",
                "Can reduce mass to landfill by enabling better downstream reuse",
                "Works as a pre-treatment even when direct reuse is constrained",
            ],
            RouteKind::Landfill => &[
                "Clear compliance pathway when reuse is infeasible",
                "Operationally straightforward if permitted",
            ],
        }
    }

    /// 路径固有短板 (静态文案)
    pub fn cons(&self) -> &'static [&'static str] {
        match self {
            RouteKind::RoadConstruction => &[
                "Requires stability (expansion) control and QA testing",
                "EU/German compliance often requires leaching tests and documented suitability",
                "Amber/Red screening may restrict use to controlled applications",
            ],
            RouteKind::CementBinder => &[
                "Strict product and compliance requirements",
                "May require blending/conditioning and extensive testing",
                "High-risk screening may still block use depending on regulations",
            ],
            RouteKind::MetalRecovery => &[
                "Requires equipment and logistics",
                "Economic value depends on metallic Fe and process efficiency",
                "Residual slag still needs a compliant outlet",
            ],
            RouteKind::Landfill => &[
                "Loss of resource value and circularity benefits",
                "Long-term liability and costs",
                "Should be last resort when recycling routes are feasible",
            ],
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::RoadConstruction => write!(f, "ROAD_CONSTRUCTION"),
            RouteKind::CementBinder => write!(f, "CEMENT_BINDER"),
            RouteKind::MetalRecovery => write!(f, "METAL_RECOVERY"),
            RouteKind::Landfill => write!(f, "LANDFILL"),
        }
    }
}

// ==========================================
// 排名标签 (Rank Tag)
// ==========================================
// 按降序排序后的序位打标: 0 → Recommended, 1 → Alternative, 其余 → Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankTag {
    Recommended,
    Alternative,
    Other,
}

impl RankTag {
    /// 由排序后的下标 (0 起) 得到标签
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => RankTag::Recommended,
            1 => RankTag::Alternative,
            _ => RankTag::Other,
        }
    }

    /// 面向用户的带图标标签
    pub fn label(&self) -> &'static str {
        match self {
            RankTag::Recommended => "✅ Recommended",
            RankTag::Alternative => "🟡 Alternative",
            RankTag::Other => "⚪ Other",
        }
    }
}

impl fmt::Display for RankTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankTag::Recommended => write!(f, "RECOMMENDED"),
            RankTag::Alternative => write!(f, "ALTERNATIVE"),
            RankTag::Other => write!(f, "OTHER"),
        }
    }
}

// ==========================================
// 提示等级 (Caution Level)
// ==========================================
// 快速提示的严重度,仅影响展示,不影响评分
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CautionLevel {
    Info,    // 信息
    Warning, // 警告
    Error,   // 配置性错误提示
}

impl fmt::Display for CautionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CautionLevel::Info => write!(f, "INFO"),
            CautionLevel::Warning => write!(f, "WARNING"),
            CautionLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ==========================================
// 阈值模式 (Threshold Mode)
// ==========================================
// 示例默认值仅供教学/演示, 正式使用应录入所选法规来源的断点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdMode {
    IllustrativeDefaults, // 使用示例默认断点 (非法定限值)
    Custom,               // 录入自定义断点
}

impl ThresholdMode {
    /// 从字符串解析阈值模式
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "CUSTOM" => ThresholdMode::Custom,
            _ => ThresholdMode::IllustrativeDefaults, // 默认值
        }
    }
}

impl fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdMode::IllustrativeDefaults => write!(f, "ILLUSTRATIVE_DEFAULTS"),
            ThresholdMode::Custom => write!(f, "CUSTOM"),
        }
    }
}
