// ==========================================
// 电弧炉钢渣利用决策工具 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含 I/O 逻辑,不含引擎逻辑
// ==========================================

pub mod chemistry;
pub mod route;
pub mod screening;
pub mod types;

// 重导出核心类型
pub use chemistry::{ChemistryInput, FacilityAvailability, ReferenceLinks};
pub use route::{Caution, EvaluationOutcome, RankedRoute, Route};
pub use screening::{MetalFlag, ScreeningAssessment, ScreeningSummary};
pub use types::{
    CautionLevel, ExpansionRisk, Flag, RankTag, RouteKind, SeverityTier, ThresholdMode,
    TraceMetal,
};
