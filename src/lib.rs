// ==========================================
// 电弧炉钢渣利用决策工具 - 核心库
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 决策支持系统 (筛查旗级与启发式排序,人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 筛查阈值
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 报告渲染
pub mod report;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    CautionLevel, ExpansionRisk, Flag, RankTag, RouteKind, SeverityTier, ThresholdMode, TraceMetal,
};

// 领域实体
pub use domain::{
    Caution, ChemistryInput, EvaluationOutcome, FacilityAvailability, MetalFlag, RankedRoute,
    ReferenceLinks, Route, ScreeningAssessment, ScreeningSummary,
};

// 配置
pub use config::{ConfigError, ConfigResult, MetalThresholds, ThresholdSet};

// 引擎
pub use engine::{AdvisoryEngine, EvaluationEngine, RouteRanker, RouteScoringEngine, ScreeningCore};

// API
pub use api::{ApiError, ApiResult, EvaluationApi, EvaluationReport, EvaluationRequest};

// 报告渲染
pub use report::ReportRenderer;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "电弧炉钢渣利用决策工具";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
