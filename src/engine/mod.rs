// ==========================================
// 电弧炉钢渣利用决策工具 - 引擎层
// ==========================================
// 职责: 实现筛查/评分/排名/建议的业务规则引擎
// 红线: 引擎无 I/O, 所有规则必须输出 reason
// ==========================================

pub mod advisory;
pub mod evaluator;
pub mod ranking;
pub mod route_scoring;
pub mod screening_core;

// 重导出核心引擎
pub use advisory::AdvisoryEngine;
pub use evaluator::EvaluationEngine;
pub use ranking::RouteRanker;
pub use route_scoring::RouteScoringEngine;
pub use screening_core::ScreeningCore;
