// ==========================================
// 电弧炉钢渣利用决策工具 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行与上层集成调用
// ==========================================

pub mod error;
pub mod evaluation_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use evaluation_api::{
    CautionView, ChemistryDto, EvaluationApi, EvaluationReport, EvaluationRequest, MetalFlagView,
    RankingView, RouteView, ScreeningView,
};
pub use validator::{InputValidator, ValidationMode};
