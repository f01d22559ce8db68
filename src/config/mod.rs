// ==========================================
// 电弧炉钢渣利用决策工具 - 配置层
// ==========================================
// 职责: 筛查阈值的默认值、录入校验与文件加载
// 红线: 阈值仅为筛查断点,不承载法定限值语义
// ==========================================

pub mod error;
pub mod thresholds;

// 重导出核心配置类型
pub use error::{ConfigError, ConfigResult};
pub use thresholds::{MetalThresholds, ThresholdSet};
