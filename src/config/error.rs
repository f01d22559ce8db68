// ==========================================
// 电弧炉钢渣利用决策工具 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::TraceMetal;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 阈值校验错误 =====
    #[error("invalid threshold configuration for {metal}: green_max={green_max} exceeds amber_max={amber_max}")]
    InvalidThresholdConfiguration {
        metal: TraceMetal,
        green_max: f64,
        amber_max: f64,
    },

    #[error("negative threshold for {metal}: {field}={value}")]
    NegativeThreshold {
        metal: TraceMetal,
        field: &'static str,
        value: f64,
    },

    // ===== 文件错误 =====
    #[error("threshold file read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("threshold file parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
